/// Widget-based rendering infrastructure for the terminal scoreboard
///
/// Widgets render themselves directly to a ratatui Buffer from already
/// computed values; none of them decides layout or scores on its own.

#[cfg(test)]
pub mod testing;

pub mod buffer_utils;

pub mod scoreboard;
pub use scoreboard::{px_to_cells, ScoreboardWidget};

pub mod status_bar;
pub use status_bar::{KeyHint, StatusBar};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
};
use crate::config::DisplayConfig;

/// Core trait for renderable widgets
///
/// Widgets render into a ratatui Buffer, which keeps them testable: a test
/// renders into an off-screen buffer and inspects the cells.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `config` - Display configuration (colors, box chars, etc.)
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig);
}
