use ratatui::{buffer::Buffer, layout::Rect};
use tracing::trace;

use super::state::AppState;
use super::widgets::{RenderableWidget, ScoreboardWidget, StatusBar};
use crate::config::{Config, DisplayConfig};
use crate::error::LayoutError;
use crate::layout::Scoreboard;
use crate::layout_constants::STATUS_BAR_HEIGHT;
use crate::scale::ScaleResult;

/// Draws one frame: the scoreboard in the upper area, the status bar below
///
/// The layout is recomputed from `AppState::viewport` on every frame; nothing
/// is cached between draws.
pub struct Renderer {
    scoreboard: Scoreboard,
    display: DisplayConfig,
}

impl Renderer {
    pub fn new(scoreboard: Scoreboard, display: DisplayConfig) -> Self {
        Self { scoreboard, display }
    }

    /// Build a renderer for the design size and theme in `config`
    pub fn from_config(config: &Config) -> Result<Self, LayoutError> {
        Ok(Self::new(Scoreboard::new(config.design_size()?), config.display()))
    }

    /// Render `state` into `area` and return the scale that was used
    pub fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) -> ScaleResult {
        let status_height = STATUS_BAR_HEIGHT.min(area.height);
        let board_area = Rect::new(area.x, area.y, area.width, area.height - status_height);
        let status_area = Rect::new(area.x, area.y + board_area.height, area.width, status_height);

        let layout = self.scoreboard.layout(&state.match_state, state.viewport);
        trace!(
            "RENDER: rev {} scale {:.4} in {}x{} cells",
            state.revision,
            layout.scale.scale_factor,
            board_area.width,
            board_area.height
        );

        ScoreboardWidget::new(&layout, state.cell).render(board_area, buf, &self.display);

        StatusBar::new()
            .with_scale(layout.scale.scale_factor)
            .with_last_update(state.last_update.clone())
            .with_error(state.error_message.clone())
            .render(status_area, buf, &self.display);

        layout.scale
    }
}
