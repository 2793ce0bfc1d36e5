/// Off-screen rendering and plain-text snapshots
///
/// Used by the `render` command to draw one frame without a terminal and
/// write it out as text lines.
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use ratatui::{buffer::Buffer, layout::Rect};

use super::action::Action;
use super::reducer::reduce;
use super::renderer::Renderer;
use super::state::AppState;
use crate::config::CellConfig;
use crate::types::MatchDisplayState;

/// Draw one frame of `match_state` into a fresh `cols` x `rows` buffer
pub fn render_snapshot(
    renderer: &Renderer,
    match_state: MatchDisplayState,
    cell: CellConfig,
    cols: u16,
    rows: u16,
) -> Buffer {
    let state = AppState::new(match_state, cell, None);
    let (state, _) = reduce(state, Action::Resize { cols, rows });

    let mut buffer = Buffer::empty(Rect::new(0, 0, cols, rows));
    renderer.render(&state, buffer.area, &mut buffer);
    buffer
}

/// Write each buffer row as one line, trailing blanks removed
pub fn write_buffer<W: Write>(buffer: &Buffer, out: &mut W) -> io::Result<()> {
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let line: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

/// Save a buffer to a text file
pub fn save_buffer(buffer: &Buffer, path: &Path) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_buffer(buffer, &mut file)?;
    file.flush()
}
