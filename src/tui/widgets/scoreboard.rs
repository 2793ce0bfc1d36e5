//! Scoreboard widget - draws a computed `ScoreboardLayout` into a terminal buffer
//!
//! The layout is in pixels; the widget maps every rectangle to whole cells
//! using the configured cell size. Both edges are floored, so neighbouring
//! elements never overlap and the render box stays anchored at the top-left.
//!
//! ```text
//!  [sponsor_logo.png]                              [federation_logo.png]
//!
//!  E. MORGAN
//!
//!  ╭──────────────╮
//!  │              │      ●   6   3   0              30
//!  │ BJK Cup 2024 │
//!  │              │          4   6   0              15
//!  ╰──────────────╯
//!  R. BIRIA
//! ```

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::{CellConfig, DisplayConfig};
use crate::layout::{PlayerRowLayout, PxRect, ScoreboardLayout};
use crate::serve::IndicatorState;

use super::buffer_utils::{draw_box, draw_text, Align};
use super::RenderableWidget;

/// Map a pixel rectangle to cells inside `origin`
pub fn px_to_cells(rect: &PxRect, cell: CellConfig, origin: Rect) -> Rect {
    let cw = f64::from(cell.width_px.max(1));
    let ch = f64::from(cell.height_px.max(1));
    let to_cell = |v: f64, size: f64| (v / size).floor().max(0.0).min(f64::from(u16::MAX)) as u16;

    let x0 = to_cell(rect.x, cw);
    let y0 = to_cell(rect.y, ch);
    let x1 = to_cell(rect.right(), cw).max(x0);
    let y1 = to_cell(rect.bottom(), ch).max(y0);

    Rect::new(
        origin.x.saturating_add(x0),
        origin.y.saturating_add(y0),
        x1 - x0,
        y1 - y0,
    )
    .intersection(origin)
}

/// Terminal rendering of one scoreboard frame
#[derive(Debug, Clone)]
pub struct ScoreboardWidget<'a> {
    layout: &'a ScoreboardLayout,
    cell: CellConfig,
}

impl<'a> ScoreboardWidget<'a> {
    pub fn new(layout: &'a ScoreboardLayout, cell: CellConfig) -> Self {
        Self { layout, cell }
    }

    fn cells(&self, rect: &PxRect, area: Rect) -> Rect {
        px_to_cells(rect, self.cell, area)
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let layout = self.layout;
        let style = config.header_style();
        buf.set_style(self.cells(&layout.header, area), style);

        let sponsor = format!("[{}]", layout.logos.sponsor);
        draw_text(buf, self.cells(&layout.sponsor_logo, area), &sponsor, style, Align::Left);

        let federation = format!("[{}]", layout.logos.federation);
        draw_text(buf, self.cells(&layout.federation_logo, area), &federation, style, Align::Right);
    }

    fn render_tournament(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        let rect = self.cells(&self.layout.tournament_logo, area);
        let style = config.logo_style();
        let label = if self.layout.tournament_label.is_empty() {
            format!("[{}]", self.layout.logos.tournament)
        } else {
            self.layout.tournament_label.clone()
        };

        if rect.width >= 3 && rect.height >= 3 {
            draw_box(buf, rect, &config.box_chars, style);
            let inner = Rect::new(rect.x + 1, rect.y + 1, rect.width - 2, rect.height - 2);
            draw_text(buf, inner, &label, style, Align::Center);
        } else {
            draw_text(buf, rect, &label, style, Align::Center);
        }
    }

    fn render_player(&self, row: &PlayerRowLayout, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        draw_text(buf, self.cells(&row.name_rect, area), &row.name, config.name_style(), Align::Left);

        // The marker slot is always laid out; without a marker it stays blank
        if row.indicator == IndicatorState::ShowMarker {
            let marker = self.cells(&row.marker_rect, area);
            draw_text(buf, marker, &config.box_chars.serve_marker, config.marker_style(), Align::Center);
        }

        let score_style = config.score_style();
        for (score, rect) in row.sets.iter().zip(&row.set_rects) {
            draw_text(buf, self.cells(rect, area), &score.to_string(), score_style, Align::Center);
        }
        draw_text(buf, self.cells(&row.points_rect, area), &row.points.to_string(), score_style, Align::Center);
    }
}

impl RenderableWidget for ScoreboardWidget<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer, config: &DisplayConfig) {
        if !self.layout.scale.is_visible() {
            return;
        }

        let frame = self.cells(&self.layout.frame, area);
        if frame.is_empty() {
            return;
        }
        buf.set_style(frame, config.board_style());

        self.render_header(area, buf, config);
        self.render_tournament(area, buf, config);
        for row in &self.layout.players {
            self.render_player(row, area, buf, config);
        }
    }
}
