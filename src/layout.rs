//! Scoreboard layout assembly.
//!
//! [`Scoreboard::layout`] turns a match snapshot and a viewport into one flat
//! [`ScoreboardLayout`]: normalized scores, serve indicators and every element
//! rectangle in absolute viewport pixels. Renderers consume only this value.

use tracing::trace;

use crate::layout_constants::*;
use crate::normalize::{normalize, NormalizedScoreRow, SET_SLOTS};
use crate::scale::{compute_scale, DesignSize, ScaleResult, ViewportSize};
use crate::serve::{render_indicator, IndicatorState};
use crate::types::{LogoAssets, MatchDisplayState, PlayerSlot};

/// Axis-aligned rectangle in pixels, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PxRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PxRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Intersection with the box `[0, width] x [0, height]`
    fn clip_to(self, width: f64, height: f64) -> Self {
        let x0 = self.x.max(0.0).min(width);
        let y0 = self.y.max(0.0).min(height);
        let x1 = self.right().min(width).max(x0);
        let y1 = self.bottom().min(height).max(y0);
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    fn scaled(self, factor: f64) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

/// Authored element metrics, in design pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMetrics {
    pub header_height: f64,
    pub header_padding: f64,
    pub header_logo_width: f64,
    pub header_logo_height: f64,
    pub name_top_gap: f64,
    pub name_inset: f64,
    pub name_font_size: f64,
    pub name_line_height: f64,
    pub tournament_logo_width: f64,
    pub tournament_logo_height: f64,
    pub score_font_size: f64,
    pub score_line_height: f64,
    pub score_column_x: f64,
    pub serve_marker_width: f64,
    pub set_cell_width: f64,
    pub set_cell_gap: f64,
    pub points_cell_width: f64,
    pub points_right_inset: f64,
}

impl Default for DesignMetrics {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            header_padding: HEADER_PADDING,
            header_logo_width: HEADER_LOGO_WIDTH,
            header_logo_height: HEADER_LOGO_HEIGHT,
            name_top_gap: NAME_TOP_GAP,
            name_inset: NAME_INSET,
            name_font_size: NAME_FONT_SIZE,
            name_line_height: NAME_LINE_HEIGHT,
            tournament_logo_width: TOURNAMENT_LOGO_WIDTH,
            tournament_logo_height: TOURNAMENT_LOGO_HEIGHT,
            score_font_size: SCORE_FONT_SIZE,
            score_line_height: SCORE_LINE_HEIGHT,
            score_column_x: SCORE_COLUMN_X,
            serve_marker_width: SERVE_MARKER_WIDTH,
            set_cell_width: SET_CELL_WIDTH,
            set_cell_gap: SET_CELL_GAP,
            points_cell_width: POINTS_CELL_WIDTH,
            points_right_inset: POINTS_RIGHT_INSET,
        }
    }
}

/// One player's name line and score row
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRowLayout {
    pub slot: PlayerSlot,
    pub name: String,
    pub name_rect: PxRect,
    /// The whole score row band, from the marker slot to the right edge
    pub row_rect: PxRect,
    pub indicator: IndicatorState,
    /// Marker slot; present with the same size whatever `indicator` says
    pub marker_rect: PxRect,
    pub sets: NormalizedScoreRow,
    pub set_rects: [PxRect; SET_SLOTS],
    pub points: i32,
    pub points_rect: PxRect,
}

/// Flat layout parameters for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreboardLayout {
    pub scale: ScaleResult,
    /// Render box anchored at the viewport's top-left corner
    pub frame: PxRect,
    pub header: PxRect,
    pub sponsor_logo: PxRect,
    pub federation_logo: PxRect,
    pub tournament_logo: PxRect,
    pub name_font_size: f64,
    pub score_font_size: f64,
    pub players: [PlayerRowLayout; 2],
    pub logos: LogoAssets,
    pub tournament_label: String,
}

impl ScoreboardLayout {
    pub fn player(&self, slot: PlayerSlot) -> &PlayerRowLayout {
        &self.players[slot.index()]
    }

    /// Every element rectangle with a short label, in drawing order
    pub fn rects(&self) -> Vec<(String, PxRect)> {
        let mut rects = vec![
            ("header".to_string(), self.header),
            ("sponsor_logo".to_string(), self.sponsor_logo),
            ("federation_logo".to_string(), self.federation_logo),
            ("tournament_logo".to_string(), self.tournament_logo),
        ];
        for (n, row) in self.players.iter().enumerate() {
            let p = n + 1;
            rects.push((format!("player{}.name", p), row.name_rect));
            rects.push((format!("player{}.row", p), row.row_rect));
            rects.push((format!("player{}.marker", p), row.marker_rect));
            for (i, rect) in row.set_rects.iter().enumerate() {
                rects.push((format!("player{}.set{}", p, i + 1), *rect));
            }
            rects.push((format!("player{}.points", p), row.points_rect));
        }
        rects
    }
}

/// Layout engine for a fixed design
///
/// Holds only the validated design size and its metrics; every call to
/// [`Scoreboard::layout`] recomputes from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoreboard {
    design: DesignSize,
    metrics: DesignMetrics,
}

impl Scoreboard {
    pub fn new(design: DesignSize) -> Self {
        Self::with_metrics(design, DesignMetrics::default())
    }

    pub fn with_metrics(design: DesignSize, metrics: DesignMetrics) -> Self {
        Self { design, metrics }
    }

    pub fn design(&self) -> DesignSize {
        self.design
    }

    pub fn metrics(&self) -> &DesignMetrics {
        &self.metrics
    }

    /// Compute the full frame layout for `state` inside `viewport`
    pub fn layout(&self, state: &MatchDisplayState, viewport: ViewportSize) -> ScoreboardLayout {
        let scale = compute_scale(self.design, viewport);
        let s = scale.scale_factor;
        let m = &self.metrics;
        let (w, h) = (self.design.width(), self.design.height());
        let place = |rect: PxRect| rect.clip_to(w, h).scaled(s);

        trace!(
            "LAYOUT: viewport {}x{} -> scale {:.4}, render {:.1}x{:.1}",
            viewport.width,
            viewport.height,
            s,
            scale.render_width,
            scale.render_height
        );

        let header = PxRect::new(0.0, 0.0, w, m.header_height);
        let logo_y = (m.header_height - m.header_logo_height) / 2.0;
        let sponsor_logo = PxRect::new(m.header_padding, logo_y, m.header_logo_width, m.header_logo_height);
        let federation_logo = PxRect::new(
            w - m.header_padding - m.header_logo_width,
            logo_y,
            m.header_logo_width,
            m.header_logo_height,
        );

        let name_width = w - 2.0 * m.name_inset;
        let name1 = PxRect::new(m.name_inset, m.header_height + m.name_top_gap, name_width, m.name_line_height);
        let middle_y = name1.bottom();
        let tournament_logo = PxRect::new(
            m.header_padding,
            middle_y,
            m.tournament_logo_width,
            m.tournament_logo_height,
        );
        let name2 = PxRect::new(m.name_inset, middle_y + m.tournament_logo_height, name_width, m.name_line_height);

        // Both score rows are centered as a pair inside the middle band
        let rows_top = middle_y + (m.tournament_logo_height - 2.0 * m.score_line_height) / 2.0;

        let row_layout = |slot: PlayerSlot, name_rect: PxRect| {
            let y = rows_top + slot.index() as f64 * m.score_line_height;
            let line = m.score_line_height;
            let sets_x = m.score_column_x + m.serve_marker_width;
            let set_rects: [PxRect; SET_SLOTS] = std::array::from_fn(|i| {
                let x = sets_x + i as f64 * (m.set_cell_width + m.set_cell_gap);
                place(PxRect::new(x, y, m.set_cell_width, line))
            });
            PlayerRowLayout {
                slot,
                name: state.name(slot).to_string(),
                name_rect: place(name_rect),
                row_rect: place(PxRect::new(m.score_column_x, y, w - m.score_column_x, line)),
                indicator: render_indicator(state.serving, slot),
                marker_rect: place(PxRect::new(m.score_column_x, y, m.serve_marker_width, line)),
                sets: normalize(state.set_scores(slot)),
                set_rects,
                points: state.current_points(slot),
                points_rect: place(PxRect::new(
                    w - m.points_right_inset - m.points_cell_width,
                    y,
                    m.points_cell_width,
                    line,
                )),
            }
        };

        ScoreboardLayout {
            scale,
            frame: PxRect::new(0.0, 0.0, scale.render_width, scale.render_height),
            header: place(header),
            sponsor_logo: place(sponsor_logo),
            federation_logo: place(federation_logo),
            tournament_logo: place(tournament_logo),
            name_font_size: m.name_font_size * s,
            score_font_size: m.score_font_size * s,
            players: [
                row_layout(PlayerSlot::Player1, name1),
                row_layout(PlayerSlot::Player2, name2),
            ],
            logos: state.logos.clone(),
            tournament_label: state.tournament_label(),
        }
    }
}

impl Default for Scoreboard {
    /// The reference 896x512 design
    fn default() -> Self {
        Self {
            design: DesignSize::REFERENCE,
            metrics: DesignMetrics::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServingPlayer;

    const EPSILON: f64 = 1e-9;

    fn sample_state() -> MatchDisplayState {
        MatchDisplayState::new("E. MORGAN", "R. BIRIA")
            .with_sets(vec![6, 3], vec![4, 6, 2, 1])
            .with_points(30, 15)
            .with_serving(ServingPlayer::Player1)
            .with_tournament("BJK Cup", Some(2024))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < EPSILON, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn test_reference_geometry_at_unit_scale() {
        let layout = Scoreboard::default().layout(&sample_state(), ViewportSize::new(896.0, 512.0));
        assert_eq!(layout.scale.scale_factor, 1.0);
        assert_eq!(layout.header, PxRect::new(0.0, 0.0, 896.0, 62.5));
        assert_eq!(layout.sponsor_logo, PxRect::new(12.5, 6.25, 250.0, 50.0));
        assert_eq!(layout.federation_logo, PxRect::new(633.5, 6.25, 250.0, 50.0));

        let p1 = layout.player(PlayerSlot::Player1);
        assert_eq!(p1.name_rect, PxRect::new(12.5, 64.5, 871.0, 92.0));
        assert_eq!(p1.marker_rect, PxRect::new(350.0, 179.0, 40.0, 75.0));
        assert_eq!(p1.set_rects[0], PxRect::new(390.0, 179.0, 50.0, 75.0));
        assert_eq!(p1.set_rects[2], PxRect::new(510.0, 179.0, 50.0, 75.0));
        assert_eq!(p1.points_rect, PxRect::new(746.0, 179.0, 80.0, 75.0));

        let p2 = layout.player(PlayerSlot::Player2);
        assert_eq!(p2.marker_rect.y, 254.0);
        assert_eq!(p2.name_rect, PxRect::new(12.5, 351.5, 871.0, 92.0));
        assert_eq!(layout.tournament_logo, PxRect::new(12.5, 156.5, 300.0, 195.0));
    }

    #[test]
    fn test_scores_are_normalized() {
        let layout = Scoreboard::default().layout(&sample_state(), ViewportSize::new(896.0, 512.0));
        assert_eq!(layout.player(PlayerSlot::Player1).sets, [6, 3, 0]);
        assert_eq!(layout.player(PlayerSlot::Player2).sets, [4, 6, 2]);
        assert_eq!(layout.player(PlayerSlot::Player1).points, 30);
        assert_eq!(layout.player(PlayerSlot::Player2).points, 15);
    }

    #[test]
    fn test_indicators_follow_server() {
        let board = Scoreboard::default();
        let viewport = ViewportSize::new(896.0, 512.0);
        let layout = board.layout(&sample_state(), viewport);
        assert_eq!(layout.player(PlayerSlot::Player1).indicator, IndicatorState::ShowMarker);
        assert_eq!(layout.player(PlayerSlot::Player2).indicator, IndicatorState::ReserveSpace);

        let layout = board.layout(&sample_state().with_serving(ServingPlayer::None), viewport);
        assert!(layout.players.iter().all(|p| p.indicator == IndicatorState::ReserveSpace));
    }

    #[test]
    fn test_serve_change_does_not_move_anything() {
        let board = Scoreboard::default();
        let viewport = ViewportSize::new(1200.0, 600.0);
        let base = board.layout(&sample_state(), viewport).rects();
        for serving in [ServingPlayer::Player2, ServingPlayer::None] {
            let other = board.layout(&sample_state().with_serving(serving), viewport).rects();
            assert_eq!(base, other, "layout moved for serving={:?}", serving);
        }
    }

    #[test]
    fn test_scaled_geometry() {
        let layout = Scoreboard::default().layout(&sample_state(), ViewportSize::new(1200.0, 600.0));
        let s = 600.0 / 512.0;
        assert_close(layout.scale.scale_factor, s);
        assert_close(layout.frame.width, 1050.0);
        assert_close(layout.frame.height, 600.0);
        assert_close(layout.name_font_size, 80.0 * s);
        assert_close(layout.score_font_size, 50.0 * s);
        let marker = layout.player(PlayerSlot::Player1).marker_rect;
        assert_close(marker.x, 350.0 * s);
        assert_close(marker.width, 40.0 * s);
    }

    #[test]
    fn test_all_rects_inside_frame() {
        let board = Scoreboard::default();
        for (vw, vh) in [(1200.0, 600.0), (320.0, 240.0), (896.0, 512.0), (4000.0, 90.0)] {
            let layout = board.layout(&sample_state(), ViewportSize::new(vw, vh));
            assert!(layout.frame.right() <= vw && layout.frame.bottom() <= vh);
            for (label, rect) in layout.rects() {
                assert!(rect.x >= 0.0 && rect.y >= 0.0, "{} negative origin", label);
                assert!(rect.right() <= layout.frame.right() + EPSILON, "{} overflows right", label);
                assert!(rect.bottom() <= layout.frame.bottom() + EPSILON, "{} overflows bottom", label);
            }
        }
    }

    #[test]
    fn test_small_design_clips_elements() {
        let design = DesignSize::new(400.0, 200.0).unwrap();
        let layout = Scoreboard::new(design).layout(&sample_state(), ViewportSize::new(400.0, 200.0));
        for (label, rect) in layout.rects() {
            assert!(rect.right() <= 400.0 + EPSILON, "{} overflows right", label);
            assert!(rect.bottom() <= 200.0 + EPSILON, "{} overflows bottom", label);
            assert!(rect.width >= 0.0 && rect.height >= 0.0, "{} has negative size", label);
        }
    }

    #[test]
    fn test_zero_viewport_collapses_everything() {
        let layout = Scoreboard::default().layout(&sample_state(), ViewportSize::new(0.0, 0.0));
        assert!(!layout.scale.is_visible());
        for (label, rect) in layout.rects() {
            assert_eq!(rect.width, 0.0, "{}", label);
            assert_eq!(rect.height, 0.0, "{}", label);
        }
    }

    #[test]
    fn test_assets_pass_through() {
        let mut state = sample_state();
        state.logos.sponsor = crate::types::AssetRef::new("https://cdn.example/logo.svg?v=2");
        let layout = Scoreboard::default().layout(&state, ViewportSize::new(896.0, 512.0));
        assert_eq!(layout.logos.sponsor.as_str(), "https://cdn.example/logo.svg?v=2");
        assert_eq!(layout.tournament_label, "BJK Cup 2024");
    }

    #[test]
    fn test_layout_is_idempotent() {
        let board = Scoreboard::default();
        let viewport = ViewportSize::new(1024.0, 768.0);
        assert_eq!(board.layout(&sample_state(), viewport), board.layout(&sample_state(), viewport));
    }

    #[test]
    fn test_custom_metrics() {
        let metrics = DesignMetrics {
            serve_marker_width: 60.0,
            ..DesignMetrics::default()
        };
        let board = Scoreboard::with_metrics(Scoreboard::default().design(), metrics);
        let layout = board.layout(&sample_state(), ViewportSize::new(896.0, 512.0));
        assert_eq!(layout.player(PlayerSlot::Player1).set_rects[0].x, 410.0);
        assert_eq!(board.metrics().serve_marker_width, 60.0);
    }
}
