//! Shared layout constants used by the layout engine and the terminal renderer.
//!
//! Design metrics are in design pixels at the reference size. The layout
//! engine multiplies them by the scale factor; nothing else should.

/// Reference design width in pixels
pub const DESIGN_WIDTH: f64 = 896.0;

/// Reference design height in pixels
pub const DESIGN_HEIGHT: f64 = 512.0;

/// Height of the logo header band
pub const HEADER_HEIGHT: f64 = 62.5;

/// Inner padding of the header band (also the left inset of the tournament logo)
pub const HEADER_PADDING: f64 = 12.5;

/// Width of the sponsor and federation logos in the header
pub const HEADER_LOGO_WIDTH: f64 = 250.0;

/// Height of the sponsor and federation logos in the header
pub const HEADER_LOGO_HEIGHT: f64 = 50.0;

/// Gap between the header band and the first player name
pub const NAME_TOP_GAP: f64 = 2.0;

/// Left and right inset of the player name lines
pub const NAME_INSET: f64 = 12.5;

/// Font size of the player names
pub const NAME_FONT_SIZE: f64 = 80.0;

/// Line height of the player names
pub const NAME_LINE_HEIGHT: f64 = 92.0;

/// Width reserved for the tournament logo in the middle band
pub const TOURNAMENT_LOGO_WIDTH: f64 = 300.0;

/// Height of the tournament logo, which sets the height of the middle band
pub const TOURNAMENT_LOGO_HEIGHT: f64 = 195.0;

/// Font size of set scores and points
pub const SCORE_FONT_SIZE: f64 = 50.0;

/// Height of one score row (font size x 1.5 line height)
pub const SCORE_LINE_HEIGHT: f64 = SCORE_FONT_SIZE * 1.5;

/// Left edge of the score column (marker slot, then set cells)
pub const SCORE_COLUMN_X: f64 = 350.0;

/// Width of the serve marker slot, reserved whether or not the marker shows
pub const SERVE_MARKER_WIDTH: f64 = 40.0;

/// Minimum width of one set cell
pub const SET_CELL_WIDTH: f64 = 50.0;

/// Gap after each set cell
pub const SET_CELL_GAP: f64 = 10.0;

/// Width of the current-game points cell
pub const POINTS_CELL_WIDTH: f64 = 80.0;

/// Distance from the right edge of the design to the points cell
pub const POINTS_RIGHT_INSET: f64 = 70.0;

// Terminal renderer constants

/// Default terminal cell width in pixels, for viewport conversion
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Default terminal cell height in pixels, for viewport conversion
pub const DEFAULT_CELL_HEIGHT_PX: u16 = 16;

/// Rows taken by the status bar below the board
pub const STATUS_BAR_HEIGHT: u16 = 2;
