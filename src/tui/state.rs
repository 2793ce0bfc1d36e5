use std::path::PathBuf;

use crate::config::CellConfig;
use crate::layout_constants::STATUS_BAR_HEIGHT;
use crate::scale::ViewportSize;
use crate::types::MatchDisplayState;

/// Root application state - single source of truth
///
/// All changes go through the reducer. The match snapshot is never edited in
/// place: every change produces a new `MatchDisplayState` and bumps `revision`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Snapshot currently on the board
    pub match_state: MatchDisplayState,

    /// Incremented whenever `match_state` is replaced
    pub revision: u64,

    /// Formatted time of the last replacement, stamped by the runtime
    pub last_update: Option<String>,

    /// Terminal size in cells (columns, rows)
    pub terminal_size: (u16, u16),

    /// Board area in pixels, derived from `terminal_size`
    pub viewport: ViewportSize,

    pub cell: CellConfig,

    /// File the `r` key reloads from
    pub state_path: Option<PathBuf>,

    /// Last reload error, cleared by the next successful replacement
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(match_state: MatchDisplayState, cell: CellConfig, state_path: Option<PathBuf>) -> Self {
        Self {
            match_state,
            revision: 0,
            last_update: None,
            terminal_size: (0, 0),
            viewport: ViewportSize::new(0.0, 0.0),
            cell,
            state_path,
            error_message: None,
        }
    }

    /// Swap in a new snapshot
    pub fn replace_match_state(mut self, next: MatchDisplayState) -> Self {
        self.match_state = next;
        self.revision += 1;
        self.error_message = None;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MatchDisplayState::default(), CellConfig::default(), None)
    }
}

/// Pixel viewport for a terminal of `cols` x `rows` cells, minus the status bar
pub fn viewport_for_terminal(cols: u16, rows: u16, cell: CellConfig) -> ViewportSize {
    let board_rows = rows.saturating_sub(STATUS_BAR_HEIGHT);
    ViewportSize::new(
        f64::from(cols) * f64::from(cell.width_px),
        f64::from(board_rows) * f64::from(cell.height_px),
    )
}
