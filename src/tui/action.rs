use std::path::PathBuf;

use crate::types::{MatchDisplayState, PlayerSlot};

/// Global actions
///
/// All state changes happen through actions. They come from key events,
/// terminal resizes, and the results of effects (state file loads).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Terminal resized to `cols` x `rows` cells
    Resize { cols: u16, rows: u16 },

    /// Replace the whole match snapshot
    ReplaceState(MatchDisplayState),
    StateLoadFailed(String),
    ReloadState,

    // Operator edits
    CycleServer,
    AddPoint(PlayerSlot),
    AddGame(PlayerSlot),
    NewSet,
    ClearPoints,

    Quit,
}

/// Side effects requested by the reducer and executed by the runtime
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    LoadState(PathBuf),
    Quit,
}
