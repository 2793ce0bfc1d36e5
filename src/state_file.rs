//! Loading match-state snapshots from TOML files.
//!
//! This is host plumbing: the layout engine only ever sees the resulting
//! `MatchDisplayState`. A file is read whole and replaces the previous state.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::StateFileError;
use crate::types::{MatchDisplayState, PlayerSlot};

/// Read and parse a state file
pub fn load(path: &Path) -> Result<MatchDisplayState, StateFileError> {
    let content = fs::read_to_string(path).map_err(|source| StateFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let state = parse(&content).map_err(|source| StateFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("STATE: loaded {} vs {} from {}", state.player1, state.player2, path.display());
    Ok(state)
}

/// Parse state file contents
///
/// Empty player names are accepted but logged; the board shows a blank line.
pub fn parse(content: &str) -> Result<MatchDisplayState, toml::de::Error> {
    let state: MatchDisplayState = toml::from_str(content)?;
    for slot in PlayerSlot::ALL {
        if state.name(slot).trim().is_empty() {
            warn!("STATE: player {} has an empty name", slot.index() + 1);
        }
    }
    Ok(state)
}
