use std::path::Path;

use anyhow::Context;
use tracing::{debug, error};

use super::action::Action;
use crate::state_file;

/// Load a state file and turn the outcome into the action that reports it
///
/// Failures never end the session: they come back as `StateLoadFailed`
/// and the previous snapshot stays on the board.
pub fn load_state(path: &Path) -> Action {
    debug!("EFFECT: loading state from {}", path.display());
    let result = state_file::load(path).context("reload failed");
    match result {
        Ok(state) => Action::ReplaceState(state),
        Err(e) => {
            let message = format!("{:#}", e);
            error!("EFFECT: {}", message);
            Action::StateLoadFailed(message)
        }
    }
}
