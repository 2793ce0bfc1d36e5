pub mod layout;
pub mod render;

use std::path::Path;

use anyhow::{Context, Result};

use crate::state_file;
use crate::types::MatchDisplayState;

/// Load the match state from `path`, or the demo match when there is none
pub fn load_match_state(path: Option<&Path>) -> Result<MatchDisplayState> {
    match path {
        Some(path) => state_file::load(path)
            .with_context(|| format!("Cannot start with state file '{}'", path.display())),
        None => Ok(MatchDisplayState::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_path_is_demo() {
        let state = load_match_state(None).unwrap();
        assert_eq!(state, MatchDisplayState::default());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = load_match_state(Some(Path::new("/nonexistent/match.toml"))).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Cannot start with state file '/nonexistent/match.toml'"));
        assert!(message.contains("failed to read state file"));
    }
}
