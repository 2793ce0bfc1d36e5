use tracing::{info, trace};

use super::action::{Action, Effect};
use super::effects;
use super::reducer::reduce;
use super::state::AppState;

/// Owns the application state and runs actions through the reducer
///
/// Effects are executed synchronously. An effect that yields a follow-up
/// action (a state file load) is dispatched before `dispatch` returns.
pub struct Runtime {
    state: AppState,
    time_format: String,
}

impl Runtime {
    pub fn new(state: AppState, time_format: impl Into<String>) -> Self {
        Self {
            state,
            time_format: time_format.into(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action; returns true once a quit was requested
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut quit = false;
        let mut pending = Some(action);

        while let Some(action) = pending.take() {
            trace!("ACTION: Dispatching {:?}", action);
            let revision = self.state.revision;

            let state = std::mem::take(&mut self.state);
            let (new_state, effect) = reduce(state, action);
            self.state = new_state;

            if self.state.revision != revision {
                self.stamp_update();
            }

            pending = match effect {
                Effect::None => None,
                Effect::LoadState(path) => {
                    info!("EFFECT: reloading {}", path.display());
                    Some(effects::load_state(&path))
                }
                Effect::Quit => {
                    quit = true;
                    None
                }
            };
        }

        quit
    }

    /// Record the current time as the last state update
    pub fn stamp_update(&mut self) {
        self.state.last_update = Some(chrono::Local::now().format(&self.time_format).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CellConfig;
    use crate::tui::testing::sample_state;
    use crate::types::PlayerSlot;
    use std::io::Write;
    use std::path::PathBuf;

    fn runtime(state_path: Option<PathBuf>) -> Runtime {
        Runtime::new(AppState::new(sample_state(), CellConfig::default(), state_path), "%H:%M:%S")
    }

    #[test]
    fn test_edit_stamps_last_update() {
        let mut rt = runtime(None);
        assert!(rt.state().last_update.is_none());
        assert!(!rt.dispatch(Action::AddPoint(PlayerSlot::Player1)));
        let stamp = rt.state().last_update.clone().unwrap();
        assert_eq!(stamp.len(), 8);
        assert_eq!(rt.state().match_state.current_points1, 31);
    }

    #[test]
    fn test_resize_does_not_stamp() {
        let mut rt = runtime(None);
        rt.dispatch(Action::Resize { cols: 112, rows: 34 });
        assert!(rt.state().last_update.is_none());
    }

    #[test]
    fn test_quit_requested() {
        let mut rt = runtime(None);
        assert!(rt.dispatch(Action::Quit));
    }

    #[test]
    fn test_reload_runs_load_effect() {
        let path = std::env::temp_dir().join(format!("scoreboard-runtime-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "player1 = \"C. GAUFF\"\nplayer2 = \"I. SWIATEK\"\nserving = \"player2\"").unwrap();

        let mut rt = runtime(Some(path.clone()));
        assert!(!rt.dispatch(Action::ReloadState));
        assert_eq!(rt.state().match_state.player1, "C. GAUFF");
        assert_eq!(rt.state().revision, 1);
        assert!(rt.state().error_message.is_none());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_failed_reload_keeps_state() {
        let mut rt = runtime(Some(PathBuf::from("/nonexistent/scoreboard/state.toml")));
        rt.dispatch(Action::ReloadState);
        assert_eq!(rt.state().match_state, sample_state());
        assert!(rt.state().error_message.as_deref().unwrap().starts_with("reload failed"));
        assert_eq!(rt.state().revision, 0);
    }
}
