use tracing::debug;

use super::action::{Action, Effect};
use super::state::{viewport_for_terminal, AppState};
use crate::types::{MatchDisplayState, PlayerSlot};

const NO_STATE_FILE: &str = "no state file to reload (start with --state FILE)";

/// Pure state reducer
///
/// Takes the current state and an action and returns the new state plus the
/// effect the runtime should execute. No I/O happens here.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::Resize { cols, rows } => {
            let viewport = viewport_for_terminal(cols, rows, state.cell);
            debug!(
                "RESIZE: {}x{} cells -> {}x{} px",
                cols, rows, viewport.width, viewport.height
            );
            let new_state = AppState {
                terminal_size: (cols, rows),
                viewport,
                ..state
            };
            (new_state, Effect::None)
        }

        Action::ReplaceState(next) => {
            debug!("STATE: replacing snapshot ({} vs {})", next.player1, next.player2);
            (state.replace_match_state(next), Effect::None)
        }

        Action::StateLoadFailed(message) => {
            let new_state = AppState {
                error_message: Some(message),
                ..state
            };
            (new_state, Effect::None)
        }

        Action::ReloadState => match state.state_path.clone() {
            Some(path) => (state, Effect::LoadState(path)),
            None => {
                let new_state = AppState {
                    error_message: Some(NO_STATE_FILE.to_string()),
                    ..state
                };
                (new_state, Effect::None)
            }
        },

        Action::CycleServer => edit(state, |m| m.serving = m.serving.cycle()),

        Action::AddPoint(slot) => edit(state, |m| {
            let points = m.current_points_mut(slot);
            *points = points.saturating_add(1);
        }),

        Action::AddGame(slot) => edit(state, |m| add_game(m, slot)),

        Action::NewSet => edit(state, |m| {
            for slot in PlayerSlot::ALL {
                m.set_scores_mut(slot).push(0);
            }
        }),

        Action::ClearPoints => edit(state, |m| {
            m.current_points1 = 0;
            m.current_points2 = 0;
        }),

        Action::Quit => (state, Effect::Quit),
    }
}

/// Apply an operator edit to a copy of the snapshot and swap it in
fn edit(state: AppState, f: impl FnOnce(&mut MatchDisplayState)) -> (AppState, Effect) {
    let mut next = state.match_state.clone();
    f(&mut next);
    (state.replace_match_state(next), Effect::None)
}

/// +1 game in the last set column; opens the first set when there is none
fn add_game(m: &mut MatchDisplayState, slot: PlayerSlot) {
    if m.set_scores1.is_empty() && m.set_scores2.is_empty() {
        m.set_scores1.push(0);
        m.set_scores2.push(0);
    }
    let sets = m.set_scores_mut(slot);
    if sets.is_empty() {
        sets.push(0);
    }
    if let Some(last) = sets.last_mut() {
        *last = last.saturating_add(1);
    }
}
