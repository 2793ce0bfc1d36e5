/// Keyboard event to action mapping
///
/// The board has no focus or modes, so every key maps to the same action
/// regardless of state.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use super::action::Action;
use crate::types::PlayerSlot;

pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') => Some(Action::CycleServer),
        KeyCode::Char('1') => Some(Action::AddPoint(PlayerSlot::Player1)),
        KeyCode::Char('2') => Some(Action::AddPoint(PlayerSlot::Player2)),
        KeyCode::Char('g') => Some(Action::AddGame(PlayerSlot::Player1)),
        KeyCode::Char('h') => Some(Action::AddGame(PlayerSlot::Player2)),
        KeyCode::Char('n') => Some(Action::NewSet),
        KeyCode::Char('c') => Some(Action::ClearPoints),
        KeyCode::Char('r') => Some(Action::ReloadState),
        _ => None,
    };

    if action.is_none() {
        trace!("KEY: unmapped {:?}", key.code);
    }
    action
}
