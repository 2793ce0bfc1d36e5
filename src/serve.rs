//! Serve indicator selection.
//!
//! Both score rows always carry a marker slot of the same width. Only the
//! serving player's slot shows the marker, so a change of server never moves
//! anything else on the board.

use crate::types::{PlayerSlot, ServingPlayer};

/// What to draw in a player's marker slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    /// Draw the serve marker
    ShowMarker,
    /// Draw an empty placeholder of the marker's width
    ReserveSpace,
}

impl IndicatorState {
    pub fn is_marker(self) -> bool {
        self == IndicatorState::ShowMarker
    }
}

/// Pick the indicator for `for_player` given who is serving
pub fn render_indicator(serving: ServingPlayer, for_player: PlayerSlot) -> IndicatorState {
    match (serving, for_player) {
        (ServingPlayer::Player1, PlayerSlot::Player1)
        | (ServingPlayer::Player2, PlayerSlot::Player2) => IndicatorState::ShowMarker,
        _ => IndicatorState::ReserveSpace,
    }
}
