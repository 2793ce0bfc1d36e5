//! Score normalization.
//!
//! The board always renders three set columns per player, however many sets
//! the host reports.

/// Number of set columns on the board
pub const SET_SLOTS: usize = 3;

/// Value used for set columns the host did not report
pub const EMPTY_SET_SCORE: i32 = 0;

/// Set scores for one player, always exactly [`SET_SLOTS`] long
pub type NormalizedScoreRow = [i32; SET_SLOTS];

/// Fit a set-score sequence of any length into three columns
///
/// Short sequences are padded on the right with zeros and long ones keep only
/// their first three entries. Values are copied as-is, negatives included.
pub fn normalize(scores: &[i32]) -> NormalizedScoreRow {
    let mut row = [EMPTY_SET_SCORE; SET_SLOTS];
    for (slot, score) in row.iter_mut().zip(scores) {
        *slot = *score;
    }
    row
}
