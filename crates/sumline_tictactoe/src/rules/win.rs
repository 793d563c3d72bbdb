//! Win detection from running line sums.

use crate::state::GameState;
use crate::types::{Mark, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if `player` has three marks on any row, column or diagonal.
///
/// Constant time: compares the eight line sums against `mark * 3`.
#[instrument(skip(state), fields(mark = %player.mark()))]
pub fn check_win(state: &GameState, player: &Player) -> bool {
    has_line(state, player.mark())
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(state))]
pub fn winner(state: &GameState) -> Option<Mark> {
    Mark::iter().find(|mark| has_line(state, *mark))
}

pub(crate) fn has_line(state: &GameState, mark: Mark) -> bool {
    state.sums().any_equals(mark.win_sum())
}
