//! Line sum invariant: every running sum matches the board.

use super::Invariant;
use crate::accumulators::LineSums;
use crate::state::GameState;

/// Invariant: each row, column and diagonal sum equals a fresh recount.
pub struct LineSumsConsistentInvariant;

impl Invariant<GameState> for LineSumsConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        LineSums::recount(state.board()) == *state.sums()
    }

    fn description() -> &'static str {
        "Line sums equal the signed sum of their cells"
    }
}
