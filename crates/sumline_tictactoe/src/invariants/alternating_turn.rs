//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::state::GameState;
use crate::types::Mark;

/// Invariant: marks alternate turns.
///
/// History must read X, O, X, O, ... and the mark to move is X after an
/// even number of moves, O after an odd number.
pub struct AlternatingTurnInvariant;

fn expected(ply: usize) -> Mark {
    if ply % 2 == 0 { Mark::X } else { Mark::O }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history
            .iter()
            .enumerate()
            .all(|(ply, placement)| placement.mark == expected(ply))
            && state.to_move() == expected(history.len())
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}
