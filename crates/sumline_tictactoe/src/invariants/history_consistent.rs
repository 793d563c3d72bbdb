//! History consistency invariant: the move log rebuilds the board.

use super::Invariant;
use crate::state::GameState;
use crate::types::Board;

/// Invariant: replaying the history onto an empty board gives the board.
///
/// Also covers monotonicity: a cell appearing twice in the history, or a
/// mark missing from it, breaks the equality.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut rebuilt = Board::new();
        for placement in state.history() {
            if !rebuilt.is_empty(placement.at.row, placement.at.col) {
                return false;
            }
            rebuilt.place(placement.at.row, placement.at.col, placement.mark);
        }
        rebuilt == *state.board()
    }

    fn description() -> &'static str {
        "History replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::engine::replay;
    use crate::state::Placement;
    use crate::types::Mark;

    #[test]
    fn test_holds_after_moves() {
        let state = replay(&[Move::new(0, 1), Move::new(2, 1)]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_repeated_cell_violates() {
        let mut state = replay(&[Move::new(0, 1)]).unwrap();
        state.history.push(Placement {
            mark: Mark::O,
            at: Move::new(0, 1),
        });
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_off_board_entry_violates() {
        let mut state = GameState::new();
        state.history.push(Placement {
            mark: Mark::X,
            at: Move::new(5, 5),
        });
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
