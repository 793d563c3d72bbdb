//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are checked on every move; postconditions in
//! debug builds.

use super::action::MoveError;
use super::invariants::{InvariantSet, SumlineInvariants};
use super::state::{GameState, Placement};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a win or draw.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is terminal.
    pub fn check(_action: &Placement, state: &GameState) -> Result<(), MoveError> {
        if state.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both coordinates are on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside 0..=2.
    pub fn check(action: &Placement, _state: &GameState) -> Result<(), MoveError> {
        if action.at.in_bounds() {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                row: action.at.row,
                col: action.at.col,
            })
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells. Assumes [`InBounds`] already passed.
    pub fn check(action: &Placement, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(action.at.row, action.at.col) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: action.at.row,
                col: action.at.col,
            })
        }
    }
}

/// Precondition: it is this mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a mark other than the one to move.
    pub fn check(action: &Placement, state: &GameState) -> Result<(), MoveError> {
        if action.mark == state.to_move() {
            Ok(())
        } else {
            Err(MoveError::WrongTurn {
                expected: state.to_move(),
                actual: action.mark,
            })
        }
    }
}

/// Composite precondition, checked in order: game live, in range, cell
/// empty, right turn. The first failure wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state), fields(mark = %action.mark, at = %action.at))]
    pub fn check(action: &Placement, state: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(action, state)?;
        InBounds::check(action, state)?;
        CellIsEmpty::check(action, state)?;
        PlayersTurn::check(action, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Line sums match the board
/// - Marks still alternate
/// - History still rebuilds the board
pub struct MoveContract;

impl Contract<GameState, Placement> for MoveContract {
    fn pre(state: &GameState, action: &Placement) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        SumlineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {descriptions}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::Mark;

    fn placement(mark: Mark, row: usize, col: usize) -> Placement {
        Placement {
            mark,
            at: Move::new(row, col),
        }
    }

    #[test]
    fn test_range_checked_before_turn() {
        let state = GameState::new();
        assert_eq!(
            LegalMove::check(&placement(Mark::O, 3, 0), &state),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_occupancy_checked_before_turn() {
        let mut state = GameState::new();
        state.board.place(0, 0, Mark::X);
        assert_eq!(
            LegalMove::check(&placement(Mark::X, 0, 0), &state),
            Err(MoveError::CellOccupied { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_terminal_checked_first() {
        let mut state = GameState::new();
        state.status = crate::state::GameStatus::Draw;
        assert_eq!(
            LegalMove::check(&placement(Mark::O, 9, 9), &state),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_post_flags_corruption() {
        let before = GameState::new();
        let mut after = before.clone();
        after.board.place(1, 1, Mark::X);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
