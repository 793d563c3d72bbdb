//! First-class action types for tic-tac-toe.
//!
//! A move is a coordinate request, not a side effect. It can be built from
//! raw input and is only validated when it reaches the engine.

use super::types::{Mark, SIZE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A candidate move: the (row, col) of the cell to mark.
///
/// Values outside 0..=2 are representable so raw input can reach the engine's
/// single validation point. Use [`Move::try_new`] to reject them eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Move {
    /// Creates a move without checking its range.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a move, rejecting coordinates that fall off the board.
    #[instrument]
    pub fn try_new(row: usize, col: usize) -> Result<Self, MoveError> {
        let mv = Self::new(row, col);
        if mv.in_bounds() {
            Ok(mv)
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    /// Whether both coordinates are on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// Whether this cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(&self) -> bool {
        self.row == self.col
    }

    /// Whether this cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(&self) -> bool {
        self.row + self.col == SIZE - 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate is outside 0..=2.
    #[display("Cell ({row}, {col}) is off the board (rows and columns are 0, 1 or 2)")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The acting player's mark is not the one to move.
    #[display("It's not {actual}'s turn ({expected} to move)")]
    WrongTurn {
        /// Mark whose turn it is.
        expected: Mark,
        /// Mark that tried to move.
        actual: Mark,
    },

    /// The game already reached a win or draw.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_off_board() {
        assert!(Move::try_new(2, 2).is_ok());
        assert_eq!(
            Move::try_new(3, 0),
            Err(MoveError::OutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            Move::try_new(0, 7),
            Err(MoveError::OutOfRange { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Move::new(1, 1).on_main_diagonal());
        assert!(Move::new(1, 1).on_anti_diagonal());
        assert!(Move::new(0, 2).on_anti_diagonal());
        assert!(!Move::new(0, 2).on_main_diagonal());
        assert!(!Move::new(0, 1).on_main_diagonal());
        assert!(!Move::new(0, 1).on_anti_diagonal());
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::WrongTurn {
            expected: Mark::X,
            actual: Mark::O,
        };
        assert_eq!(err.to_string(), "It's not O's turn (X to move)");
        assert!(
            MoveError::CellOccupied { row: 0, col: 0 }
                .to_string()
                .contains("occupied")
        );
    }
}
