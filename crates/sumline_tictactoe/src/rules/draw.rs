//! Draw detection logic for tic-tac-toe.

use super::win::has_line;
use crate::state::GameState;
use crate::types::Mark;
use tracing::instrument;

/// Checks if the board is full and neither mark holds a line.
///
/// A full board with a completed line is a win, never a draw.
#[instrument(skip(state))]
pub fn check_draw(state: &GameState) -> bool {
    state.board().is_full() && !has_line(state, Mark::X) && !has_line(state, Mark::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::engine::replay;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!check_draw(&GameState::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        // X X O / O O X / X . .
        let state = replay(&[
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 2),
            Move::new(1, 0),
            Move::new(2, 0),
        ])
        .unwrap();
        assert!(!check_draw(&state));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X X O / O O X / X O X
        let state = replay(&[
            Move::new(0, 0),
            Move::new(1, 1),
            Move::new(0, 1),
            Move::new(0, 2),
            Move::new(1, 2),
            Move::new(1, 0),
            Move::new(2, 0),
            Move::new(2, 1),
            Move::new(2, 2),
        ])
        .unwrap();
        assert!(state.board().is_full());
        assert!(check_draw(&state));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // Last move fills the board and completes the top row.
        // X X . / O O X / X O O  then X plays 0,2.
        let state = replay(&[
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(1, 2),
            Move::new(2, 1),
            Move::new(2, 0),
            Move::new(2, 2),
            Move::new(0, 2),
        ])
        .unwrap();
        assert!(state.board().is_full());
        assert!(!check_draw(&state));
    }
}
