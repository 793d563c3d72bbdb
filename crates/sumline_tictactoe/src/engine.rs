//! Move engine: validates and applies moves to a [`GameState`].

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{check_draw, winner};
use super::state::{GameState, GameStatus, Placement};
use super::types::{Mark, Player, SIZE};
use tracing::{debug, instrument, warn};

/// Attempts a move for `player`, returning the status after it.
///
/// Checks, in order: game not over, coordinates in range, cell empty,
/// player's turn. On any failure the state is left untouched.
///
/// On success the cell is marked, each line through it is bumped by the
/// mark's signed value, and the turn passes to the other mark. Win is decided
/// before draw.
///
/// # Errors
///
/// `GameOver`, `OutOfRange`, `CellOccupied` or `WrongTurn` for rejected moves.
/// In debug builds, `InvariantViolation` if the postcondition fails (the
/// state is restored first).
#[instrument(
    skip(state, player),
    fields(player = %player.name(), mark = %player.mark(), at = %mv)
)]
pub fn attempt_move(
    state: &mut GameState,
    player: &Player,
    mv: Move,
) -> Result<GameStatus, MoveError> {
    let action = Placement {
        mark: player.mark(),
        at: mv,
    };

    if let Err(e) = MoveContract::pre(state, &action) {
        warn!(error = %e, "Move rejected");
        return Err(e);
    }

    #[cfg(debug_assertions)]
    let before = state.clone();

    apply(state, action);

    #[cfg(debug_assertions)]
    {
        if let Err(e) = MoveContract::post(&before, state) {
            *state = before;
            return Err(e);
        }
    }

    debug!(status = %state.status, moves = state.history.len(), "Move applied");
    Ok(state.status)
}

/// Applies an already validated placement.
fn apply(state: &mut GameState, action: Placement) {
    let Placement { mark, at } = action;
    state.board.place(at.row, at.col, mark);
    state.sums.record(at, mark);
    state.history.push(action);
    state.to_move = mark.opponent();

    state.status = if winner(state) == Some(mark) {
        GameStatus::Won(mark)
    } else if check_draw(state) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    };
}

/// Replays moves from a new game, alternating marks starting with X.
///
/// Stops at the first rejected move. Moves after a win or draw are rejected
/// with `GameOver`.
#[instrument]
pub fn replay(moves: &[Move]) -> Result<GameState, MoveError> {
    let x = Player::new("X", Mark::X);
    let o = Player::new("O", Mark::O);
    let mut state = GameState::new();

    for mv in moves {
        let player = match state.to_move() {
            Mark::X => &x,
            Mark::O => &o,
        };
        attempt_move(&mut state, player, *mv)?;
    }

    Ok(state)
}

/// Empty cells in row-major order. Empty once the game is over.
pub fn available_moves(state: &GameState) -> Vec<Move> {
    if state.status().is_terminal() {
        return Vec::new();
    }
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| Move::new(row, col)))
        .filter(|mv| state.board().is_empty(mv.row, mv.col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_first_move_flips_turn() {
        let mut state = GameState::new();
        let x = Player::new("Player 1", Mark::X);
        let status = attempt_move(&mut state, &x, Move::new(1, 1));
        assert_eq!(status, Ok(GameStatus::InProgress));
        assert_eq!(state.to_move(), Mark::O);
        assert_eq!(state.board().get(1, 1), Some(Square::Occupied(Mark::X)));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut state = replay(&[Move::new(0, 0)]).unwrap();
        let before = state.clone();
        let x = Player::new("Player 1", Mark::X);
        let o = Player::new("Player 2", Mark::O);

        assert!(attempt_move(&mut state, &o, Move::new(0, 0)).is_err());
        assert!(attempt_move(&mut state, &o, Move::new(3, 1)).is_err());
        assert!(attempt_move(&mut state, &x, Move::new(2, 2)).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_available_moves_shrink() {
        let state = replay(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
        let moves = available_moves(&state);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert_eq!(moves[0], Move::new(0, 1));
    }

    #[test]
    fn test_no_moves_after_win() {
        let state = replay(&[
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(0, 2),
        ])
        .unwrap();
        assert!(available_moves(&state).is_empty());
    }

    #[test]
    fn test_replay_stops_at_error() {
        let result = replay(&[Move::new(0, 0), Move::new(0, 0), Move::new(1, 1)]);
        assert_eq!(result, Err(MoveError::CellOccupied { row: 0, col: 0 }));
    }
}
