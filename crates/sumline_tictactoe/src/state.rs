//! Game state: the single owner of board, sums, turn and outcome.

use super::accumulators::LineSums;
use super::action::Move;
use super::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(mark) => write!(f, "{mark} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// An accepted move together with the mark that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub at: Move,
}

/// Complete game state.
///
/// Fields are only reachable for mutation through the engine, so the
/// line sums always agree with the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) sums: LineSums,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Placement>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            sums: LineSums::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the running line sums.
    pub fn sums(&self) -> &LineSums {
        &self.sums
    }

    /// Returns the mark allowed to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Takes an owned, read-only copy for renderers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            status: self.status,
            moves_played: self.history.len(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a game, detached from the live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Mark to move next.
    to_move: Mark,
    /// Game status.
    status: GameStatus,
    /// Number of accepted moves.
    moves_played: usize,
}
