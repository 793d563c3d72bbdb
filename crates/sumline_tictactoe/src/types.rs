//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first, counts +1).
    X,
    /// Mark O (moves second, counts -1).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Signed value this mark contributes to a line sum.
    pub fn value(self) -> i8 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    /// Line sum that means three of this mark in a row.
    pub fn win_sum(self) -> i8 {
        self.value() * SIZE as i8
    }
}

/// A named participant holding one mark for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    #[getter(skip)]
    mark: Mark,
}

impl Player {
    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Signed value of this cell (0 when empty).
    pub fn value(self) -> i8 {
        match self {
            Square::Empty => 0,
            Square::Occupied(mark) => mark.value(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Gets the square at (row, col), or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        self.squares.get(row * SIZE + col).copied()
    }

    /// Checks if the square at (row, col) is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Iterates the board as rows of three squares.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(SIZE)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Writes a mark. Callers must have validated the coordinate.
    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) {
        self.squares[row * SIZE + col] = Square::Occupied(mark);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
