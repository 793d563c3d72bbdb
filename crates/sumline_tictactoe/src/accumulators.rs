//! Running per-line sums.
//!
//! Every row, column and diagonal keeps the signed sum of the marks on it.
//! Three X's sum to 3 and three O's to -3, so a win is a single comparison
//! per line instead of a board scan.

use super::action::Move;
use super::types::{Board, Mark, SIZE};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// The row line with index `row`, if it is on the board.
    pub fn row(row: usize) -> Option<Self> {
        [Line::TopRow, Line::MiddleRow, Line::BottomRow].get(row).copied()
    }

    /// The column line with index `col`, if it is on the board.
    pub fn column(col: usize) -> Option<Self> {
        [Line::LeftColumn, Line::CenterColumn, Line::RightColumn]
            .get(col)
            .copied()
    }

    /// The three cells on this line.
    pub fn cells(self) -> [Move; SIZE] {
        let row = |r| [Move::new(r, 0), Move::new(r, 1), Move::new(r, 2)];
        let col = |c| [Move::new(0, c), Move::new(1, c), Move::new(2, c)];
        match self {
            Line::TopRow => row(0),
            Line::MiddleRow => row(1),
            Line::BottomRow => row(2),
            Line::LeftColumn => col(0),
            Line::CenterColumn => col(1),
            Line::RightColumn => col(2),
            Line::MainDiagonal => [Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)],
            Line::AntiDiagonal => [Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)],
        }
    }
}

/// Signed sums for the three rows, three columns and two diagonals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LineSums {
    /// Row sums, top to bottom.
    rows: [i8; SIZE],
    /// Column sums, left to right.
    cols: [i8; SIZE],
    /// Index 0 is the main diagonal, 1 the anti-diagonal.
    diagonals: [i8; 2],
}

impl LineSums {
    /// All sums zero, matching an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mark to every line through `mv`. The move must be in bounds.
    pub(crate) fn record(&mut self, mv: Move, mark: Mark) {
        let v = mark.value();
        self.rows[mv.row] += v;
        self.cols[mv.col] += v;
        if mv.on_main_diagonal() {
            self.diagonals[0] += v;
        }
        if mv.on_anti_diagonal() {
            self.diagonals[1] += v;
        }
    }

    /// Current sum of one line.
    pub fn get(&self, line: Line) -> i8 {
        match line {
            Line::TopRow => self.rows[0],
            Line::MiddleRow => self.rows[1],
            Line::BottomRow => self.rows[2],
            Line::LeftColumn => self.cols[0],
            Line::CenterColumn => self.cols[1],
            Line::RightColumn => self.cols[2],
            Line::MainDiagonal => self.diagonals[0],
            Line::AntiDiagonal => self.diagonals[1],
        }
    }

    fn slot_mut(&mut self, line: Line) -> &mut i8 {
        match line {
            Line::TopRow => &mut self.rows[0],
            Line::MiddleRow => &mut self.rows[1],
            Line::BottomRow => &mut self.rows[2],
            Line::LeftColumn => &mut self.cols[0],
            Line::CenterColumn => &mut self.cols[1],
            Line::RightColumn => &mut self.cols[2],
            Line::MainDiagonal => &mut self.diagonals[0],
            Line::AntiDiagonal => &mut self.diagonals[1],
        }
    }

    /// Whether any line sums to exactly `target`.
    pub fn any_equals(&self, target: i8) -> bool {
        self.rows
            .iter()
            .chain(self.cols.iter())
            .chain(self.diagonals.iter())
            .any(|&sum| sum == target)
    }

    /// Recounts every line from the board contents.
    ///
    /// Only used to audit the running sums; the engine never calls this on
    /// the move path.
    #[instrument(skip(board))]
    pub fn recount(board: &Board) -> Self {
        let mut sums = Self::new();
        for line in Line::iter() {
            let total: i8 = line
                .cells()
                .iter()
                .filter_map(|c| board.get(c.row, c.col))
                .map(|sq| sq.value())
                .sum();
            *sums.slot_mut(line) = total;
        }
        sums
    }
}
