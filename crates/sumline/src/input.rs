//! Parsing typed moves from raw console lines.

use derive_more::{Display, Error};
use sumline_tictactoe::{Move, SIZE};
use tracing::instrument;

/// A line that could not be turned into a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not two integers.
    #[display(
        "Invalid input {input:?}. Please enter row and column numbers separated by a space"
    )]
    Malformed {
        /// The offending line, trimmed.
        input: String,
    },

    /// Two integers, but not both in 0..=2.
    #[display(
        "Invalid input ({row}, {col}). Please enter valid row and column numbers (0, 1, or 2)"
    )]
    OutOfRange {
        /// Parsed row.
        row: i64,
        /// Parsed column.
        col: i64,
    },
}

/// Parses `"row col"` (a comma also separates) into a move.
#[instrument]
pub fn parse_move(line: &str) -> Result<Move, InputError> {
    let trimmed = line.trim();
    let malformed = || InputError::Malformed {
        input: trimmed.to_string(),
    };

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(malformed());
    };

    let row: i64 = row.parse().map_err(|_| malformed())?;
    let col: i64 = col.parse().map_err(|_| malformed())?;

    let in_range = |v: i64| (0..SIZE as i64).contains(&v);
    if !in_range(row) || !in_range(col) {
        return Err(InputError::OutOfRange { row, col });
    }

    Ok(Move::new(row as usize, col as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_table() {
        let cases: [(&str, Option<Move>); 9] = [
            ("1 2", Some(Move::new(1, 2))),
            ("  0   0 \n", Some(Move::new(0, 0))),
            ("2,1", Some(Move::new(2, 1))),
            ("2, 2", Some(Move::new(2, 2))),
            ("", None),
            ("a b", None),
            ("1", None),
            ("1 2 3", None),
            ("3 3", None),
        ];

        for (input, expected) in cases {
            assert_eq!(parse_move(input).ok(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_distinguishes_range_from_garbage() {
        assert_eq!(
            parse_move("-1 0"),
            Err(InputError::OutOfRange { row: -1, col: 0 })
        );
        assert!(matches!(
            parse_move("one two"),
            Err(InputError::Malformed { .. })
        ));
        assert!(matches!(
            parse_move("99999999999999999999 0"),
            Err(InputError::Malformed { .. })
        ));
    }
}
