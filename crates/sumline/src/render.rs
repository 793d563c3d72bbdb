//! Text rendering of boards and instructions.

use sumline_tictactoe::{Board, Mark, SIZE, Square};

/// Symbol drawn for a cell.
pub fn symbol(square: Square) -> char {
    match square {
        Square::Empty => ' ',
        Square::Occupied(Mark::X) => 'X',
        Square::Occupied(Mark::O) => 'O',
    }
}

/// Formats the board as rows of `| X | O |   |` separated by rules.
pub fn board(board: &Board) -> String {
    let mut out = String::new();
    for row in board.rows() {
        for square in row {
            out.push_str(&format!("| {} ", symbol(*square)));
        }
        out.push_str("|\n---------------\n");
    }
    out
}

/// Formats the `row,col` label of every cell.
pub fn coordinates() -> String {
    let mut out = String::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            out.push_str(&format!(" | {row},{col} "));
        }
        out.push_str("|\n----------------------\n");
    }
    out
}

/// Welcome text, rules and the coordinate guide.
pub fn instructions(player_x: &str, player_o: &str) -> String {
    format!(
        "Welcome to Tic Tac Toe!\n\
         {player_x} is 'X' and {player_o} is 'O'. X moves first.\n\
         Take turns to enter a row and column number (0, 1, or 2) for your mark.\n\
         The first player to get 3 of their marks in a row (up, down, across, or diagonally) is the winner.\n\
         Enter the row number and column number separated by a space.\n\
         For example, '0 1' will place your mark in the top-middle cell.\n\
         \n\
         Here are the coordinates of the board for your reference:\n\
         {}\n\
         Let's get started!\n",
        coordinates()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sumline_tictactoe::{Move, replay};

    #[test]
    fn test_empty_board() {
        let expected = "|   |   |   |\n---------------\n".repeat(3);
        assert_eq!(board(&Board::new()), expected);
    }

    #[test]
    fn test_marks_in_place() {
        let state = replay(&[Move::new(0, 0), Move::new(1, 1)]).unwrap();
        let text = board(state.board());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| X |   |   |");
        assert_eq!(lines[2], "|   | O |   |");
        assert_eq!(lines[4], "|   |   |   |");
    }

    #[test]
    fn test_coordinate_guide_lists_every_cell() {
        let guide = coordinates();
        for row in 0..SIZE {
            for col in 0..SIZE {
                assert!(guide.contains(&format!("{row},{col}")));
            }
        }
    }

    #[test]
    fn test_instructions_name_players() {
        let text = instructions("Ada", "Grace");
        assert!(text.contains("Ada is 'X'"));
        assert!(text.contains("Grace is 'O'"));
        assert!(text.contains(" | 2,2 "));
    }
}
