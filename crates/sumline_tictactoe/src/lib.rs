//! Tic-tac-toe game logic with constant-time win detection.
//!
//! The board keeps a signed running sum per row, column and diagonal
//! (X = +1, O = -1). A move updates at most four sums; a win is any sum
//! reaching ±3.
//!
//! # Example
//!
//! ```
//! use sumline_tictactoe::{GameState, GameStatus, Mark, Move, Player, attempt_move, check_win};
//!
//! let x = Player::new("Player 1", Mark::X);
//! let o = Player::new("Player 2", Mark::O);
//! let mut game = GameState::new();
//!
//! for (player, (row, col)) in [(&x, (0, 0)), (&o, (1, 0)), (&x, (0, 1)), (&o, (1, 1))] {
//!     attempt_move(&mut game, player, Move::new(row, col))?;
//! }
//! let status = attempt_move(&mut game, &x, Move::new(0, 2))?;
//!
//! assert_eq!(status, GameStatus::Won(Mark::X));
//! assert!(check_win(&game, &x));
//! # Ok::<(), sumline_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod accumulators;
mod action;
pub mod contracts;
mod engine;
pub mod invariants;
pub mod rules;
mod state;
mod types;

pub use accumulators::{Line, LineSums};
pub use action::{Move, MoveError};
pub use engine::{attempt_move, available_moves, replay};
pub use rules::{check_draw, check_win, winner};
pub use state::{GameState, GameStatus, Placement, Snapshot};
pub use types::{Board, CELLS, Mark, Player, SIZE, Square};
