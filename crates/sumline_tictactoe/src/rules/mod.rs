//! Game rules for tic-tac-toe.
//!
//! Pure queries over [`GameState`](crate::GameState). Win detection reads the
//! running line sums; draw detection additionally scans the nine cells.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{check_win, winner};
