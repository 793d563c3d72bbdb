//! Console front end for `sumline_tictactoe`.
//!
//! - **Config**: TOML session settings merged with CLI flags
//! - **Input**: raw lines parsed into typed moves
//! - **Render**: board, coordinate guide and instructions as text
//! - **Logging**: default `RUST_LOG` filter
//! - **Session**: the prompt/response loop over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod input;
pub mod logging;
pub mod render;
mod session;

pub use config::{ConfigError, SessionConfig};
pub use input::{InputError, parse_move};
pub use session::{GameEnd, Session, Tally};
