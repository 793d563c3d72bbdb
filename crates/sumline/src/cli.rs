//! Command-line interface for sumline.

use clap::{Parser, Subcommand};

/// Sumline - console tic-tac-toe for two players
#[derive(Parser, Debug)]
#[command(name = "sumline")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on stdin/stdout
    Play {
        /// Path to a TOML config file
        #[arg(short, long, env = "SUMLINE_CONFIG")]
        config: Option<std::path::PathBuf>,

        /// Name of the player using X (moves first)
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the player using O
        #[arg(long)]
        player_o: Option<String>,

        /// Offer another game after each one ends
        #[arg(long)]
        rematch: bool,

        /// Skip the welcome text and coordinate guide
        #[arg(long)]
        no_instructions: bool,

        /// Print each finished game as a JSON snapshot
        #[arg(long)]
        json: bool,
    },

    /// Print the rules and the coordinate guide
    Rules,
}
