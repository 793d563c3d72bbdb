//! Sumline - two-player console tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use std::path::PathBuf;
use sumline::{Session, SessionConfig, logging, render};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player_x,
            player_o,
            rematch,
            no_instructions,
            json,
        } => {
            let config = load_config(config)?
                .with_player_x(player_x)
                .with_player_o(player_o)
                .with_rematch(rematch)
                .without_instructions(no_instructions);
            run_play(config, json)
        }
        Command::Rules => run_rules(),
    }
}

/// Reads the config file, or falls back to defaults.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(SessionConfig::default()),
    }
}

/// Plays on stdin/stdout until the session ends.
#[instrument(skip(config))]
fn run_play(config: SessionConfig, json: bool) -> Result<()> {
    info!("Starting console session");
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config).with_json(json);
    let tally = session.run()?;
    info!(games = tally.games(), "Console session ended");
    Ok(())
}

/// Prints the instructions with the default player names.
fn run_rules() -> Result<()> {
    let config = SessionConfig::default();
    let mut stdout = std::io::stdout().lock();
    write!(
        stdout,
        "{}",
        render::instructions(config.player_x(), config.player_o())
    )
    .context("Failed to write rules")?;
    Ok(())
}
