//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name shown for the X player.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name shown for the O player.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// Print the welcome text before the first game.
    #[serde(default = "default_show_instructions")]
    show_instructions: bool,

    /// Offer another game after each one ends.
    #[serde(default)]
    rematch: bool,
}

fn default_player_x() -> String {
    "Player 1".to_string()
}

fn default_player_o() -> String {
    "Player 2".to_string()
}

fn default_show_instructions() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            show_instructions: default_show_instructions(),
            rematch: false,
        }
    }
}

impl SessionConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")))?;

        info!(player_x = %config.player_x, player_o = %config.player_o, "Config loaded");
        Ok(config)
    }

    /// Replaces the X player's name when `name` is set.
    pub fn with_player_x(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.player_x = name;
        }
        self
    }

    /// Replaces the O player's name when `name` is set.
    pub fn with_player_o(mut self, name: Option<String>) -> Self {
        if let Some(name) = name {
            self.player_o = name;
        }
        self
    }

    /// Turns the rematch offer on; `false` keeps the file's value.
    pub fn with_rematch(mut self, rematch: bool) -> Self {
        self.rematch |= rematch;
        self
    }

    /// Suppresses the instructions; `false` keeps the file's value.
    pub fn without_instructions(mut self, skip: bool) -> Self {
        if skip {
            self.show_instructions = false;
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
