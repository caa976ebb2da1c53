//! Configuration for interactive play.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::Mark;
use tracing::{debug, info, instrument};

/// Settings for a human-versus-engine game.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Mark the human plays.
    #[serde(default = "default_human")]
    human: Mark,

    /// Show the engine's suggestion before each human move.
    #[serde(default)]
    hints: bool,

    /// Display name of the human player.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Display name of the engine player.
    #[serde(default = "default_engine_name")]
    engine_name: String,
}

fn default_human() -> Mark {
    Mark::O
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_engine_name() -> String {
    "Minimax".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: default_human(),
            hints: false,
            human_name: default_human_name(),
            engine_name: default_engine_name(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(human = %config.human, hints = config.hints, "Config loaded successfully");
        Ok(config)
    }

    /// Mark the engine plays.
    pub fn engine(&self) -> Mark {
        self.human.opponent()
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
