//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Largest arena the terminal front-end lays out.
pub const MAX_BOARDS: usize = 16;

/// Which boards to create and which projections the host renders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct ArenaConfig {
    /// Number of independent boards.
    #[serde(default = "default_board_count")]
    board_count: usize,

    /// Render the running score.
    #[serde(default = "default_true")]
    show_score: bool,

    /// Render a title above each board.
    #[serde(default = "default_true")]
    show_titles: bool,

    /// Log destination while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_board_count() -> usize {
    8
}

fn default_true() -> bool {
    true
}

fn default_log_file() -> PathBuf {
    PathBuf::from("xo_arena.log")
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            board_count: default_board_count(),
            show_score: true,
            show_titles: true,
            log_file: default_log_file(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Missing keys take their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_count = config.board_count, "Config loaded successfully");
        Ok(config)
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_BOARDS).contains(&self.board_count) {
            return Err(ConfigError::new(format!(
                "board_count must be between 1 and {}, got {}",
                MAX_BOARDS, self.board_count
            )));
        }
        Ok(())
    }

    /// Serializes the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
