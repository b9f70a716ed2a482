//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// File that receives logs while the terminal board is open.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Highlight the landing squares of the selected piece.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Glyph drawn for Black pieces.
    #[serde(default = "default_black_glyph")]
    black_glyph: String,

    /// Glyph drawn for White pieces.
    #[serde(default = "default_white_glyph")]
    white_glyph: String,
}

#[instrument]
fn default_log_filter() -> String {
    "info,konane=debug".to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("konane.log")
}

#[instrument]
fn default_show_hints() -> bool {
    true
}

#[instrument]
fn default_black_glyph() -> String {
    "●".to_string()
}

#[instrument]
fn default_white_glyph() -> String {
    "○".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            show_hints: default_show_hints(),
            black_glyph: default_black_glyph(),
            white_glyph: default_white_glyph(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(show_hints = config.show_hints, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, falling back to defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Glyph for a player's pieces.
    pub fn glyph(&self, player: konane::Player) -> &str {
        match player {
            konane::Player::Black => &self.black_glyph,
            konane::Player::White => &self.white_glyph,
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
