//! Configuration file loading for the console game.
//!
//! Settings are read from `chess.toml` in the current directory unless a
//! different path is given on the command line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The log level is not one of trace, debug, info, warn or error.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

/// How the board is drawn.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Print file letters and rank numbers around the grid. Defaults to true.
    #[serde(default = "default_coordinates")]
    pub coordinates: bool,
    /// Glyph drawn for an empty square. Defaults to '.'.
    #[serde(default = "default_empty")]
    pub empty: char,
}

fn default_coordinates() -> bool {
    true
}

fn default_empty() -> char {
    '.'
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            coordinates: default_coordinates(),
            empty: default_empty(),
        }
    }
}

/// Top-level console configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Maximum level of log events written to stderr. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Board drawing options.
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            log_level: default_log_level(),
            display: DisplayConfig::default(),
        }
    }
}

impl ConsoleConfig {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns the configured log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] if the name is not recognised.
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
