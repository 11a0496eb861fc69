//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Settings for the terminal app.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// File holding the persisted language preference.
    #[serde(default = "default_storage_path")]
    storage_path: PathBuf,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Input poll timeout of the event loop, in milliseconds.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// Reject screen changes that are not forward steps.
    #[serde(default = "default_strict_transitions")]
    strict_transitions: bool,
}

#[instrument]
fn default_storage_path() -> PathBuf {
    PathBuf::from("i_know_you_prefs.toml")
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("i_know_you.log")
}

#[instrument]
fn default_tick_ms() -> u64 {
    50
}

#[instrument]
fn default_strict_transitions() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            log_file: default_log_file(),
            tick_ms: default_tick_ms(),
            strict_transitions: default_strict_transitions(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(storage = %config.storage_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the storage path.
    #[instrument(skip(self))]
    pub fn with_storage_path(mut self, storage_path: PathBuf) -> Self {
        self.storage_path = storage_path;
        self
    }

    /// Returns the poll timeout as a [`Duration`], at least one millisecond.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
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
