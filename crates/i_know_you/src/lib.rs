//! I Know You - a terminal mind-reading trick
//!
//! Think of a number, type it in, answer a few questions and watch the
//! terminal "read your mind". The guess is always right because it is the
//! number you typed.
//!
//! # Architecture
//!
//! - **Flow**: [`AppController`] owning the game state and the active screen
//! - **Preferences**: [`LanguagePreference`] mirrored to a [`KeyValueStorage`]
//! - **Storage**: [`TomlFileStorage`] on disk, [`MemoryStorage`] in process
//! - **Config**: [`AppConfig`] loaded from TOML
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use i_know_you::{AppConfig, TomlFileStorage, run_tui};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("i_know_you.toml")?;
//! let storage = Arc::new(TomlFileStorage::new(config.storage_path()));
//! run_tui(&config, storage).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod flow;
mod logging;
mod preferences;
mod storage;
mod tui;

pub use config::{AppConfig, ConfigError};
pub use flow::{
    AppController, LanguagePicker, LoopControl, PickerAction, QuestionsScreen, ResultScreen,
    Screen, ScreenAction, ScreenContext, ThinkingScreen, WelcomeScreen,
};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use preferences::{LANGUAGE_STORAGE_KEY, LanguagePreference};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError, TomlFileStorage};
pub use tui::run_tui;
