//! I Know You - CLI entry point

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, CommonArgs};
use i_know_you::{
    AppConfig, KeyValueStorage, LanguagePreference, MemoryStorage, TomlFileStorage,
    init_file_tracing, init_stderr_tracing, run_tui,
};
use i_know_you_core::LanguageCode;
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&cli.common).await,
        Command::Language { code } => run_language(&cli.common, code).await,
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(common: &CommonArgs) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&common.config)
        .with_context(|| format!("Loading {}", common.config.display()))?;
    if let Some(path) = &common.storage {
        config = config.with_storage_path(path.clone());
    }
    Ok(config)
}

/// Picks the storage backend for the language preference.
fn open_storage(common: &CommonArgs, config: &AppConfig) -> Arc<dyn KeyValueStorage> {
    if common.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(TomlFileStorage::new(config.storage_path()))
    }
}

/// Run the game in the terminal
async fn run_play(common: &CommonArgs) -> Result<()> {
    let config = load_config(common)?;
    init_file_tracing(config.log_file())?;
    info!(config = ?config, "Configuration ready");

    let storage = open_storage(common, &config);
    run_tui(&config, storage).await
}

/// Print or persist the language preference
#[instrument(skip(common))]
async fn run_language(common: &CommonArgs, code: Option<String>) -> Result<()> {
    init_stderr_tracing();
    let config = load_config(common)?;
    let storage = open_storage(common, &config);

    let mut preference = LanguagePreference::new(storage);
    preference.load().await;

    match code {
        None => {
            let language = preference.language();
            println!("{} ({})", language, language.label());
        }
        Some(raw) => {
            let Some(language) = LanguageCode::from_stored(&raw) else {
                bail!("Unknown language code {:?}; expected one of tr, en, ru", raw);
            };
            preference
                .select_and_persist(language)
                .await
                .context("Saving language preference")?;
            println!("Language set to {} ({})", language, language.label());
        }
    }
    Ok(())
}
