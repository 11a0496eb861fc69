//! Command-line interface for i_know_you.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// I Know You - a terminal mind-reading trick
#[derive(Parser, Debug)]
#[command(name = "i_know_you")]
#[command(about = "Think of a number and let the terminal guess it", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Options shared by every subcommand
    #[command(flatten)]
    pub common: CommonArgs,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "i_know_you.toml")]
    pub config: PathBuf,

    /// Override the language preference file from the config
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Keep the language preference in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the game in the terminal
    Play,

    /// Show the persisted language, or persist a new one
    Language {
        /// Language code to persist: tr, en or ru
        code: Option<String>,
    },
}
