use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::Level;

use crate::core::config::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "forca")]
#[command(about = "Jogo da Forca - guess the word before the hangman is complete")]
#[command(version)]
pub struct Cli {
    /// JSON word list: `["CASA", ...]` or `{"words": ["CASA", ...]}`
    ///
    /// Words are upper-cased and must only contain the letters A-Z. The
    /// built-in list is used when no file is given.
    #[arg(short, long, env = "FORCA_WORDS", value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(short, long, env = "FORCA_SEED")]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long, env = "FORCA_LOG_FILE", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, env = "FORCA_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl Cli {
    /// Build the game configuration; fails fast on a bad word list.
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = match &self.words {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };
        Ok(config.with_seed(self.seed))
    }

    /// Install the tracing subscriber if a log file was requested.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;

        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(self.log_level)
            .try_init()
            .map_err(|e| anyhow!("failed to install logger: {e}"))
    }
}
