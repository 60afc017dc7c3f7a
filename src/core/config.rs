/// Static game configuration - fixed at construction, never changed at runtime
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::games::hangman::words::WordList;

/// Wrong guesses allowed before a round is lost
pub const MAX_WRONG_GUESSES: u8 = 6;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid word {word:?}: words must be non-empty and only contain letters A-Z")]
    InvalidWord { word: String },

    #[error("failed to read word list {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse word list {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Accepted word list file shapes: `["A", "B"]` or `{ "words": ["A", "B"] }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordListFile {
    Bare(Vec<String>),
    Wrapped { words: Vec<String> },
}

impl WordListFile {
    fn into_words(self) -> Vec<String> {
        match self {
            WordListFile::Bare(words) | WordListFile::Wrapped { words } => words,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub words: WordList,
    pub max_wrong_guesses: u8,
    /// Fixed seed for reproducible word selection
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            max_wrong_guesses: MAX_WRONG_GUESSES,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Load a word list from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: WordListFile = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let words = WordList::new(file.into_words()).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "rejected word list");
        })?;

        info!(path = %path.display(), count = words.len(), "loaded word list");
        Ok(Self::new(words))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(WordList::builtin())
    }
}
