pub mod cli;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::core::config::{ConfigError, GameConfig};
pub use crate::core::game::{Flow, Game};
pub use crate::games::hangman::{GuessOutcome, Round, RoundEngine, Status};
