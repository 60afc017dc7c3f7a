/// Hangman: round engine, word list, screen and renderer
pub mod engine;
pub mod game;
pub mod renderer;
pub mod round;
pub mod words;

pub use engine::{GuessOutcome, RoundEngine, RoundObserver, TracingObserver};
pub use game::HangmanGame;
pub use renderer::HangmanRenderer;
pub use round::{display_word, letter_state, remaining_attempts, LetterState, Round, Status};
pub use words::WordList;
