/// Game round engine - owns the current round and applies every transition
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::core::config::GameConfig;
use crate::games::hangman::round::{Round, Status};
use crate::games::hangman::words::WordList;

/// What a call to [`RoundEngine::guess_letter`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit(char),
    Miss(char),
    AlreadyGuessed(char),
    RoundOver,
    NotALetter(char),
}

impl GuessOutcome {
    /// True when the guess changed the round
    pub fn accepted(self) -> bool {
        matches!(self, GuessOutcome::Hit(_) | GuessOutcome::Miss(_))
    }
}

/// Notified after every state change, never for ignored guesses
pub trait RoundObserver {
    fn round_changed(&mut self, round: &Round);
}

/// Logs round transitions through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl RoundObserver for TracingObserver {
    fn round_changed(&mut self, round: &Round) {
        match round.status() {
            Status::Playing if round.guessed_letters().is_empty() => {
                info!(letters = round.secret_word().len(), "new round");
            }
            Status::Playing => {}
            status => {
                info!(?status, word = round.secret_word(), wrong = round.wrong_guess_count(), "round over");
            }
        }

        match serde_json::to_string(round) {
            Ok(json) => debug!(snapshot = %json, "round changed"),
            Err(e) => debug!(error = %e, "round changed; snapshot not serializable"),
        }
    }
}

pub struct RoundEngine<R: Rng = StdRng> {
    words: WordList,
    max_wrong_guesses: u8,
    rng: R,
    round: Round,
    observers: Vec<Box<dyn RoundObserver>>,
}

impl RoundEngine<StdRng> {
    /// Builds an engine from configuration, seeding from the OS unless a
    /// seed is configured. The first round is already started.
    pub fn from_config(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> RoundEngine<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let round = Self::draw_round(&config.words, config.max_wrong_guesses, &mut rng);
        Self {
            words: config.words,
            max_wrong_guesses: config.max_wrong_guesses,
            rng,
            round,
            observers: Vec::new(),
        }
    }

    /// Registers an observer; it immediately sees the current round.
    pub fn subscribe(&mut self, mut observer: Box<dyn RoundObserver>) {
        observer.round_changed(&self.round);
        self.observers.push(observer);
    }

    pub fn snapshot(&self) -> &Round {
        &self.round
    }

    /// Discards the current round, whatever its state, and starts a new one.
    pub fn start_new_round(&mut self) {
        self.round = Self::draw_round(&self.words, self.max_wrong_guesses, &mut self.rng);
        self.notify();
    }

    /// Applies a guess. Anything other than a new A-Z letter during play
    /// leaves the round untouched.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_ascii_uppercase();

        if !letter.is_ascii_uppercase() {
            debug!(?letter, "ignored non-letter guess");
            return GuessOutcome::NotALetter(letter);
        }
        if self.round.status().is_over() {
            debug!(%letter, "ignored guess after round end");
            return GuessOutcome::RoundOver;
        }
        if self.round.has_guessed(letter) {
            debug!(%letter, "ignored repeated guess");
            return GuessOutcome::AlreadyGuessed(letter);
        }

        let hit = self.round.record_guess(letter);
        debug!(%letter, hit, wrong = self.round.wrong_guess_count(), "guess accepted");
        self.notify();

        if hit {
            GuessOutcome::Hit(letter)
        } else {
            GuessOutcome::Miss(letter)
        }
    }

    fn draw_round(words: &WordList, max_wrong_guesses: u8, rng: &mut R) -> Round {
        debug_assert!(!words.is_empty(), "WordList::new rejects empty lists");
        let index = rng.random_range(0..words.len());
        let word = words.get(index).unwrap_or_default().to_string();
        Round::new(word, max_wrong_guesses)
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.round_changed(&self.round);
        }
    }
}
