use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    pub fn is_over(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

/// How a key of the on-screen keyboard should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Untried,
    CorrectGuess,
    WrongGuess,
}

/// One play-through, from word selection to outcome.
///
/// Fields are private: only the round engine mutates a round, everyone
/// else reads it through the accessors and the view helpers below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    secret_word: String,
    /// Kept in the order the letters were tried
    guessed_letters: Vec<char>,
    wrong_guess_count: u8,
    max_wrong_guesses: u8,
    status: Status,
}

impl Round {
    /// `secret_word` must already be uppercase A-Z; `WordList` guarantees that.
    pub(crate) fn new(secret_word: String, max_wrong_guesses: u8) -> Self {
        Self {
            secret_word,
            guessed_letters: Vec::new(),
            wrong_guess_count: 0,
            max_wrong_guesses,
            status: Status::Playing,
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn wrong_guess_count(&self) -> u8 {
        self.wrong_guess_count
    }

    pub fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter)
    }

    pub fn word_contains(&self, letter: char) -> bool {
        self.secret_word.contains(letter)
    }

    /// Records an accepted guess and recomputes the status.
    ///
    /// Callers have already checked that the round is in play and that the
    /// letter is a new A-Z letter. Returns whether the letter is in the word.
    pub(crate) fn record_guess(&mut self, letter: char) -> bool {
        self.guessed_letters.push(letter);

        let hit = self.word_contains(letter);
        if !hit {
            self.wrong_guess_count += 1;
        }

        // Win is checked first so the last correct letter always wins.
        self.status = if self.is_word_complete() {
            Status::Won
        } else if self.wrong_guess_count >= self.max_wrong_guesses {
            Status::Lost
        } else {
            Status::Playing
        };

        hit
    }

    fn is_word_complete(&self) -> bool {
        self.secret_word.chars().all(|c| self.has_guessed(c))
    }

    /// The word as a string, hidden letters replaced by `placeholder`
    pub fn masked_word(&self, placeholder: char) -> String {
        display_word(self)
            .into_iter()
            .map(|c| c.unwrap_or(placeholder))
            .collect()
    }
}

/// Per position: the letter if it may be shown, `None` for a blank.
///
/// Once the round is over the whole word is revealed.
pub fn display_word(round: &Round) -> Vec<Option<char>> {
    let reveal_all = round.status.is_over();
    round
        .secret_word
        .chars()
        .map(|c| (reveal_all || round.has_guessed(c)).then_some(c))
        .collect()
}

pub fn remaining_attempts(round: &Round) -> u8 {
    round.max_wrong_guesses.saturating_sub(round.wrong_guess_count)
}

pub fn letter_state(round: &Round, letter: char) -> LetterState {
    let letter = letter.to_ascii_uppercase();
    if !round.has_guessed(letter) {
        LetterState::Untried
    } else if round.word_contains(letter) {
        LetterState::CorrectGuess
    } else {
        LetterState::WrongGuess
    }
}
