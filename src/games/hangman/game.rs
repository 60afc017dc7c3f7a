use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::game::{Flow, Game};
use crate::core::renderer::GameRenderer;
use crate::games::hangman::engine::{GuessOutcome, RoundEngine};
use crate::games::hangman::renderer::HangmanRenderer;
use crate::games::hangman::round::{Round, Status};

pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Keys per row of the on-screen keyboard
pub const KEYBOARD_COLUMNS: usize = 9;

/// The hangman screen: on-screen keyboard, status line and outcome modal on
/// top of a [`RoundEngine`]. Holds no round state of its own.
pub struct HangmanGame {
    engine: RoundEngine,
    /// Index into `ALPHABET` of the highlighted key
    cursor: usize,
    message: String,
}

impl HangmanGame {
    pub fn new(engine: RoundEngine) -> Self {
        Self {
            engine,
            cursor: 0,
            message: "Escolha uma letra!".to_string(),
        }
    }

    pub fn round(&self) -> &Round {
        self.engine.snapshot()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_letter(&self) -> char {
        ALPHABET[self.cursor]
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.engine.guess_letter(letter);
        self.message = match outcome {
            GuessOutcome::Hit(l) => format!("Boa! '{l}' está na palavra."),
            GuessOutcome::Miss(l) => format!("Que pena, '{l}' não está na palavra."),
            GuessOutcome::AlreadyGuessed(l) => format!("A letra '{l}' já foi tentada."),
            GuessOutcome::RoundOver => "A rodada acabou. Enter para jogar novamente.".to_string(),
            GuessOutcome::NotALetter(c) => format!("'{c}' não é uma letra de A a Z."),
        };

        if outcome.accepted() {
            match self.round().status() {
                Status::Won => self.message = "Você Venceu! Enter para jogar novamente.".to_string(),
                Status::Lost => self.message = "Você Perdeu! Enter para jogar novamente.".to_string(),
                Status::Playing => {}
            }
        }
        outcome
    }

    pub fn restart(&mut self) {
        self.engine.start_new_round();
        self.cursor = 0;
        self.message = "Nova palavra! Escolha uma letra.".to_string();
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let last = ALPHABET.len() - 1;
        self.cursor = match code {
            KeyCode::Left => self.cursor.saturating_sub(1),
            KeyCode::Right => (self.cursor + 1).min(last),
            KeyCode::Up => self.cursor.checked_sub(KEYBOARD_COLUMNS).unwrap_or(self.cursor),
            KeyCode::Down => (self.cursor + KEYBOARD_COLUMNS).min(last),
            _ => self.cursor,
        };
    }
}

impl Game for HangmanGame {
    fn handle_input(&mut self, event: KeyEvent) -> Flow {
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let over = self.round().status().is_over();

        match event.code {
            KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('n' | 'N') if ctrl || over => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') if over => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.guess(self.cursor_letter());
            }
            KeyCode::Char(c) if !ctrl => {
                self.guess(c);
            }
            code @ (KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down) => {
                self.move_cursor(code);
            }
            _ => {}
        }

        Flow::Continue
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        HangmanRenderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::games::hangman::words::WordList;

    fn game(word: &str) -> HangmanGame {
        let words = WordList::new([word]).unwrap();
        HangmanGame::new(RoundEngine::from_config(GameConfig::new(words)))
    }

    fn press(game: &mut HangmanGame, code: KeyCode) -> Flow {
        game.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typed_letters_are_guessed() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Char('c'));
        assert!(g.round().has_guessed('C'));
        assert_eq!(g.message(), "Boa! 'C' está na palavra.");
    }

    #[test]
    fn enter_guesses_the_highlighted_key() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Right);
        press(&mut g, KeyCode::Right);
        assert_eq!(g.cursor_letter(), 'C');
        press(&mut g, KeyCode::Enter);
        assert!(g.round().has_guessed('C'));
    }

    #[test]
    fn cursor_stays_on_the_keyboard() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Left);
        press(&mut g, KeyCode::Up);
        assert_eq!(g.cursor(), 0);

        press(&mut g, KeyCode::Down);
        assert_eq!(g.cursor_letter(), 'J');
        press(&mut g, KeyCode::Down);
        press(&mut g, KeyCode::Down);
        assert_eq!(g.cursor_letter(), 'Z');
        press(&mut g, KeyCode::Right);
        assert_eq!(g.cursor_letter(), 'Z');
        press(&mut g, KeyCode::Up);
        assert_eq!(g.cursor_letter(), 'Q');
    }

    #[test]
    fn enter_restarts_a_finished_round() {
        let mut g = game("CAT");
        for c in ['c', 'a', 't'] {
            press(&mut g, KeyCode::Char(c));
        }
        assert_eq!(g.round().status(), Status::Won);

        press(&mut g, KeyCode::Enter);
        assert_eq!(g.round().status(), Status::Playing);
        assert!(g.round().guessed_letters().is_empty());
    }

    #[test]
    fn finishing_guess_announces_the_outcome() {
        let mut g = game("CAT");
        g.guess('C');
        g.guess('A');
        assert_eq!(g.guess('T'), GuessOutcome::Hit('T'));
        assert_eq!(g.message(), "Você Venceu! Enter para jogar novamente.");

        // Ignored guesses after the end keep explaining why
        assert_eq!(g.guess('X'), GuessOutcome::RoundOver);
        assert_eq!(g.message(), "A rodada acabou. Enter para jogar novamente.");

        let mut g = game("CAT");
        for c in ['B', 'D', 'E', 'F', 'G', 'H'] {
            g.guess(c);
        }
        assert_eq!(g.message(), "Você Perdeu! Enter para jogar novamente.");
    }

    #[test]
    fn ctrl_n_restarts_mid_round() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Char('z'));
        assert_eq!(g.round().wrong_guess_count(), 1);

        g.handle_input(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(g.round().wrong_guess_count(), 0);
        assert!(!g.round().has_guessed('N'));
    }

    #[test]
    fn plain_n_is_a_guess_while_playing() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Char('n'));
        assert!(g.round().has_guessed('N'));
    }

    #[test]
    fn esc_quits() {
        let mut g = game("CAT");
        assert_eq!(press(&mut g, KeyCode::Esc), Flow::Quit);
        assert_eq!(press(&mut g, KeyCode::Char('x')), Flow::Continue);
    }

    #[test]
    fn repeated_guess_explains_itself() {
        let mut g = game("CAT");
        press(&mut g, KeyCode::Char('q'));
        assert_eq!(g.guess('Q'), GuessOutcome::AlreadyGuessed('Q'));
        assert_eq!(g.message(), "A letra 'Q' já foi tentada.");
        assert_eq!(g.round().wrong_guess_count(), 1);
    }
}
