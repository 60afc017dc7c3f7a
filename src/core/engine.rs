use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::game::{Flow, Game};

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Draw, wait for input, dispatch; until the game asks to quit.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            if !event::poll(POLL_INTERVAL).context("failed to poll terminal events")? {
                continue;
            }

            let event = event::read().context("failed to read terminal event")?;
            if self.dispatch(event) == Flow::Quit {
                break;
            }
        }

        debug!("engine loop finished");
        Ok(self.game)
    }

    /// Route one terminal event to the game. Only key presses reach it;
    /// releases, repeats and non-key events are dropped.
    pub fn dispatch(&mut self, event: Event) -> Flow {
        let Event::Key(key) = event else {
            return Flow::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        if matches!(key.code, KeyCode::Char('c' | 'C')) && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Flow::Quit;
        }
        self.game.handle_input(key)
    }
}
