/// Core game interface - what the terminal loop needs from a game
use crossterm::event::KeyEvent;

/// Whether the loop keeps running after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Main game trait: a game turns key presses into state changes and draws
/// itself from that state. Each call runs to completion before the next.
pub trait Game {
    /// Handle one key press
    fn handle_input(&mut self, event: KeyEvent) -> Flow;

    /// Draw the current state into the Ratatui frame
    fn render(&self, frame: &mut ratatui::Frame);
}
