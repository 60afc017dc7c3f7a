/// Renderer trait - keeps drawing code apart from game logic
use ratatui::Frame;

pub trait GameRenderer<S> {
    /// Pure rendering function: reads `state`, never changes it
    fn render(frame: &mut Frame, state: &S);
}
