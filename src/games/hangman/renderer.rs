/// Hangman renderer - reads the round snapshot, never changes it
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::renderer::GameRenderer;
use crate::games::hangman::game::{HangmanGame, ALPHABET, KEYBOARD_COLUMNS};
use crate::games::hangman::round::{
    display_word, letter_state, remaining_attempts, LetterState, Round, Status,
};

const ACCENT: Color = Color::Cyan;

#[derive(Debug)]
pub struct HangmanRenderer;

impl GameRenderer<HangmanGame> for HangmanRenderer {
    fn render(frame: &mut Frame, game: &HangmanGame) {
        let round = game.round();
        let playing = round.status() == Status::Playing;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                           // Title
                Constraint::Min(9),                              // Gallows + word
                Constraint::Length(if playing { 5 } else { 0 }), // Keyboard
                Constraint::Length(3),                           // Status
                Constraint::Length(1),                           // Help
            ])
            .split(frame.area());

        let title = Paragraph::new("Jogo da Forca")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let board = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(chunks[1]);

        let gallows = Paragraph::new(gallows_lines(round.wrong_guess_count()).join("\n"))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(gallows, board[0]);
        frame.render_widget(word_panel(round), board[1]);

        if playing {
            frame.render_widget(keyboard(round, game.cursor()), chunks[2]);
        }

        let status = Paragraph::new(game.message().to_string())
            .block(Block::default().borders(Borders::ALL).title(" Status "))
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(status, chunks[3]);

        let help = if playing {
            "[A-Z] Chutar  [←↑↓→ Enter] Teclado  [Ctrl+N] Nova palavra  [Esc] Sair"
        } else {
            "[Enter] Jogar novamente  [Esc] Sair"
        };
        frame.render_widget(
            Paragraph::new(help)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray)),
            chunks[4],
        );

        if !playing {
            render_outcome(frame, round);
        }
    }
}

/// ASCII gallows with one body part per wrong guess: head, body, right
/// arm, left arm, right leg, left leg.
pub fn gallows_lines(wrong: u8) -> [String; 7] {
    let part = |after: u8, c: char| if wrong > after { c } else { ' ' };

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  |   {}", part(0, 'O')),
        format!("  |  {}{}{}", part(3, '/'), part(1, '|'), part(2, '\\')),
        format!("  |  {} {}", part(5, '/'), part(4, '\\')),
        "  |".to_string(),
        "=====".to_string(),
    ]
}

fn word_panel(round: &Round) -> Paragraph<'static> {
    let word = display_word(round)
        .into_iter()
        .map(|c| c.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let tried: Vec<Span> = if round.guessed_letters().is_empty() {
        vec![Span::styled("Nenhuma ainda", Style::default().fg(Color::DarkGray))]
    } else {
        round
            .guessed_letters()
            .iter()
            .map(|&l| Span::styled(format!("{l} "), letter_style(letter_state(round, l))))
            .collect()
    };

    let lines = vec![
        Line::from(format!("Tentativas restantes: {}", remaining_attempts(round))),
        Line::from(""),
        Line::from(Span::styled(
            word,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Letras tentadas:"),
        Line::from(tried),
    ];

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL))
}

fn keyboard(round: &Round, cursor: usize) -> Paragraph<'static> {
    let rows: Vec<Line> = ALPHABET
        .chunks(KEYBOARD_COLUMNS)
        .enumerate()
        .map(|(row, keys)| {
            let spans: Vec<Span> = keys
                .iter()
                .enumerate()
                .map(|(col, &key)| {
                    let mut style = letter_style(letter_state(round, key));
                    if row * KEYBOARD_COLUMNS + col == cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {key} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(rows)
        .block(Block::default().borders(Borders::ALL).title(" Teclado "))
        .alignment(Alignment::Center)
}

fn letter_style(state: LetterState) -> Style {
    match state {
        LetterState::Untried => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        LetterState::CorrectGuess => Style::default().fg(Color::Green).add_modifier(Modifier::DIM),
        LetterState::WrongGuess => Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
    }
}

fn render_outcome(frame: &mut Frame, round: &Round) {
    let (title, color) = match round.status() {
        Status::Won => ("Você Venceu! 🎉", Color::Green),
        _ => ("Você Perdeu! 😢", Color::Red),
    };

    let lines = vec![
        Line::from(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("A palavra era:"),
        Line::from(Span::styled(
            round.secret_word().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] Jogar Novamente", Style::default().fg(ACCENT))),
    ];

    let area = centered(frame.area(), 36, 8);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ACCENT)))
            .alignment(Alignment::Center),
        area,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::games::hangman::engine::RoundEngine;
    use crate::games::hangman::words::WordList;
    use ratatui::{backend::TestBackend, Terminal};

    fn game(word: &str) -> HangmanGame {
        let words = WordList::new([word]).unwrap();
        HangmanGame::new(RoundEngine::from_config(GameConfig::new(words)))
    }

    fn screen(game: &HangmanGame) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| HangmanRenderer::render(f, game)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn shows(screen: &[String], text: &str) -> bool {
        screen.iter().any(|line| line.contains(text))
    }

    #[test]
    fn gallows_grows_one_part_per_miss() {
        assert_eq!(gallows_lines(0)[2], "  |    ");
        assert_eq!(gallows_lines(1)[2], "  |   O");
        assert_eq!(gallows_lines(2)[3], "  |   | ");
        assert_eq!(gallows_lines(3)[3], "  |   |\\");
        assert_eq!(gallows_lines(4)[3], "  |  /|\\");
        assert_eq!(gallows_lines(5)[4], "  |    \\");
        assert_eq!(gallows_lines(6)[4], "  |  / \\");
    }

    #[test]
    fn playing_screen_shows_board_and_keyboard() {
        let mut g = game("CAT");
        g.guess('A');
        g.guess('Z');
        let s = screen(&g);

        assert!(shows(&s, "Jogo da Forca"));
        assert!(shows(&s, "Tentativas restantes: 5"));
        assert!(shows(&s, "_ A _"));
        assert!(shows(&s, "A Z"));
        assert!(shows(&s, "Teclado"));
        assert!(!shows(&s, "A palavra era:"));
    }

    #[test]
    fn untouched_round_has_no_tried_letters() {
        let s = screen(&game("CAT"));
        assert!(shows(&s, "Nenhuma ainda"));
        assert!(shows(&s, "_ _ _"));
    }

    #[test]
    fn lost_screen_reveals_the_word() {
        let mut g = game("CAT");
        for c in ['B', 'D', 'E', 'F', 'G', 'H'] {
            g.guess(c);
        }
        let s = screen(&g);

        assert!(shows(&s, "Perdeu!"));
        assert!(shows(&s, "A palavra era:"));
        assert!(shows(&s, "C A T"));
        assert!(shows(&s, "Tentativas restantes: 0"));
        assert!(!shows(&s, "Teclado"));
    }

    #[test]
    fn won_screen_congratulates() {
        let mut g = game("CAT");
        for c in ['C', 'A', 'T'] {
            g.guess(c);
        }
        let s = screen(&g);
        assert!(shows(&s, "Venceu!"));
        assert!(shows(&s, "Jogar Novamente"));
    }
}
