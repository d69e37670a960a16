//! TUI rendering with ratatui
//!
//! Board of tiles, coloured keyboard, messages and a rules popup.

use super::app::{App, MessageStyle};
use crate::core::{Letter, LetterFeedback, LetterStatus};
use crate::game::{Outcome, Row};
use crate::output::formatters::{KEYBOARD_ROWS, status_rgb};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Header, keyboard, messages and status bar
const CHROME_HEIGHT: u16 = 3 + 5 + 5 + 2;

const RULES: &[&str] = &[
    "You have a fixed number of tries to guess the hidden word.",
    "",
    "GREEN tile  = correct letter in the correct spot.",
    "YELLOW tile = letter is in the word but in another spot.",
    "GREY tile   = letter is not in the word.",
    "",
    "Extra: YELLOW tiles show the position of that letter",
    "in the word in their top-right corner.",
    "",
    "Enter submits a guess, Backspace deletes a letter.",
    "Ctrl+N starts a new game, Esc quits.",
    "",
    "Press any key to close.",
];

fn rgb(status: Option<LetterStatus>) -> Color {
    let (r, g, b) = status_rgb(status);
    Color::Rgb(r, g, b)
}

/// Rows needed to draw every tile, clamped to what a terminal can address
fn board_height(max_attempts: usize) -> u16 {
    u16::try_from(max_attempts)
        .unwrap_or(u16::MAX)
        .saturating_mul(TILE_HEIGHT)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let board = board_height(app.session.config().max_attempts())
        .min(f.area().height.saturating_sub(CHROME_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board),           // Board
            Constraint::Length(5),            // Keyboard
            Constraint::Length(5),            // Messages
            Constraint::Length(2),            // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.show_rules {
        let area = f.area();
        render_rules(f, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let config = app.session.config();

    let rows = Layout::vertical(vec![Constraint::Length(TILE_HEIGHT); config.max_attempts()])
        .flex(Flex::Center)
        .split(area);

    for (row, row_area) in app.session.rows().zip(rows.iter()) {
        let tiles = Layout::horizontal(vec![Constraint::Length(TILE_WIDTH); config.word_length()])
            .flex(Flex::Center)
            .spacing(1)
            .split(*row_area);

        for (column, tile_area) in tiles.iter().enumerate() {
            match row {
                Row::Submitted(attempt) => {
                    render_feedback_tile(f, &attempt.evaluation.feedback()[column], *tile_area);
                }
                Row::Pending(letters) => {
                    render_input_tile(f, letters.get(column).copied(), *tile_area);
                }
                Row::Empty => render_input_tile(f, None, *tile_area),
            }
        }
    }
}

fn render_feedback_tile(f: &mut Frame, feedback: &LetterFeedback, area: Rect) {
    let color = rgb(Some(feedback.status));
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(color));

    if let Some(hint) = feedback.position_hint {
        block = block.title_top(Line::from(hint.to_string()).right_aligned());
    }

    let tile = Paragraph::new(feedback.letter.to_string())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(tile, area);
}

fn render_input_tile(f: &mut Frame, letter: Option<Letter>, area: Rect) {
    let border = if letter.is_some() {
        Color::Gray
    } else {
        Color::DarkGray
    };

    let tile = Paragraph::new(letter.map(|l| l.to_string()).unwrap_or_default())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(border)),
        );
    f.render_widget(tile, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.chars().filter_map(Letter::from_char) {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    Style::default()
                        .fg(Color::White)
                        .bg(rgb(keyboard.status(letter)))
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            spans.pop();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(3)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let lines = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(lines[0]);

    let config = app.session.config();
    let progress = match app.session.outcome() {
        Outcome::InProgress => format!(
            "Guess {}/{}",
            app.session.current_row() + 1,
            config.max_attempts()
        ),
        Outcome::Won => format!("Won in {}", app.session.attempts().len()),
        Outcome::Lost => "Lost".to_string(),
    };
    f.render_widget(
        Paragraph::new(progress).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let distribution = app.stats.guess_distribution[1..]
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}:{n}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    f.render_widget(
        Paragraph::new(distribution).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.session.is_terminal() {
        "Enter: New Game | q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | F1: Rules | Ctrl+N: New Game | Esc: Quit"
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        lines[1],
    );
}

fn render_rules(f: &mut Frame, area: Rect) {
    let [popup] = Layout::horizontal([Constraint::Length(62)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(RULES.len() as u16 + 2)])
        .flex(Flex::Center)
        .areas(popup);

    let text: Vec<Line> = RULES.iter().map(|&l| Line::from(l)).collect();
    let rules = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" How to Play ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::White).bg(Color::Black)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(rules, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{GameConfig, MAX_ATTEMPTS_LIMIT};
    use crate::wordlists::loader::words_from_slice;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn words() -> Vec<Word> {
        words_from_slice(&["crane"], 5)
    }

    fn play(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn renders_header_and_keyboard() {
        let words = words();
        let app = App::new(&words, GameConfig::default()).unwrap();
        let text = screen(&app);

        assert!(text.contains("W O R D L E"));
        assert!(text.contains(" Q   W   E "));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn renders_submitted_row_with_hint() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default()).unwrap();
        play(&mut app, "snake");
        let text = screen(&app);

        // N is present and its tile border carries the target position 4
        assert!(text.lines().any(|l| l.contains('━') && l.contains('4')));
        assert!(text.contains("Guess 2/6"));
    }

    #[test]
    fn board_height_saturates() {
        assert_eq!(board_height(6), 18);
        assert_eq!(board_height(22_000), u16::MAX);
        assert_eq!(board_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn renders_largest_allowed_board() {
        let words = words();
        let app = App::new(&words, GameConfig::new(5, MAX_ATTEMPTS_LIMIT).unwrap()).unwrap();
        let text = screen(&app);
        assert!(text.contains("W O R D L E"));
        assert!(text.contains("Guess 1/100"));
    }

    #[test]
    fn renders_rules_popup() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default()).unwrap();
        app.handle_key(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE));
        let text = screen(&app);

        assert!(text.contains("How to Play"));
    }

    #[test]
    fn renders_win_message() {
        let words = words();
        let mut app = App::new(&words, GameConfig::default()).unwrap();
        play(&mut app, "crane");
        let text = screen(&app);

        assert!(text.contains("You won! The word was CRANE"));
        assert!(text.contains("Enter: New Game"));
    }
}
