//! TUI application state and logic

use crate::core::{Letter, Word};
use crate::error::GameError;
use crate::game::{GameConfig, Outcome, Rejection, Session, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: Session,
    pub words: &'a [Word],
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_rules: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// In-memory results for the current run of the program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts + 1],
        }
    }

    /// Count a finished game
    pub fn record(&mut self, session: &Session) {
        match session.outcome() {
            Outcome::Won => {
                self.total_games += 1;
                self.games_won += 1;
                if let Some(slot) = self.guess_distribution.get_mut(session.attempts().len()) {
                    *slot += 1;
                }
            }
            Outcome::Lost => self.total_games += 1,
            Outcome::InProgress => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordSource` if `words` has no word of the
    /// configured length.
    pub fn new(words: &'a [Word], config: GameConfig) -> Result<Self, GameError> {
        let session = Session::from_source(words, config, &mut rand::rng())?;

        Ok(Self {
            session,
            words,
            messages: vec![Message {
                text: format!(
                    "Guess the {}-letter word in {} tries. F1 for rules.",
                    config.word_length(),
                    config.max_attempts()
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::new(config.max_attempts()),
            show_rules: false,
            should_quit: false,
        })
    }

    /// Start over with a new random target
    ///
    /// A game abandoned before it ends is not counted in the statistics.
    pub fn new_game(&mut self) {
        match Session::from_source(self.words, self.session.config(), &mut rand::rng()) {
            Ok(session) => {
                self.session = session;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if let Some(letter) = Letter::from_char(c) {
            self.session.enter_letter(letter);
        }
    }

    pub fn delete_letter(&mut self) {
        self.session.delete_letter();
    }

    pub fn submit(&mut self) {
        match self.session.submit_row() {
            SubmitOutcome::Continue => {}
            SubmitOutcome::Won => {
                self.stats.record(&self.session);
                let text = format!("You won! The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Success);
                self.add_message("Press Enter for a new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Lost => {
                self.stats.record(&self.session);
                let text = format!("You lost! The word was {}", self.session.target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Enter for a new game or 'q' to quit.", MessageStyle::Info);
            }
            SubmitOutcome::Rejected(Rejection::Incomplete) => {
                self.add_message("Not enough letters!", MessageStyle::Error);
            }
            SubmitOutcome::Rejected(_) => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            }
            return;
        }

        // Rules popup swallows the next key
        if self.show_rules {
            self.show_rules = false;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.show_rules = true,
            _ if self.session.is_terminal() => match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::debug!(
                games = app.stats.total_games,
                won = app.stats.games_won,
                "leaving TUI"
            );
            break;
        }
    }

    Ok(())
}
