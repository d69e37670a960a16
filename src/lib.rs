//! Wordle Game
//!
//! A terminal Wordle game. Misplaced letters also reveal where that letter
//! sits in the hidden word.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Letter, Word};
//! use wordle_game::game::{GameConfig, Session, SubmitOutcome};
//!
//! let mut session = Session::new(Word::new("crane").unwrap(), GameConfig::default()).unwrap();
//!
//! for c in "snake".chars() {
//!     session.enter_letter(Letter::from_char(c).unwrap());
//! }
//! assert_eq!(session.submit_row(), SubmitOutcome::Continue);
//! println!("{}", session.attempts()[0].evaluation.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
