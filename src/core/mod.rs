//! Core domain types for the game
//!
//! Letters, words, guess evaluation and keyboard state. Everything here is
//! pure: no I/O, no randomness, no shared state.

mod evaluation;
mod keyboard;
mod letter;
mod word;

pub use evaluation::{Evaluation, LetterFeedback, LetterStatus, evaluate};
pub use keyboard::KeyboardState;
pub use letter::{ALPHABET_SIZE, Letter};
pub use word::Word;
