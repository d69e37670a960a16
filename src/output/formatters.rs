//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterFeedback, LetterStatus};
use crate::game::Attempt;
use colored::{ColoredString, Colorize};

/// QWERTY layout used for the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Tile palette as RGB triples
pub const CORRECT_RGB: (u8, u8, u8) = (83, 141, 78);
pub const PRESENT_RGB: (u8, u8, u8) = (181, 159, 59);
pub const ABSENT_RGB: (u8, u8, u8) = (58, 58, 60);
pub const UNSEEN_KEY_RGB: (u8, u8, u8) = (129, 131, 132);

/// Background colour for a status, `None` meaning an unseen key
#[must_use]
pub const fn status_rgb(status: Option<LetterStatus>) -> (u8, u8, u8) {
    match status {
        Some(LetterStatus::Correct) => CORRECT_RGB,
        Some(LetterStatus::Present) => PRESENT_RGB,
        Some(LetterStatus::Absent) => ABSENT_RGB,
        None => UNSEEN_KEY_RGB,
    }
}

/// Colour a padded letter with the background of its status
#[must_use]
pub fn colored_cell(text: &str, status: Option<LetterStatus>) -> ColoredString {
    let (r, g, b) = status_rgb(status);
    text.white().bold().on_truecolor(r, g, b)
}

/// Columns per tile for a word of `word_length` letters
///
/// Wide enough for the letter and for the largest hint, which is the word
/// length itself, with one leading space.
#[must_use]
pub fn tile_width(word_length: usize) -> usize {
    (word_length.to_string().len() + 1).max(3)
}

/// A single feedback tile like " A ", centred in `width` columns
#[must_use]
pub fn feedback_tile(feedback: &LetterFeedback, width: usize) -> ColoredString {
    colored_cell(
        &format!("{:^width$}", feedback.letter.as_char()),
        Some(feedback.status),
    )
}

/// Hint markers aligned under tiles: the 1-based target position for present
/// letters, blank elsewhere
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, evaluate};
/// use wordle_game::output::formatters::hint_markers;
///
/// let e = evaluate(&Word::new("crane").unwrap(), &Word::new("snake").unwrap());
/// assert_eq!(hint_markers(&e), "    4          ");
/// ```
#[must_use]
pub fn hint_markers(evaluation: &Evaluation) -> String {
    let width = tile_width(evaluation.len());
    evaluation
        .iter()
        .map(|f| match f.position_hint {
            Some(hint) => format!(" {hint:<pad$}", pad = width - 1),
            None => " ".repeat(width),
        })
        .collect()
}

/// Shareable result grid, one emoji row per attempt
#[must_use]
pub fn share_grid(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| a.evaluation.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human label for a status
#[must_use]
pub const fn status_label(status: LetterStatus) -> &'static str {
    match status {
        LetterStatus::Correct => "correct",
        LetterStatus::Present => "present",
        LetterStatus::Absent => "absent",
    }
}
