//! Display functions for the line-mode game

use super::formatters::{
    KEYBOARD_ROWS, colored_cell, feedback_tile, hint_markers, share_grid, tile_width,
};
use crate::core::{Evaluation, KeyboardState, Letter, LetterStatus};
use crate::game::{Outcome, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print one row of tiles followed by its hint markers
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    let width = tile_width(evaluation.len());
    let tiles: Vec<String> = evaluation
        .iter()
        .map(|f| feedback_tile(f, width).to_string())
        .collect();
    writeln!(out, "  {}", tiles.join(""))?;

    if evaluation.count_present() > 0 {
        writeln!(out, "  {}", hint_markers(evaluation).bright_black())?;
    }
    Ok(())
}

/// Print the keyboard coloured by the best status of each letter, followed by
/// the letters already ruled out
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_keyboard<W: Write>(out: &mut W, keyboard: &KeyboardState) -> io::Result<()> {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .filter_map(Letter::from_char)
            .map(|l| colored_cell(&format!(" {l} "), keyboard.status(l)).to_string())
            .collect();
        writeln!(out, "  {}{}", " ".repeat(indent * 2), keys.join(" "))?;
    }

    let absent: Vec<String> = keyboard
        .letters_with(LetterStatus::Absent)
        .map(|l| l.to_string())
        .collect();
    if !absent.is_empty() {
        writeln!(out, "  {}", format!("Not in word: {}", absent.join(" ")).bright_black())?;
    }
    Ok(())
}

/// Print the end-of-game banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn print_game_over<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let target = session.target();
    match session.outcome() {
        Outcome::Won => writeln!(
            out,
            "\n{}",
            format!("You won! The word was {target}").green().bold()
        )?,
        Outcome::Lost => writeln!(
            out,
            "\n{}",
            format!("You lost! The word was {target}").red().bold()
        )?,
        Outcome::InProgress => return Ok(()),
    }

    writeln!(
        out,
        "{}/{}\n{}\n",
        session.attempts().len(),
        session.config().max_attempts(),
        share_grid(session.attempts())
    )
}
