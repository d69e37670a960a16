//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line is a whole guess.

use crate::core::Word;
use crate::error::{GameError, WordError};
use crate::game::{GameConfig, Session, SubmitOutcome};
use crate::output::{print_evaluation, print_game_over, print_keyboard};
use crate::wordlists::{WordSource, choose_target};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if no target can be chosen or on an I/O error.
pub fn run_simple<S: WordSource + ?Sized>(source: &S, config: GameConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(
        &mut stdin.lock(),
        &mut stdout.lock(),
        source,
        config,
        &mut rand::rng(),
    )
}

/// Line-mode game loop over any reader and writer
///
/// # Errors
///
/// Returns an error if no target can be chosen or on an I/O error.
pub fn run_simple_with<R, W, S, G>(
    input: &mut R,
    out: &mut W,
    source: &S,
    config: GameConfig,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: WordSource + ?Sized,
    G: Rng + ?Sized,
{
    writeln!(out, "\n{}", "W O R D L E".bright_green().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length(),
        config.max_attempts()
    )?;
    writeln!(
        out,
        "Yellow tiles show the position of that letter in the word.\nCommands: ':new' for a new game, ':quit' to exit\n"
    )?;

    let mut session = Session::new(choose_target(source, config.word_length(), rng)?, config)?;

    loop {
        if session.is_terminal() {
            print_game_over(out, &session)?;
            match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    session = session.reset(choose_target(source, config.word_length(), rng)?)?;
                    writeln!(out, "\nNew game started!\n")?;
                }
                _ => break,
            }
        }

        let label = format!(
            "Guess {}/{}",
            session.current_row() + 1,
            config.max_attempts()
        );
        let Some(line) = prompt(input, out, &label)? else {
            break;
        };

        match line.as_str() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                session = session.reset(choose_target(source, config.word_length(), rng)?)?;
                writeln!(out, "\nNew game started!\n")?;
                continue;
            }
            _ => {}
        }

        match submit_guess(&mut session, &line) {
            Ok(SubmitOutcome::Rejected(_)) => {}
            Ok(_) => {
                if let Some(attempt) = session.attempts().last() {
                    print_evaluation(out, &attempt.evaluation)?;
                }
                if !session.is_terminal() {
                    print_keyboard(out, session.keyboard())?;
                    writeln!(out)?;
                }
            }
            Err(GameError::Word(WordError::InvalidLength { expected, actual }))
                if actual < expected =>
            {
                writeln!(out, "{}", "Not enough letters!".yellow())?;
            }
            Err(e) => writeln!(out, "{}", e.to_string().yellow())?,
        }
    }

    writeln!(out, "\nThanks for playing!\n")?;
    Ok(())
}

/// Type a whole word into the session and submit it
///
/// Anything already typed in the current row is cleared first. The word must
/// match the configured length.
///
/// # Errors
///
/// Returns `GameError::Word` when the text is not a word of the right length;
/// the session is left unchanged in that case.
pub fn submit_guess(session: &mut Session, text: &str) -> Result<SubmitOutcome, GameError> {
    let word = Word::with_length(text, session.config().word_length())?;

    while !session.pending().is_empty() {
        session.delete_letter();
    }
    for &letter in word.letters() {
        session.enter_letter(letter);
    }
    Ok(session.submit_row())
}

/// Read one trimmed, lowercased line; `None` on end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}
