//! Single evaluation command
//!
//! Scores one guess against a given target without starting a game.

use crate::core::{Evaluation, Word, evaluate};
use anyhow::{Result, bail};

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word contains characters outside A-Z or the two
/// words differ in length.
pub fn evaluate_words(target: &str, guess: &str) -> Result<Evaluation> {
    let target = Word::new(target).map_err(|e| anyhow::anyhow!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| anyhow::anyhow!("Invalid guess: {e}"))?;

    if target.len() != guess.len() {
        bail!(
            "Guess has {} letters but the target has {}",
            guess.len(),
            target.len()
        );
    }

    Ok(evaluate(&target, &guess))
}
