//! Cumulative keyboard letter state
//!
//! Tracks the best status seen for each letter across all guesses of a game.
//! Priority is Correct > Present > Absent > unseen, and a letter never moves
//! down that order.

use super::{ALPHABET_SIZE, Evaluation, Letter, LetterStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterStatus>; ALPHABET_SIZE],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keys: [None; ALPHABET_SIZE],
        }
    }

    /// Best status seen for `letter`, or `None` if it has never been guessed
    #[inline]
    #[must_use]
    pub fn status(&self, letter: Letter) -> Option<LetterStatus> {
        self.keys[letter.index()]
    }

    /// Fold a single observation into the state, keeping the stronger status
    pub fn update(&mut self, letter: Letter, status: LetterStatus) {
        let slot = &mut self.keys[letter.index()];
        *slot = (*slot).max(Some(status));
    }

    /// Fold every letter of an evaluated guess into the state
    pub fn record(&mut self, evaluation: &Evaluation) {
        for feedback in evaluation {
            self.update(feedback.letter, feedback.status);
        }
    }

    /// Letters that currently hold `status`, in alphabetical order
    pub fn letters_with(&self, status: LetterStatus) -> impl Iterator<Item = Letter> + '_ {
        Letter::alphabet().filter(move |&l| self.status(l) == Some(status))
    }
}
