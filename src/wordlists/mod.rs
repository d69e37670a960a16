//! Word sources for picking target words
//!
//! A [`WordSource`] supplies candidate targets of a given length. The game
//! ships an embedded list compiled in at build time and can also read a
//! plain-text word file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::PathBuf;

/// Supplies candidate target words
pub trait WordSource {
    /// All available words with exactly `word_length` letters
    ///
    /// # Errors
    /// Returns an error if the underlying words cannot be read.
    fn candidates(&self, word_length: usize) -> Result<Vec<Word>, GameError>;
}

/// Pick a target uniformly at random from the words of `word_length` letters
///
/// # Errors
/// Returns `GameError::EmptyWordSource` when the source has no such word, or
/// any error from the source itself.
pub fn choose_target<S, R>(source: &S, word_length: usize, rng: &mut R) -> Result<Word, GameError>
where
    S: WordSource + ?Sized,
    R: Rng + ?Sized,
{
    let candidates = source.candidates(word_length)?;
    tracing::debug!(candidates = candidates.len(), word_length, "choosing target word");

    candidates
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyWordSource { word_length })
}

/// The list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn candidates(&self, word_length: usize) -> Result<Vec<Word>, GameError> {
        Ok(loader::words_from_slice(WORDS, word_length))
    }
}

/// A word file on disk, read each time candidates are requested
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWords {
    fn candidates(&self, word_length: usize) -> Result<Vec<Word>, GameError> {
        loader::load_from_file(&self.path, word_length)
    }
}

/// Words from any string slice
#[derive(Debug, Clone, Copy)]
pub struct SliceWords<'a> {
    words: &'a [&'a str],
}

impl<'a> SliceWords<'a> {
    #[must_use]
    pub const fn new(words: &'a [&'a str]) -> Self {
        Self { words }
    }
}

impl WordSource for SliceWords<'_> {
    fn candidates(&self, word_length: usize) -> Result<Vec<Word>, GameError> {
        Ok(loader::words_from_slice(self.words, word_length))
    }
}

/// Already-loaded words, e.g. a list read once at start-up
impl WordSource for [Word] {
    fn candidates(&self, word_length: usize) -> Result<Vec<Word>, GameError> {
        Ok(self
            .iter()
            .filter(|w| w.len() == word_length)
            .cloned()
            .collect())
    }
}
