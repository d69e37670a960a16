//! Word list loading utilities
//!
//! Turns raw text (a file, or an embedded slice) into validated words of one
//! length. Duplicates are dropped, first occurrence wins.

use crate::core::Word;
use crate::error::GameError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words of `word_length` letters from a file, one word per line
///
/// Blank lines and lines starting with `#` are ignored. Lines that are not a
/// valid word of the requested length are skipped.
///
/// # Errors
///
/// Returns `GameError::WordList` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Vec<Word>, GameError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_lines(content.lines(), word_length);
    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to words of `word_length` letters
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "slate", "toolong"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), word_length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, word_length: usize) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words = lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let word = Word::with_length(line, word_length);
            if word.is_err() {
                skipped += 1;
            }
            word.ok()
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect();

    if skipped > 0 {
        tracing::trace!(skipped, word_length, "skipped entries of another length or alphabet");
    }
    words
}
