//! Word representation
//!
//! A Word is an uppercase sequence of letters. The game fixes one length per
//! session, so length is validated separately from content.

use super::letter::{ALPHABET_SIZE, Letter};
use crate::error::WordError;
use std::fmt;

/// An uppercase word made of letters A-Z
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
}

impl Word {
    /// Create a new Word from a string of any non-zero length
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains a character
    /// outside A-Z (surrounding whitespace is not trimmed).
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = text
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_letters(letters))
    }

    /// Create a Word and require it to have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: &str, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Build a word from letters that are already validated
    #[must_use]
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; provided for API symmetry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a 0-based position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// 0-based index of the first occurrence of `letter`
    #[must_use]
    pub fn first_position_of(&self, letter: Letter) -> Option<usize> {
        self.letters.iter().position(|&l| l == letter)
    }

    /// Count of each letter, indexed by [`Letter::index`]
    ///
    /// Used as the remaining-letter pool during evaluation.
    #[must_use]
    pub fn letter_counts(&self) -> [usize; ALPHABET_SIZE] {
        let mut counts = [0usize; ALPHABET_SIZE];
        for letter in &self.letters {
            counts[letter.index()] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
