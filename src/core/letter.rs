//! Single letters of the game alphabet

use std::fmt;

/// Number of letters in the alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;

/// An uppercase ASCII letter A-Z
///
/// Stored as its ASCII byte so that it can index fixed-size count tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character, normalising lowercase input
    ///
    /// Returns `None` for anything outside A-Z / a-z.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::from_char('1').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = A, 25 = Z)
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_SIZE {
            Some(Self(b'A' + index as u8))
        } else {
            None
        }
    }

    /// Position in the alphabet, 0-25
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate over A through Z in order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl TryFrom<char> for Letter {
    type Error = crate::error::WordError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::from_char(c).ok_or(crate::error::WordError::InvalidCharacter(c))
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
