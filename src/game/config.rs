//! Game configuration

use crate::error::GameError;

/// Letters per word in the standard game
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Guesses allowed in the standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Upper bound on guesses, keeps the board drawable
pub const MAX_ATTEMPTS_LIMIT: usize = 100;

/// Board dimensions, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    word_length: usize,
    max_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `GameError::InvalidConfig` if either value is zero or
    /// `max_attempts` exceeds [`MAX_ATTEMPTS_LIMIT`].
    pub fn new(word_length: usize, max_attempts: usize) -> Result<Self, GameError> {
        if word_length == 0 {
            return Err(GameError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if max_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if max_attempts > MAX_ATTEMPTS_LIMIT {
            return Err(GameError::InvalidConfig(format!(
                "max attempts must be at most {MAX_ATTEMPTS_LIMIT}"
            )));
        }
        Ok(Self {
            word_length,
            max_attempts,
        })
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}
