//! Error types for word construction and game set-up

use std::path::PathBuf;

/// Errors raised when text cannot be turned into a [`Word`](crate::core::Word).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,

    #[error("'{0}' is not a letter from A to Z")]
    InvalidCharacter(char),

    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Fatal configuration errors: when one of these is returned no session exists.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("word source has no {word_length}-letter words")]
    EmptyWordSource { word_length: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("target word has {actual} letters but the game is configured for {expected}")]
    TargetLength { expected: usize, actual: usize },

    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid word: {0}")]
    Word(#[from] WordError),
}
