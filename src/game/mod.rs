//! Game session and configuration

mod config;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig, MAX_ATTEMPTS_LIMIT};
pub use session::{Attempt, EditOutcome, Outcome, Rejection, Row, Session, SubmitOutcome};
