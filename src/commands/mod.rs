//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::evaluate_words;
pub use simple::{run_simple, run_simple_with, submit_guess};
