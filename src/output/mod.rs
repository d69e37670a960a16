//! Terminal output formatting
//!
//! Coloured tiles, keyboard and banners for the line-mode game.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation, print_game_over, print_keyboard};
