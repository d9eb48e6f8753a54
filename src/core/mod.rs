//! Core domain types for the game
//!
//! Words and per-letter feedback. Everything here is pure and independent of
//! dictionaries and session state.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{Word, WordError};
