use crate::game::{Difficulty, GameState};
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised while loading or querying the tiered dictionary
pub enum DictionaryError {
    /// A tier file could not be opened or read
    #[error("Dictionary file \"{path}\" could not be read")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// A reader-backed tier source failed
    #[error("Dictionary source {tier} could not be read")]
    Io {
        tier: usize,
        source: std::io::Error,
    },

    /// Tier indices are 1-based and must not exceed the number of loaded tiers
    #[error("Tier {index} out of range (must be between 1 and {count})")]
    TierOutOfRange { index: usize, count: usize },
}

#[derive(Error, Debug)]
/// Errors returned by game sessions
pub enum GameError {
    /// Requested word length is outside 3..=12
    #[error("Invalid word length {0} (must be between 3 and 12)")]
    InvalidWordLength(usize),

    /// The tier for this difficulty has no word of the requested length
    #[error("No {word_length}-letter word available at {difficulty} difficulty")]
    NoWordAvailable {
        difficulty: Difficulty,
        word_length: usize,
    },

    /// Guess does not have exactly `expected` letters
    #[error("Guess must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// Guess contains something other than A-Z
    #[error("Invalid character '{0}' (only letters A-Z allowed)")]
    InvalidCharacter(char),

    /// Guess submitted after the session finished
    #[error("Game is already over ({0})")]
    SessionOver(GameState),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}
