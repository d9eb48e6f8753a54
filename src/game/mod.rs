//! Game sessions
//!
//! `GuessEngine` starts sessions against a shared `WordStore`; each
//! `GameSession` scores guesses until the target is found or the attempts run out.

mod difficulty;
mod engine;
mod session;

pub use difficulty::Difficulty;
pub use engine::{GameConfig, GuessEngine};
pub use session::{
    GameSession, GameState, GuessResult, MAX_WORD_LENGTH, MIN_WORD_LENGTH, Outcome,
    max_guesses_for,
};
