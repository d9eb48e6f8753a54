//! Tiered Wordle
//!
//! A Wordle-style word game with difficulty-tiered dictionaries and word lengths
//! from 3 to 12 letters.
//!
//! # Quick Start
//!
//! ```rust
//! use tiered_wordle::game::{Difficulty, GuessEngine, Outcome};
//! use tiered_wordle::wordlists::WordStore;
//!
//! // One word list per tier, easiest first
//! let store = WordStore::from_sources(["crane\nslate", "quartz"]);
//! let mut engine = GuessEngine::new(&store);
//!
//! let mut game = engine.start_game(Difficulty::Medium, 6).unwrap();
//! let result = game.submit_guess("QUARTZ").unwrap();
//! assert_eq!(result.outcome, Outcome::Won);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions and target selection
pub mod game;

// Tiered word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{DictionaryError, GameError};
