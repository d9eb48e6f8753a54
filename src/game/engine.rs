//! Game engine: starts sessions against a word store

use super::session::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use super::{Difficulty, GameSession};
use crate::core::Word;
use crate::error::GameError;
use crate::wordlists::WordStore;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, warn};

/// Parameters for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub word_length: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(difficulty: Difficulty, word_length: usize) -> Self {
        Self {
            difficulty,
            word_length,
        }
    }

    /// Check the word length is playable
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidWordLength` unless the length is within 3..=12.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.word_length < MIN_WORD_LENGTH || self.word_length > MAX_WORD_LENGTH {
            return Err(GameError::InvalidWordLength(self.word_length));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Difficulty::Easy, 5)
    }
}

/// Main game engine
///
/// Picks targets from the word store using its random number generator and
/// hands out sessions that share the store.
pub struct GuessEngine<'a, R: Rng = ThreadRng> {
    store: &'a WordStore,
    rng: R,
}

impl<'a> GuessEngine<'a> {
    /// Create an engine using the thread-local random number generator
    #[must_use]
    pub fn new(store: &'a WordStore) -> Self {
        Self::with_rng(store, rand::rng())
    }
}

impl<'a, R: Rng> GuessEngine<'a, R> {
    /// Create an engine with an explicit random number generator
    ///
    /// # Parameters
    /// - `store`: Tiered dictionary used for targets and guess validation
    /// - `rng`: Source of randomness for target selection (seed it for reproducible games)
    pub const fn with_rng(store: &'a WordStore, rng: R) -> Self {
        Self { store, rng }
    }

    /// The word store sessions validate against
    #[must_use]
    pub const fn store(&self) -> &'a WordStore {
        self.store
    }

    /// Start a new game
    ///
    /// Either returns a fully initialised, in-progress session or fails without
    /// creating one.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidWordLength` if `word_length` is outside 3..=12
    /// - `GameError::NoWordAvailable` if the difficulty's tier has no word of that length
    /// - `GameError::Dictionary` if the store has fewer tiers than the difficulty needs
    ///
    /// # Examples
    /// ```
    /// use tiered_wordle::game::{Difficulty, GameState, GuessEngine};
    /// use tiered_wordle::wordlists::WordStore;
    ///
    /// let store = WordStore::from_sources(["crane\nslate"]);
    /// let mut engine = GuessEngine::new(&store);
    ///
    /// let game = engine.start_game(Difficulty::Easy, 5).unwrap();
    /// assert_eq!(game.state(), GameState::InProgress);
    /// assert_eq!(game.max_guesses(), 6);
    ///
    /// assert!(engine.start_game(Difficulty::Easy, 13).is_err());
    /// ```
    pub fn start_game(
        &mut self,
        difficulty: Difficulty,
        word_length: usize,
    ) -> Result<GameSession<'a>, GameError> {
        self.start(GameConfig::new(difficulty, word_length))
    }

    /// Start a new game from a `GameConfig`
    ///
    /// # Errors
    ///
    /// Same as `start_game`.
    pub fn start(&mut self, config: GameConfig) -> Result<GameSession<'a>, GameError> {
        config.validate()?;

        let GameConfig {
            difficulty,
            word_length,
        } = config;

        // Dictionary lines are arbitrary text; only pure A-Z words make playable targets
        let Some(word) = self.store.random_word_where(
            difficulty.tier_index(),
            word_length,
            &mut self.rng,
            |w| Word::new(w).is_ok(),
        )?
        else {
            warn!(%difficulty, word_length, "no target word available");
            return Err(GameError::NoWordAvailable {
                difficulty,
                word_length,
            });
        };

        let target = Word::new(word).map_err(|_| GameError::NoWordAvailable {
            difficulty,
            word_length,
        })?;

        debug!(%difficulty, word_length, "started game");
        Ok(GameSession::new(self.store, difficulty, target))
    }
}
