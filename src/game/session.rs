//! A single game: one hidden target and a bounded number of guesses

use crate::core::{Feedback, LetterScore, Word, WordError};
use crate::error::GameError;
use crate::wordlists::WordStore;
use std::fmt;
use tracing::debug;

use super::Difficulty;

/// Shortest playable word length
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest playable word length
pub const MAX_WORD_LENGTH: usize = 12;

/// Guess budget for a word length: long words get two extra attempts
#[must_use]
pub const fn max_guesses_for(word_length: usize) -> usize {
    if word_length > 8 { 8 } else { 6 }
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// What a submitted guess did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Guess matched the target
    Won,
    /// Scored guess, attempts remain
    Continue,
    /// Last attempt used without finding the target
    Lost,
    /// Guess is not in any dictionary tier; no attempt consumed
    InvalidWord,
}

/// Result of one submitted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    /// Normalised uppercase guess
    pub guess: String,
    /// Per-letter scores; all `Absent` for an invalid word
    pub feedback: Feedback,
    pub outcome: Outcome,
    pub guesses_remaining: usize,
}

impl GuessResult {
    #[must_use]
    pub fn letters(&self) -> &[LetterScore] {
        self.feedback.scores()
    }
}

/// A game in progress or finished
///
/// Sessions are created by `GuessEngine::start_game` and borrow the shared,
/// read-only word store for guess validation.
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    store: &'a WordStore,
    difficulty: Difficulty,
    target: Word,
    guesses_used: usize,
    max_guesses: usize,
    state: GameState,
    history: Vec<(Word, Feedback)>,
}

impl<'a> GameSession<'a> {
    /// Create an in-progress session for an already chosen target
    pub(crate) fn new(store: &'a WordStore, difficulty: Difficulty, target: Word) -> Self {
        let max_guesses = max_guesses_for(target.len());

        Self {
            store,
            difficulty,
            target,
            guesses_used: 0,
            max_guesses,
            state: GameState::InProgress,
            history: Vec::with_capacity(max_guesses),
        }
    }

    /// Submit a guess and score it against the target
    ///
    /// Guesses that are not in any dictionary tier return `Outcome::InvalidWord`
    /// and do not use up an attempt.
    ///
    /// # Errors
    ///
    /// - `GameError::SessionOver` if the game has already been won or lost
    /// - `GameError::WrongLength` if the guess does not have `word_length()` letters
    /// - `GameError::InvalidCharacter` if the guess contains anything but A-Z
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessResult, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::SessionOver(self.state));
        }

        let expected = self.word_length();
        let actual = text.chars().count();
        if actual != expected {
            return Err(GameError::WrongLength { expected, actual });
        }

        let guess = Word::new(text).map_err(|err| match err {
            WordError::InvalidCharacter(ch) => GameError::InvalidCharacter(ch),
            WordError::Empty => GameError::WrongLength {
                expected,
                actual: 0,
            },
        })?;

        if !self.store.is_valid_word(guess.text()) {
            debug!(guess = guess.text(), "rejected guess not in dictionary");
            return Ok(GuessResult {
                guess: guess.text().to_string(),
                feedback: Feedback::all_absent(expected),
                outcome: Outcome::InvalidWord,
                guesses_remaining: self.guesses_remaining(),
            });
        }

        let won = guess == self.target;
        let feedback = Feedback::calculate(&guess, &self.target);
        self.guesses_used += 1;

        let outcome = if won {
            self.state = GameState::Won;
            Outcome::Won
        } else if self.guesses_used >= self.max_guesses {
            self.state = GameState::Lost;
            Outcome::Lost
        } else {
            Outcome::Continue
        };

        debug!(
            guess = guess.text(),
            attempt = self.guesses_used,
            exact = feedback.count_exact(),
            present = feedback.count_present(),
            ?outcome,
            "scored guess"
        );

        let result = GuessResult {
            guess: guess.text().to_string(),
            feedback: feedback.clone(),
            outcome,
            guesses_remaining: self.guesses_remaining(),
        };
        self.history.push((guess, feedback));

        Ok(result)
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        self.guesses_used
    }

    #[must_use]
    pub const fn guesses_remaining(&self) -> usize {
        self.max_guesses - self.guesses_used
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// The target word, available only once the game is over
    #[must_use]
    pub fn reveal(&self) -> Option<&str> {
        self.state.is_terminal().then(|| self.target.text())
    }
}
