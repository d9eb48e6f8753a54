//! Feedback command
//!
//! Scores a guess against a known target without consulting the dictionary.

use crate::core::{Feedback, Word, WordError};
use crate::error::GameError;

fn parse(text: &str) -> Result<Word, GameError> {
    Word::new(text.trim()).map_err(|err| match err {
        WordError::InvalidCharacter(ch) => GameError::InvalidCharacter(ch),
        WordError::Empty => GameError::InvalidWordLength(0),
    })
}

/// Score `guess` against `target`
///
/// # Errors
///
/// - `GameError::InvalidCharacter` if either word contains anything but A-Z
/// - `GameError::WrongLength` if the guess and target lengths differ
///
/// # Examples
/// ```
/// use tiered_wordle::commands::score_guess;
///
/// let feedback = score_guess("erase", "speed").unwrap();
/// assert_eq!(feedback.to_emoji(), "🟨⬜⬜🟨🟨");
/// ```
pub fn score_guess(guess: &str, target: &str) -> Result<Feedback, GameError> {
    let target = parse(target)?;
    let guess = parse(guess)?;

    if guess.len() != target.len() {
        return Err(GameError::WrongLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    Ok(Feedback::calculate(&guess, &target))
}
