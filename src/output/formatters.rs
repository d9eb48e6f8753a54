//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore};
use colored::{ColoredString, Colorize};

/// Render one letter as a coloured tile
#[must_use]
pub fn letter_tile(letter: char, score: LetterScore) -> ColoredString {
    let tile = format!(" {letter} ");
    match score {
        LetterScore::Exact => tile.black().on_green().bold(),
        LetterScore::Present => tile.black().on_yellow().bold(),
        LetterScore::Absent => tile.white().on_bright_black(),
    }
}

/// Render a guess as a row of coloured tiles
#[must_use]
pub fn guess_tiles(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.scores())
        .map(|(letter, &score)| letter_tile(letter, score).to_string())
        .collect()
}

/// Create a bar of filled/empty cells showing remaining attempts
#[must_use]
pub fn attempts_bar(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    format!("{}{}", "█".repeat(remaining), "░".repeat(max - remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn guess_tiles_without_colour() {
        colored::control::set_override(false);

        let guess = Word::new("robot").unwrap();
        let target = Word::new("floor").unwrap();
        let feedback = Feedback::calculate(&guess, &target);

        assert_eq!(guess_tiles(guess.text(), &feedback), " R  O  B  O  T ");

        colored::control::unset_override();
    }

    #[test]
    fn attempts_bar_full_and_empty() {
        assert_eq!(attempts_bar(6, 6), "██████");
        assert_eq!(attempts_bar(0, 6), "░░░░░░");
        assert_eq!(attempts_bar(3, 8), "███░░░░░");
    }

    #[test]
    fn attempts_bar_clamps() {
        assert_eq!(attempts_bar(10, 4), "████");
    }
}
