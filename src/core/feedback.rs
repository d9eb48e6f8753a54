//! Per-letter guess feedback and the scoring algorithm
//!
//! Each position of a guess receives one of three scores:
//! - `Exact`   (green): right letter, right position
//! - `Present` (yellow): letter occurs elsewhere in the target
//! - `Absent`  (gray): no remaining credit for the letter

use super::Word;
use std::fmt;

/// Score for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Exact,
    Present,
    Absent,
}

impl LetterScore {
    /// Emoji square used for sharing and plain-text display
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one score per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterScore>);

impl Feedback {
    /// Feedback of the given length with every letter `Absent`
    #[must_use]
    pub fn all_absent(len: usize) -> Self {
        Self(vec![LetterScore::Absent; len])
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. Count every letter of the target
    /// 2. First pass: mark exact matches and remove them from the pool
    /// 3. Second pass, left to right: mark present letters while the pool has
    ///    credit for them, everything else is absent
    ///
    /// # Examples
    /// ```
    /// use tiered_wordle::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let target = Word::new("speed").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟨⬜⬜🟨🟨");
    /// assert_eq!(feedback.scores()[0], LetterScore::Present);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target lengths differ");

        let mut remaining = target.letter_counts();
        let guess = guess.letters();
        let target = target.letters();
        let mut scores = vec![LetterScore::Absent; guess.len()];

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                scores[i] = LetterScore::Exact;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters, earlier positions first
        for (score, letter) in scores.iter_mut().zip(guess) {
            if *score == LetterScore::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                *score = LetterScore::Present;
                *count -= 1;
            }
        }

        Self(scores)
    }

    /// The per-letter scores in guess order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.0
    }

    /// True when every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Exact).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Present).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterScore::{Absent, Exact, Present};

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = score("fghij", "abcde");
        assert_eq!(feedback.scores(), &[Absent; 5]);
        assert_eq!(feedback, Feedback::all_absent(5));
        assert_eq!(feedback.count_exact(), 0);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_all_exact() {
        let feedback = score("crane", "crane");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.count_exact(), 5);
    }

    #[test]
    fn feedback_duplicate_guess_letters_budgeted() {
        // SPEED has two E's, ERASE guesses two E's and one S
        let feedback = score("erase", "speed");
        assert_eq!(
            feedback.scores(),
            &[Present, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_duplicate_letters_reverse() {
        let feedback = score("speed", "erase");
        assert_eq!(
            feedback.scores(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_exact_takes_priority_over_earlier_present() {
        // Only one E in CRANE; the exact E at the end wins over the earlier E's
        let feedback = score("eerie", "crane");
        assert_eq!(
            feedback.scores(),
            &[Absent, Absent, Present, Absent, Exact]
        );
    }

    #[test]
    fn feedback_earlier_position_gets_present() {
        let feedback = score("llama", "hello");
        assert_eq!(
            feedback.scores(),
            &[Present, Present, Absent, Absent, Absent]
        );

        // Only one O left after the exact match
        let feedback = score("robot", "floor");
        assert_eq!(
            feedback.scores(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn feedback_single_target_letter_credited_once() {
        let feedback = score("aaa", "cat");
        assert_eq!(feedback.scores(), &[Absent, Exact, Absent]);

        let feedback = score("aaaaa", "bread");
        assert_eq!(feedback.count_exact() + feedback.count_present(), 1);
    }

    #[test]
    fn feedback_credit_never_exceeds_target_count() {
        let pairs = [
            ("erase", "speed"),
            ("geese", "eerie"),
            ("sassy", "assas"),
            ("banana", "ananas"),
            ("committee", "toffeeeee"),
            ("mississippi", "psimississi"),
        ];

        for (guess, target) in pairs {
            let g = Word::new(guess).unwrap();
            let t = Word::new(target).unwrap();
            let feedback = Feedback::calculate(&g, &t);
            let target_counts = t.letter_counts();

            for (&letter, &available) in &target_counts {
                let credited = g
                    .letters()
                    .iter()
                    .zip(feedback.scores())
                    .filter(|&(&l, &s)| l == letter && s != Absent)
                    .count();
                assert!(
                    credited <= available,
                    "{guess} vs {target}: letter {} credited {credited} times",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn feedback_long_words() {
        let feedback = score("encyclopedia", "encyclopedia");
        assert!(feedback.is_perfect());
        assert_eq!(feedback.scores().len(), 12);
    }

    #[test]
    fn feedback_many_repeated_letters() {
        let long = "a".repeat(300);
        let word = Word::new(&long).unwrap();
        assert_eq!(word.letter_counts().get(&b'A'), Some(&300));
        assert!(score(&long, &long).is_perfect());

        let mut guess = "b".repeat(299);
        guess.push('a');
        let feedback = score(&guess, &long);
        assert_eq!(feedback.count_exact(), 1);
        assert_eq!(feedback.count_present(), 0);
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(score("robot", "floor").to_emoji(), "🟨🟨⬜🟩⬜");
        assert_eq!(format!("{}", score("cat", "cat")), "🟩🟩🟩");
    }
}
