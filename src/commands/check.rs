//! Word lookup command
//!
//! Reports whether a word is accepted as a guess and which tiers contain it.

use crate::game::Difficulty;
use crate::wordlists::WordStore;

/// Result of looking up a word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Difficulties whose tier contains the word, easiest first
    pub difficulties: Vec<Difficulty>,
}

/// Look up a word in every tier of the store
#[must_use]
pub fn check_word(store: &WordStore, word: &str) -> CheckResult {
    let difficulties = store
        .tiers_containing(word)
        .into_iter()
        .filter_map(|tier| Difficulty::ALL.get(tier - 1).copied())
        .collect();

    CheckResult {
        word: word.trim().to_uppercase(),
        valid: store.is_valid_word(word),
        difficulties,
    }
}
