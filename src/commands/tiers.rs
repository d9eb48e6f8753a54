//! Dictionary summary command

use crate::game::Difficulty;
use crate::wordlists::WordStore;

/// Word counts for one difficulty tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSummary {
    pub difficulty: Difficulty,
    pub tier: usize,
    /// `None` when the store has no such tier
    pub total_words: Option<usize>,
    pub with_length: Option<usize>,
}

/// Count words per tier, overall and with exactly `word_length` letters
#[must_use]
pub fn summarize_tiers(store: &WordStore, word_length: usize) -> Vec<TierSummary> {
    Difficulty::ALL
        .iter()
        .map(|&difficulty| {
            let tier = difficulty.tier_index();
            TierSummary {
                difficulty,
                tier,
                total_words: store.tier_len(tier),
                with_length: store.count_with_length(tier, word_length).ok(),
            }
        })
        .collect()
}
