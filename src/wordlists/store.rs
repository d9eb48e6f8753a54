//! Tiered word store
//!
//! Holds one set of lowercase words per difficulty tier and answers
//! membership and random-selection queries. A store is immutable once built.

use crate::error::DictionaryError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io::BufRead;

/// Ordered, read-only collection of word tiers
///
/// Tier indices are 1-based: tier 1 is the easiest (most common words).
#[derive(Debug, Clone, Default)]
pub struct WordStore {
    tiers: Vec<FxHashSet<String>>,
}

/// Normalise a dictionary line or query: trimmed and lowercase
fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

fn tier_from_lines<'l>(lines: impl IntoIterator<Item = &'l str>) -> FxHashSet<String> {
    lines
        .into_iter()
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect()
}

impl WordStore {
    /// Build a store from in-memory tier sources, one word per line
    ///
    /// # Examples
    /// ```
    /// use tiered_wordle::wordlists::WordStore;
    ///
    /// let store = WordStore::from_sources(["Apple\n  crane \n\napple", "zebra"]);
    /// assert_eq!(store.tier_count(), 2);
    /// assert_eq!(store.tier_len(1), Some(2));
    /// assert!(store.is_valid_word("ZEBRA"));
    /// ```
    #[must_use]
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiers = sources
            .into_iter()
            .map(|source| tier_from_lines(source.as_ref().lines()))
            .collect();

        Self { tiers }
    }

    /// Build a store from line-delimited readers, one reader per tier
    ///
    /// Lines need not be UTF-8: word lists in legacy encodings such as Latin-1
    /// load with the undecodable bytes replaced, so those entries never match
    /// a guess or become a target.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` naming the 1-based tier whose reader failed.
    pub fn from_readers<I, R>(readers: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = R>,
        R: BufRead,
    {
        let mut tiers = Vec::new();
        let mut line = Vec::new();

        for (i, mut reader) in readers.into_iter().enumerate() {
            let mut tier = FxHashSet::default();
            loop {
                line.clear();
                let read = reader
                    .read_until(b'\n', &mut line)
                    .map_err(|source| DictionaryError::Io { tier: i + 1, source })?;
                if read == 0 {
                    break;
                }
                let word = normalize(&String::from_utf8_lossy(&line));
                if !word.is_empty() {
                    tier.insert(word);
                }
            }
            tiers.push(tier);
        }

        Ok(Self { tiers })
    }

    /// Number of loaded tiers
    #[inline]
    #[must_use]
    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    /// Number of distinct words in a 1-based tier, `None` if out of range
    #[must_use]
    pub fn tier_len(&self, tier_index: usize) -> Option<usize> {
        self.tier(tier_index).ok().map(FxHashSet::len)
    }

    /// Number of words of exactly `word_length` letters in a 1-based tier
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::TierOutOfRange` for an invalid tier index.
    pub fn count_with_length(
        &self,
        tier_index: usize,
        word_length: usize,
    ) -> Result<usize, DictionaryError> {
        Ok(self
            .tier(tier_index)?
            .iter()
            .filter(|w| w.chars().count() == word_length)
            .count())
    }

    /// Check whether a word appears in any tier (case-insensitive)
    ///
    /// Validity does not depend on which tier a target came from: a rare-word
    /// game still accepts common words as guesses.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = normalize(word);
        self.tiers.iter().any(|tier| tier.contains(&word))
    }

    /// 1-based indices of every tier containing the word (case-insensitive)
    #[must_use]
    pub fn tiers_containing(&self, word: &str) -> Vec<usize> {
        let word = normalize(word);
        self.tiers
            .iter()
            .enumerate()
            .filter(|(_, tier)| tier.contains(&word))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Pick a random word of exactly `word_length` letters from a 1-based tier
    ///
    /// Returns `Ok(None)` when the tier has no word of that length.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::TierOutOfRange` unless `1 <= tier_index <= tier_count()`.
    pub fn random_word<R: Rng + ?Sized>(
        &self,
        tier_index: usize,
        word_length: usize,
        rng: &mut R,
    ) -> Result<Option<&str>, DictionaryError> {
        self.random_word_where(tier_index, word_length, rng, |_| true)
    }

    /// Like `random_word`, but only words accepted by `keep` are candidates
    ///
    /// Returns `Ok(None)` when no word of that length passes the filter.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::TierOutOfRange` unless `1 <= tier_index <= tier_count()`.
    pub fn random_word_where<R, F>(
        &self,
        tier_index: usize,
        word_length: usize,
        rng: &mut R,
        keep: F,
    ) -> Result<Option<&str>, DictionaryError>
    where
        R: Rng + ?Sized,
        F: Fn(&str) -> bool,
    {
        let mut candidates: Vec<&str> = self
            .tier(tier_index)?
            .iter()
            .filter(|w| w.chars().count() == word_length)
            .map(String::as_str)
            .filter(|w| keep(*w))
            .collect();

        // Set iteration order is arbitrary; sort so a seeded RNG is reproducible
        candidates.sort_unstable();

        Ok(candidates.choose(rng).copied())
    }

    fn tier(&self, tier_index: usize) -> Result<&FxHashSet<String>, DictionaryError> {
        tier_index
            .checked_sub(1)
            .and_then(|i| self.tiers.get(i))
            .ok_or(DictionaryError::TierOutOfRange {
                index: tier_index,
                count: self.tiers.len(),
            })
    }
}
