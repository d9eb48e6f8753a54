//! Tiered word lists
//!
//! Difficulty tiers are plain-text word lists, one word per line. Tier 1 holds
//! the most common words, tier 6 the rarest.

pub mod loader;
pub mod shared;
mod store;

pub use loader::{TIER_FILES, load_dir, load_files};
pub use store::WordStore;
