//! Command implementations

pub mod check;
pub mod play;
pub mod score;
pub mod tiers;

pub use check::{CheckResult, check_word};
pub use play::run_play;
pub use score::score_guess;
pub use tiers::{TierSummary, summarize_tiers};
