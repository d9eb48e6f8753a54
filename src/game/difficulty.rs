//! Difficulty levels
//!
//! Each difficulty draws its target words from one dictionary tier.

use std::fmt;
use std::str::FromStr;

/// Game difficulty, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Elite,
    Lunatic,
    Machine,
}

impl Difficulty {
    /// All difficulties in tier order
    pub const ALL: [Self; 6] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::Elite,
        Self::Lunatic,
        Self::Machine,
    ];

    /// 1-based dictionary tier the targets are drawn from
    #[must_use]
    pub const fn tier_index(self) -> usize {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Elite => 4,
            Self::Lunatic => 5,
            Self::Machine => 6,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Elite => "elite",
            Self::Lunatic => "lunatic",
            Self::Machine => "machine",
        }
    }

    /// Look up a difficulty by name (case-insensitive) or tier number
    ///
    /// Supported names: "easy", "medium", "hard", "elite", "lunatic", "machine",
    /// or "1" through "6".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.name() == name || d.tier_index().to_string() == name)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown difficulty '{s}' (expected easy, medium, hard, elite, lunatic or machine)")
        })
    }
}
