use serde::{Deserialize, Serialize};

/// Strength tier of the computer opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random playable column.
    Easy,
    /// Take an immediate win, else block one, else random.
    #[default]
    Medium,
    /// Medium plus a center-first two-ply favorability check.
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Next tier, wrapping from Hard back to Easy.
    pub fn cycle(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
