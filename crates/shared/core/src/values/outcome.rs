use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a single game for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Both outcomes, in table column order
    pub const ALL: [Outcome; 2] = [Outcome::Win, Outcome::Lose];

    pub fn from_win(won: bool) -> Self {
        if won { Outcome::Win } else { Outcome::Lose }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }

    /// Returns the opposite outcome
    pub fn opposite(&self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.write_str("WIN"),
            Outcome::Lose => f.write_str("LOSE"),
        }
    }
}
