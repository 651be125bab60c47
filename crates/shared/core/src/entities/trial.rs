use serde::{Deserialize, Serialize};

use crate::entities::GameLayout;
use crate::values::{Door, Outcome, Strategy};

/// Both strategies' outcomes for one playthrough
///
/// The stay and switch outcomes are derived from the same layout,
/// initial pick and revealed door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialResult {
    /// Where the prize was hidden
    pub layout: GameLayout,
    /// Player's first pick
    pub initial_choice: Door,
    /// Door the host opened
    pub revealed: Door,
    /// Outcome when keeping the initial pick
    pub stay: Outcome,
    /// Outcome when moving to the other closed door
    pub switch: Outcome,
}

impl TrialResult {
    pub fn outcome(&self, strategy: Strategy) -> Outcome {
        match strategy {
            Strategy::Stay => self.stay,
            Strategy::Switch => self.switch,
        }
    }

    /// (strategy, outcome) records in table row order
    pub fn records(&self) -> [(Strategy, Outcome); 2] {
        [(Strategy::Stay, self.stay), (Strategy::Switch, self.switch)]
    }

    /// True when the player's first pick was the prize door
    pub fn picked_prize(&self) -> bool {
        self.layout.is_prize(self.initial_choice)
    }
}
