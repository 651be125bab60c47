use serde::{Deserialize, Serialize};
use std::fmt;

/// The player's decision after the host opens a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the initial pick
    Stay,
    /// Move to the remaining unopened door
    Switch,
}

impl Strategy {
    /// Both strategies, in table row order
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    pub fn stays(&self) -> bool {
        matches!(self, Strategy::Stay)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => f.write_str("stay"),
            Strategy::Switch => f.write_str("switch"),
        }
    }
}
