use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, GameResult};

/// One of the three doors on stage
///
/// Doors are purely positional. The numeric identifiers shown to players
/// are 1, 2 and 3; `index()` gives the zero-based equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Door {
    D1,
    D2,
    D3,
}

impl Door {
    /// Every door, in stage order
    pub const ALL: [Door; 3] = [Door::D1, Door::D2, Door::D3];

    /// Number of doors in the game
    pub const COUNT: usize = 3;

    /// Numeric identifier (1..=3)
    pub fn number(&self) -> u8 {
        match self {
            Door::D1 => 1,
            Door::D2 => 2,
            Door::D3 => 3,
        }
    }

    /// Zero-based position (0..=2)
    pub fn index(&self) -> usize {
        self.number() as usize - 1
    }

    /// Parse a numeric identifier, rejecting anything outside 1..=3
    pub fn from_number(number: u8) -> GameResult<Self> {
        match number {
            1 => Ok(Door::D1),
            2 => Ok(Door::D2),
            3 => Ok(Door::D3),
            other => Err(GameError::InvalidArgument(format!(
                "door identifier must be 1, 2 or 3, got {}",
                other
            ))),
        }
    }

    /// Door at a zero-based position
    pub fn from_index(index: usize) -> GameResult<Self> {
        Door::ALL.get(index).copied().ok_or_else(|| {
            GameError::InvalidArgument(format!("door index must be 0, 1 or 2, got {}", index))
        })
    }

    /// The two doors that are not this one
    pub fn others(&self) -> [Door; 2] {
        match self {
            Door::D1 => [Door::D2, Door::D3],
            Door::D2 => [Door::D1, Door::D3],
            Door::D3 => [Door::D1, Door::D2],
        }
    }
}

impl TryFrom<u8> for Door {
    type Error = GameError;

    fn try_from(number: u8) -> GameResult<Self> {
        Door::from_number(number)
    }
}

impl From<Door> for u8 {
    fn from(door: Door) -> Self {
        door.number()
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "door {}", self.number())
    }
}
