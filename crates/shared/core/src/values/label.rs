use serde::{Deserialize, Serialize};

/// What stands behind a door
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Prize,
    Decoy,
}

impl Label {
    pub fn is_prize(&self) -> bool {
        matches!(self, Label::Prize)
    }
}
