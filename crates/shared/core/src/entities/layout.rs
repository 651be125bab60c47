use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::values::{Door, Label};

/// Assignment of one prize and two decoys to the three doors
///
/// Only the prize position is stored, so a layout with zero or several
/// prizes cannot be represented. Arbitrary label arrays go through
/// [`GameLayout::new`], which rejects malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Label; 3]", into = "[Label; 3]")]
pub struct GameLayout {
    prize: Door,
}

impl GameLayout {
    /// Build a layout from per-door labels (index 0 = door 1)
    pub fn new(labels: [Label; 3]) -> GameResult<Self> {
        let prizes: Vec<Door> = Door::ALL
            .into_iter()
            .filter(|door| labels[door.index()].is_prize())
            .collect();

        match prizes.as_slice() {
            [prize] => Ok(Self { prize: *prize }),
            _ => Err(GameError::InvalidArgument(format!(
                "layout must hold exactly one prize among three doors, found {}",
                prizes.len()
            ))),
        }
    }

    /// Build a layout from a label slice of any length
    pub fn from_labels(labels: &[Label]) -> GameResult<Self> {
        let labels: [Label; 3] = labels.try_into().map_err(|_| {
            GameError::InvalidArgument(format!(
                "layout must cover exactly {} doors, got {}",
                Door::COUNT,
                labels.len()
            ))
        })?;
        Self::new(labels)
    }

    /// Layout with the prize behind the given door
    pub fn with_prize_behind(prize: Door) -> Self {
        Self { prize }
    }

    pub fn prize_door(&self) -> Door {
        self.prize
    }

    /// The two decoy doors, in stage order
    pub fn decoy_doors(&self) -> [Door; 2] {
        self.prize.others()
    }

    pub fn is_prize(&self, door: Door) -> bool {
        door == self.prize
    }

    pub fn label(&self, door: Door) -> Label {
        if self.is_prize(door) {
            Label::Prize
        } else {
            Label::Decoy
        }
    }

    /// Per-door labels (index 0 = door 1)
    pub fn labels(&self) -> [Label; 3] {
        Door::ALL.map(|door| self.label(door))
    }
}

impl TryFrom<[Label; 3]> for GameLayout {
    type Error = GameError;

    fn try_from(labels: [Label; 3]) -> GameResult<Self> {
        GameLayout::new(labels)
    }
}

impl From<GameLayout> for [Label; 3] {
    fn from(layout: GameLayout) -> Self {
        layout.labels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Label::{Decoy, Prize};

    #[test]
    fn test_valid_layout() {
        let layout = GameLayout::new([Decoy, Prize, Decoy]).unwrap();
        assert_eq!(layout.prize_door(), Door::D2);
        assert_eq!(layout.decoy_doors(), [Door::D1, Door::D3]);
        assert_eq!(layout.labels(), [Decoy, Prize, Decoy]);
    }

    #[test]
    fn test_layout_without_prize_rejected() {
        let err = GameLayout::new([Decoy, Decoy, Decoy]).unwrap_err();
        assert!(matches!(err, GameError::InvalidArgument(_)));
    }

    #[test]
    fn test_layout_with_two_prizes_rejected() {
        assert!(matches!(
            GameLayout::new([Prize, Prize, Decoy]),
            Err(GameError::InvalidArgument(_))
        ));
        assert!(matches!(
            GameLayout::new([Prize, Prize, Prize]),
            Err(GameError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wrong_door_count_rejected() {
        assert!(GameLayout::from_labels(&[Prize, Decoy]).is_err());
        assert!(GameLayout::from_labels(&[Prize, Decoy, Decoy, Decoy]).is_err());
        assert!(GameLayout::from_labels(&[Decoy, Decoy, Prize]).is_ok());
    }

    #[test]
    fn test_serde_validates_labels() {
        let layout = GameLayout::with_prize_behind(Door::D3);
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"["Decoy","Decoy","Prize"]"#);

        let parsed: GameLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, layout);

        let malformed: Result<GameLayout, _> = serde_json::from_str(r#"["Prize","Prize","Decoy"]"#);
        assert!(malformed.is_err());
    }
}
