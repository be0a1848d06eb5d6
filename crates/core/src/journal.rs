use serde::{Deserialize, Serialize};

use crate::mapgen::DungeonConfig;
use crate::session::RunEndReason;
use crate::types::{Difficulty, EntityId, PlayerClass};

pub const JOURNAL_FORMAT_VERSION: u16 = 1;

/// Everything needed to rebuild a run: the setup plus each accepted decision
/// in order. The seed and the decisions fully determine the outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionJournal {
    pub format_version: u16,
    pub seed: u64,
    pub player_name: String,
    pub player_class: PlayerClass,
    pub difficulty: Difficulty,
    pub config: DungeonConfig,
    pub decisions: Vec<DecisionRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub seq: u64,
    pub decision: Decision,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Start,
    AdvanceRoom,
    ReturnRoom,
    DescendFloor,
    ExecuteCombat,
    PurchaseItem { item: EntityId },
    LeaveShop,
    Rest,
    LeaveRest,
    LeaveEvent,
    PickUpItem { item: EntityId },
    UseItem { item: EntityId },
    EquipItem { item: EntityId },
    OpenInventory,
    CloseInventory,
    Pause,
    Resume,
    EndRun { reason: RunEndReason },
}

impl DecisionJournal {
    pub fn new(
        seed: u64,
        player_name: impl Into<String>,
        player_class: PlayerClass,
        difficulty: Difficulty,
        config: DungeonConfig,
    ) -> Self {
        Self {
            format_version: JOURNAL_FORMAT_VERSION,
            seed,
            player_name: player_name.into(),
            player_class,
            difficulty,
            config,
            decisions: Vec::new(),
        }
    }

    /// Records a decision with the next sequence number.
    pub fn append(&mut self, decision: Decision) {
        let seq = self.decisions.len() as u64;
        self.decisions.push(DecisionRecord { seq, decision });
    }

    pub fn len(&self) -> usize {
        self.decisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }
}
