use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    Initializing,
    Exploring,
    InCombat,
    InShop,
    AtRest,
    InInventory,
    InEvent,
    RunEnded,
    Paused,
}

impl SessionState {
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Initializing | Self::RunEnded)
    }

    /// States from which carried items may be used or equipped.
    pub fn allows_item_use(self) -> bool {
        matches!(self, Self::Exploring | Self::AtRest | Self::InShop | Self::InInventory)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunEndReason {
    Victory,
    PlayerDeath,
    Abandoned,
}
