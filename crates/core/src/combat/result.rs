use crate::types::EntityId;

/// One resolved swing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackResult {
    pub attacker: EntityId,
    pub defender: EntityId,
    /// Damage produced by the formula, before the defender's health clamps it.
    pub damage: i32,
    /// Health the defender actually lost.
    pub absorbed: i32,
    pub critical: bool,
    pub killed: bool,
    pub by_player: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombatOutcome {
    Victory,
    Defeat,
    /// The turn cap was reached with both sides still standing. Grants nothing.
    Interrupted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatResult {
    pub outcome: CombatOutcome,
    pub turns: u32,
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub gold_earned: i32,
    pub experience_earned: i32,
    pub enemies_killed: u32,
    pub bosses_killed: u32,
    pub killed_enemy_ids: Vec<EntityId>,
    pub levels_gained: u32,
}

impl CombatResult {
    pub fn is_victory(&self) -> bool {
        self.outcome == CombatOutcome::Victory
    }

    pub fn is_defeat(&self) -> bool {
        self.outcome == CombatOutcome::Defeat
    }
}
