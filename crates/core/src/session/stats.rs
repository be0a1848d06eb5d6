use serde::{Deserialize, Serialize};

use crate::combat::{CombatOutcome, CombatResult};

/// Counters accumulated over one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStatistics {
    pub rooms_visited: u32,
    pub rooms_cleared: u32,
    pub floors_completed: u32,
    pub deepest_floor: u32,
    pub combats_won: u32,
    pub combats_interrupted: u32,
    pub combat_turns: u32,
    pub enemies_killed: u32,
    pub bosses_killed: u32,
    pub damage_dealt: i64,
    pub damage_taken: i64,
    pub gold_earned: i64,
    pub gold_spent: i64,
    pub experience_earned: i64,
    pub levels_gained: u32,
    pub items_collected: u32,
    pub items_purchased: u32,
    pub items_used: u32,
    pub times_rested: u32,
    pub health_restored: i64,
}

impl RunStatistics {
    pub fn record_combat(&mut self, result: &CombatResult) {
        self.combat_turns += result.turns;
        self.damage_dealt += i64::from(result.damage_dealt);
        self.damage_taken += i64::from(result.damage_taken);
        self.enemies_killed += result.enemies_killed;
        self.bosses_killed += result.bosses_killed;
        self.gold_earned += i64::from(result.gold_earned);
        self.experience_earned += i64::from(result.experience_earned);
        self.levels_gained += result.levels_gained;
        match result.outcome {
            CombatOutcome::Victory => self.combats_won += 1,
            CombatOutcome::Interrupted => self.combats_interrupted += 1,
            CombatOutcome::Defeat => {}
        }
    }
}
