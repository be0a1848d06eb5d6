use tracing::debug;

use super::{GameSession, RunEndReason, SessionState};
use crate::combat::{CombatOutcome, CombatResult};
use crate::error::GameResult;

impl GameSession {
    /// Fights the current room's enemies to a conclusion.
    ///
    /// Defeat ends the run. Victory clears the room and returns to
    /// exploration, or ends the run in victory when that was the last
    /// obstacle. An interrupted fight leaves the session in combat.
    pub fn execute_combat(&mut self) -> GameResult<CombatResult> {
        self.require(SessionState::InCombat, "execute_combat")?;
        let (room, rng) = self.dungeon.encounter_parts();
        let result = self.combat.run_combat(&mut self.player, room, rng)?;
        self.bump_tick();

        self.statistics.record_combat(&result);
        self.listener.on_combat_completed(self.dungeon.current_room(), &result);
        let level = self.player.level();
        for reached in (level + 1 - result.levels_gained)..=level {
            self.listener.on_leveled_up(&self.player, reached);
        }
        debug!(outcome = ?result.outcome, turns = result.turns, "encounter resolved");

        match result.outcome {
            CombatOutcome::Defeat => self.end_run(RunEndReason::PlayerDeath),
            CombatOutcome::Victory => {
                self.clear_current_room();
                self.settle_exploring();
            }
            CombatOutcome::Interrupted => {}
        }
        Ok(result)
    }
}
