//! Moving through rooms and floors.

use std::time::SystemTime;

use tracing::{debug, info};

use super::{GameSession, SessionState};
use crate::error::{GameError, GameResult};

impl GameSession {
    /// Leaves `Initializing` and enters room 0 of floor 1.
    pub fn start(&mut self) -> GameResult<()> {
        self.require(SessionState::Initializing, "start")?;
        self.started_at = Some(SystemTime::now());
        self.state = SessionState::Exploring;
        self.bump_tick();
        info!(
            run_id = %self.info.run_id,
            seed = self.info.seed,
            class = ?self.info.player_class,
            difficulty = ?self.info.difficulty,
            "run started"
        );
        self.listener.on_run_started(&self.info, &self.player);
        self.listener.on_floor_entered(self.dungeon.current_floor());
        self.enter_current_room();
        Ok(())
    }

    pub fn advance_room(&mut self) -> GameResult<()> {
        self.require(SessionState::Exploring, "advance_room")?;
        self.dungeon.current_floor_mut().advance_to_next_room()?;
        self.bump_tick();
        self.enter_current_room();
        Ok(())
    }

    pub fn return_room(&mut self) -> GameResult<()> {
        self.require(SessionState::Exploring, "return_room")?;
        self.dungeon.current_floor_mut().return_to_previous_room()?;
        self.bump_tick();
        self.enter_current_room();
        Ok(())
    }

    /// Takes the stairs from a cleared exit to room 0 of the next floor.
    pub fn descend_floor(&mut self) -> GameResult<()> {
        self.require(SessionState::Exploring, "descend_floor")?;
        if !self.dungeon.can_descend() {
            return Err(GameError::state(format!(
                "cannot descend from floor {} yet",
                self.dungeon.current_floor_number()
            )));
        }
        self.dungeon.descend_to_next_floor()?;
        self.statistics.floors_completed += 1;
        self.statistics.deepest_floor = self.dungeon.deepest_floor();
        self.bump_tick();
        debug!(floor = self.dungeon.current_floor_number(), "floor entered");
        self.listener.on_floor_entered(self.dungeon.current_floor());
        self.enter_current_room();
        Ok(())
    }
}
