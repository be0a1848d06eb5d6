//! The run-level state machine that drives a player through the dungeon.
//!
//! `GameSession` owns the player and the dungeon. Every public operation
//! checks the current [`SessionState`] first and fails with `InvalidState`
//! without touching anything when called out of turn. The implementation is
//! split by concern: room traversal, encounters, the shop/rest/inventory
//! services, and snapshot hashing.

mod encounters;
mod hash;
mod listener;
mod navigation;
mod services;
mod state;
mod stats;

pub use listener::{
    NoopListener, RunInfo, SessionListener, SessionListeners, TracingSessionListener,
};
pub use state::{RunEndReason, SessionState};
pub use stats::RunStatistics;

use std::time::SystemTime;

use tracing::{debug, info};

use crate::combat::{CombatEngine, CombatListener};
use crate::dungeon::Dungeon;
use crate::entities::Player;
use crate::error::{GameError, GameResult};
use crate::floor::Room;
use crate::journal::Decision;
use crate::mapgen::DungeonConfig;
use crate::types::{Difficulty, PlayerClass, RoomType};

pub struct GameSession {
    info: RunInfo,
    player: Player,
    dungeon: Dungeon,
    combat: CombatEngine,
    state: SessionState,
    paused_from: Option<SessionState>,
    tick: u64,
    statistics: RunStatistics,
    started_at: Option<SystemTime>,
    ended_at: Option<SystemTime>,
    end_reason: Option<RunEndReason>,
    listener: Box<dyn SessionListener>,
}

impl GameSession {
    /// Builds the player and the first floor. The session waits in
    /// `Initializing` until [`GameSession::start`] is called.
    pub fn new(
        player_name: impl Into<String>,
        class: PlayerClass,
        seed: u64,
        difficulty: Difficulty,
        config: DungeonConfig,
    ) -> GameResult<Self> {
        let player = Player::with_difficulty(player_name, class, difficulty)?;
        let dungeon =
            Dungeon::with_enemy_multiplier(seed, config, difficulty.enemy_stat_multiplier())?;
        let info = RunInfo {
            run_id: format!("run_{seed:016x}"),
            seed,
            difficulty,
            player_name: player.name().to_string(),
            player_class: class,
        };
        let statistics = RunStatistics { deepest_floor: 1, ..RunStatistics::default() };
        Ok(Self {
            info,
            player,
            dungeon,
            combat: CombatEngine::new(difficulty.gold_multiplier()),
            state: SessionState::Initializing,
            paused_from: None,
            tick: 0,
            statistics,
            started_at: None,
            ended_at: None,
            end_reason: None,
            listener: Box::new(NoopListener),
        })
    }

    pub fn set_listener(&mut self, listener: impl SessionListener + 'static) {
        self.listener = Box::new(listener);
    }

    pub fn set_combat_listener(&mut self, listener: impl CombatListener + 'static) {
        self.combat.set_listener(listener);
    }

    pub fn run_info(&self) -> &RunInfo {
        &self.info
    }

    pub fn seed(&self) -> u64 {
        self.info.seed
    }

    pub fn difficulty(&self) -> Difficulty {
        self.info.difficulty
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dungeon(&self) -> &Dungeon {
        &self.dungeon
    }

    pub fn current_room(&self) -> &Room {
        self.dungeon.current_room()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of operations the session has accepted.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn statistics(&self) -> &RunStatistics {
        &self.statistics
    }

    pub fn started_at(&self) -> Option<SystemTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<SystemTime> {
        self.ended_at
    }

    pub fn end_reason(&self) -> Option<RunEndReason> {
        self.end_reason
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Dispatches one journaled decision to the matching operation.
    pub fn apply(&mut self, decision: &Decision) -> GameResult<()> {
        match decision {
            Decision::Start => self.start(),
            Decision::AdvanceRoom => self.advance_room(),
            Decision::ReturnRoom => self.return_room(),
            Decision::DescendFloor => self.descend_floor(),
            Decision::ExecuteCombat => self.execute_combat().map(drop),
            Decision::PurchaseItem { item } => self.purchase_item(item).map(drop),
            Decision::LeaveShop => self.leave_shop(),
            Decision::Rest => self.rest().map(drop),
            Decision::LeaveRest => self.leave_rest(),
            Decision::LeaveEvent => self.leave_event(),
            Decision::PickUpItem { item } => self.pick_up_item(item),
            Decision::UseItem { item } => self.use_item(item).map(drop),
            Decision::EquipItem { item } => self.equip_item(item).map(drop),
            Decision::OpenInventory => self.open_inventory(),
            Decision::CloseInventory => self.close_inventory(),
            Decision::Pause => self.pause(),
            Decision::Resume => self.resume(),
            Decision::EndRun { reason } => {
                self.end_run(*reason);
                Ok(())
            }
        }
    }

    pub fn pause(&mut self) -> GameResult<()> {
        if !self.is_active() || self.state == SessionState::Paused {
            return Err(GameError::state(format!("cannot pause while {:?}", self.state)));
        }
        self.paused_from = Some(self.state);
        self.state = SessionState::Paused;
        self.bump_tick();
        Ok(())
    }

    /// Returns to whichever state was interrupted by [`GameSession::pause`].
    pub fn resume(&mut self) -> GameResult<()> {
        self.require(SessionState::Paused, "resume")?;
        let Some(previous) = self.paused_from.take() else {
            return Err(GameError::state("paused session has no state to resume"));
        };
        self.state = previous;
        self.bump_tick();
        Ok(())
    }

    /// Ends the run. Later calls are ignored, so the first reason sticks.
    pub fn end_run(&mut self, reason: RunEndReason) {
        if self.state == SessionState::RunEnded {
            return;
        }
        self.state = SessionState::RunEnded;
        self.paused_from = None;
        self.end_reason = Some(reason);
        self.ended_at = Some(SystemTime::now());
        self.statistics.deepest_floor = self.dungeon.deepest_floor();
        self.bump_tick();
        info!(?reason, tick = self.tick, floor = self.dungeon.current_floor_number(), "run ended");
        self.listener.on_run_ended(reason, &self.statistics);
    }

    fn require(&self, expected: SessionState, action: &str) -> GameResult<()> {
        if self.state != expected {
            return Err(GameError::state(format!(
                "{action} requires {expected:?}, session is {:?}",
                self.state
            )));
        }
        Ok(())
    }

    fn require_item_use(&self, action: &str) -> GameResult<()> {
        if !self.state.allows_item_use() {
            return Err(GameError::state(format!("cannot {action} while {:?}", self.state)));
        }
        Ok(())
    }

    fn bump_tick(&mut self) {
        self.tick += 1;
    }

    /// Marks the current room visited and moves into the state its type calls for.
    fn enter_current_room(&mut self) {
        let room = self.dungeon.current_room_mut();
        if !room.is_visited() {
            room.visit();
            self.statistics.rooms_visited += 1;
        }
        let room = self.dungeon.current_room();
        debug!(room = %room.id(), kind = ?room.room_type(), "entering room");
        self.listener.on_room_entered(room);
        let (kind, occupied, cleared) =
            (room.room_type(), room.has_alive_enemies(), room.is_cleared());

        match kind {
            RoomType::Combat | RoomType::Boss if occupied => self.state = SessionState::InCombat,
            RoomType::Combat | RoomType::Boss => {
                self.clear_current_room();
                self.settle_exploring();
            }
            RoomType::Shop => self.state = SessionState::InShop,
            RoomType::Rest | RoomType::Event if cleared => self.settle_exploring(),
            RoomType::Rest => self.state = SessionState::AtRest,
            RoomType::Event => self.state = SessionState::InEvent,
            RoomType::Treasure => {
                self.collect_treasure();
                self.clear_current_room();
                self.settle_exploring();
            }
        }
    }

    fn clear_current_room(&mut self) {
        let room = self.dungeon.current_room_mut();
        if room.is_cleared() {
            return;
        }
        room.mark_cleared();
        self.statistics.rooms_cleared += 1;
        self.listener.on_room_cleared(self.dungeon.current_room());
    }

    /// Returns to exploration, ending the run when that completes the dungeon.
    fn settle_exploring(&mut self) {
        self.state = SessionState::Exploring;
        if self.dungeon.is_complete() {
            self.dungeon.current_floor_mut().mark_completed();
            self.statistics.floors_completed += 1;
            self.end_run(RunEndReason::Victory);
        }
    }
}

#[cfg(test)]
mod tests;
