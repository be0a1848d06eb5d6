//! Session observer hooks, the no-op default, fan-out, and a tracing logger.

use tracing::{debug, info};

use crate::combat::CombatResult;
use crate::entities::{Item, Player};
use crate::floor::{Floor, Room};
use crate::types::{Difficulty, PlayerClass};

use super::state::RunEndReason;
use super::stats::RunStatistics;

/// Identity of a run, fixed at session creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunInfo {
    pub run_id: String,
    pub seed: u64,
    pub difficulty: Difficulty,
    pub player_name: String,
    pub player_class: PlayerClass,
}

/// Synchronous, fire-and-forget session observer. Every hook defaults to a no-op.
pub trait SessionListener {
    fn on_run_started(&mut self, _run: &RunInfo, _player: &Player) {}

    fn on_floor_entered(&mut self, _floor: &Floor) {}

    fn on_room_entered(&mut self, _room: &Room) {}

    fn on_room_cleared(&mut self, _room: &Room) {}

    fn on_combat_completed(&mut self, _room: &Room, _result: &CombatResult) {}

    fn on_item_picked(&mut self, _item: &Item) {}

    fn on_item_used(&mut self, _item: &Item, _healed: i32) {}

    fn on_shop_purchase(&mut self, _item: &Item, _cost: i32) {}

    fn on_rested(&mut self, _healed: i32) {}

    fn on_leveled_up(&mut self, _player: &Player, _level: u32) {}

    fn on_run_ended(&mut self, _reason: RunEndReason, _stats: &RunStatistics) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl SessionListener for NoopListener {}

/// Forwards every hook to each registered listener in registration order.
#[derive(Default)]
pub struct SessionListeners {
    listeners: Vec<Box<dyn SessionListener>>,
}

impl SessionListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, listener: impl SessionListener + 'static) -> Self {
        self.push(listener);
        self
    }

    pub fn push(&mut self, listener: impl SessionListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl SessionListener for SessionListeners {
    fn on_run_started(&mut self, run: &RunInfo, player: &Player) {
        self.listeners.iter_mut().for_each(|l| l.on_run_started(run, player));
    }

    fn on_floor_entered(&mut self, floor: &Floor) {
        self.listeners.iter_mut().for_each(|l| l.on_floor_entered(floor));
    }

    fn on_room_entered(&mut self, room: &Room) {
        self.listeners.iter_mut().for_each(|l| l.on_room_entered(room));
    }

    fn on_room_cleared(&mut self, room: &Room) {
        self.listeners.iter_mut().for_each(|l| l.on_room_cleared(room));
    }

    fn on_combat_completed(&mut self, room: &Room, result: &CombatResult) {
        self.listeners.iter_mut().for_each(|l| l.on_combat_completed(room, result));
    }

    fn on_item_picked(&mut self, item: &Item) {
        self.listeners.iter_mut().for_each(|l| l.on_item_picked(item));
    }

    fn on_item_used(&mut self, item: &Item, healed: i32) {
        self.listeners.iter_mut().for_each(|l| l.on_item_used(item, healed));
    }

    fn on_shop_purchase(&mut self, item: &Item, cost: i32) {
        self.listeners.iter_mut().for_each(|l| l.on_shop_purchase(item, cost));
    }

    fn on_rested(&mut self, healed: i32) {
        self.listeners.iter_mut().for_each(|l| l.on_rested(healed));
    }

    fn on_leveled_up(&mut self, player: &Player, level: u32) {
        self.listeners.iter_mut().for_each(|l| l.on_leveled_up(player, level));
    }

    fn on_run_ended(&mut self, reason: RunEndReason, stats: &RunStatistics) {
        self.listeners.iter_mut().for_each(|l| l.on_run_ended(reason, stats));
    }
}

/// Emits one structured `tracing` event per hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSessionListener;

impl SessionListener for TracingSessionListener {
    fn on_run_started(&mut self, run: &RunInfo, player: &Player) {
        info!(
            run_id = %run.run_id,
            seed = run.seed,
            difficulty = ?run.difficulty,
            player = player.name(),
            class = ?run.player_class,
            "run started"
        );
    }

    fn on_floor_entered(&mut self, floor: &Floor) {
        info!(floor = floor.number(), rooms = floor.room_count(), "floor entered");
    }

    fn on_room_entered(&mut self, room: &Room) {
        debug!(
            room = %room.id(),
            kind = ?room.room_type(),
            enemies = room.alive_enemies().count(),
            items = room.items().len(),
            "room entered"
        );
    }

    fn on_room_cleared(&mut self, room: &Room) {
        debug!(room = %room.id(), "room cleared");
    }

    fn on_combat_completed(&mut self, room: &Room, result: &CombatResult) {
        info!(
            room = %room.id(),
            outcome = ?result.outcome,
            turns = result.turns,
            killed = result.enemies_killed,
            gold = result.gold_earned,
            "combat completed"
        );
    }

    fn on_item_picked(&mut self, item: &Item) {
        debug!(item = %item.id, name = %item.name, rarity = ?item.rarity, "item picked");
    }

    fn on_item_used(&mut self, item: &Item, healed: i32) {
        debug!(item = %item.id, healed, "item used");
    }

    fn on_shop_purchase(&mut self, item: &Item, cost: i32) {
        info!(item = %item.id, name = %item.name, cost, "shop purchase");
    }

    fn on_rested(&mut self, healed: i32) {
        debug!(healed, "rested");
    }

    fn on_leveled_up(&mut self, player: &Player, level: u32) {
        info!(player = player.name(), level, max_health = player.health().maximum(), "level up");
    }

    fn on_run_ended(&mut self, reason: RunEndReason, stats: &RunStatistics) {
        info!(
            ?reason,
            deepest = stats.deepest_floor,
            killed = stats.enemies_killed,
            gold = stats.gold_earned,
            "run ended"
        );
    }
}
