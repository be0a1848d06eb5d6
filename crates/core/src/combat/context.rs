use crate::entities::{Enemy, Player};
use crate::floor::Room;
use crate::types::EntityId;

use super::result::{CombatOutcome, CombatResult};

/// Running tallies for one encounter.
///
/// Borrows the player and the room for exactly one `run_combat` call and is
/// dropped once the result is built.
pub struct CombatContext<'a> {
    pub(super) player: &'a mut Player,
    pub(super) room: &'a mut Room,
    pub(super) turn: u32,
    pub(super) damage_dealt: i32,
    pub(super) damage_taken: i32,
    pub(super) gold_earned: i32,
    pub(super) experience_earned: i32,
    pub(super) killed: Vec<EntityId>,
    pub(super) levels_gained: u32,
}

impl<'a> CombatContext<'a> {
    pub(super) fn new(player: &'a mut Player, room: &'a mut Room) -> Self {
        Self {
            player,
            room,
            turn: 0,
            damage_dealt: 0,
            damage_taken: 0,
            gold_earned: 0,
            experience_earned: 0,
            killed: Vec::new(),
            levels_gained: 0,
        }
    }

    pub fn player(&self) -> &Player {
        self.player
    }

    pub fn room(&self) -> &Room {
        self.room
    }

    pub fn floor(&self) -> u32 {
        self.room.floor_number()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn damage_dealt(&self) -> i32 {
        self.damage_dealt
    }

    pub fn damage_taken(&self) -> i32 {
        self.damage_taken
    }

    pub fn killed_enemy_ids(&self) -> &[EntityId] {
        &self.killed
    }

    pub fn enemies(&self) -> &[Enemy] {
        self.room.enemies()
    }

    pub(super) fn killed_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.room.enemies().iter().filter(|enemy| self.killed.contains(enemy.id()))
    }

    pub(super) fn build_result(&self, outcome: CombatOutcome) -> CombatResult {
        CombatResult {
            outcome,
            turns: self.turn,
            damage_dealt: self.damage_dealt,
            damage_taken: self.damage_taken,
            gold_earned: self.gold_earned,
            experience_earned: self.experience_earned,
            enemies_killed: self.killed.len() as u32,
            bosses_killed: self.killed_enemies().filter(|enemy| enemy.is_boss()).count() as u32,
            killed_enemy_ids: self.killed.clone(),
            levels_gained: self.levels_gained,
        }
    }
}
