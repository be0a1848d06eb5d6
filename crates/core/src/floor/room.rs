use std::mem;

use crate::entities::{Enemy, Item};
use crate::error::{GameError, GameResult};
use crate::types::{EntityId, RoomType};

/// One location on a floor. Owns its enemies and items outright.
#[derive(Clone, Debug, PartialEq)]
pub struct Room {
    id: EntityId,
    room_type: RoomType,
    floor_number: u32,
    index: usize,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    visited: bool,
    cleared: bool,
}

impl Room {
    pub fn new(id: EntityId, room_type: RoomType, floor_number: u32, index: usize) -> Self {
        Self {
            id,
            room_type,
            floor_number,
            index,
            enemies: Vec::new(),
            items: Vec::new(),
            visited: false,
            cleared: false,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn floor_number(&self) -> u32 {
        self.floor_number
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub(crate) fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn alive_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|enemy| enemy.is_alive())
    }

    pub fn has_alive_enemies(&self) -> bool {
        self.enemies.iter().any(Enemy::is_alive)
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: &EntityId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn take_item(&mut self, id: &EntityId) -> GameResult<Item> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| GameError::argument(format!("{id} is not in room {}", self.id)))?;
        Ok(self.items.remove(index))
    }

    pub fn take_all_items(&mut self) -> Vec<Item> {
        mem::take(&mut self.items)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    pub fn visit(&mut self) {
        self.visited = true;
    }

    pub fn mark_cleared(&mut self) {
        self.cleared = true;
    }
}
