//! Rooms and the cursor-driven floor that orders them.

mod room;

pub use room::Room;

use crate::error::{GameError, GameResult};
use crate::types::{EntityId, Rarity, RoomType};

/// One dungeon level: a fixed, non-empty sequence of rooms and a cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct Floor {
    id: EntityId,
    number: u32,
    rooms: Vec<Room>,
    cursor: usize,
    completed: bool,
}

impl Floor {
    pub fn new(id: EntityId, number: u32, rooms: Vec<Room>) -> GameResult<Self> {
        if number == 0 {
            return Err(GameError::argument("floor numbers start at 1"));
        }
        if rooms.is_empty() {
            return Err(GameError::argument(format!("floor {number} needs at least one room")));
        }
        Ok(Self { id, number, rooms, cursor: 0, completed: false })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn room(&self, index: usize) -> GameResult<&Room> {
        self.rooms.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn room_mut(&mut self, index: usize) -> GameResult<&mut Room> {
        if index >= self.rooms.len() {
            return Err(self.out_of_range(index));
        }
        Ok(&mut self.rooms[index])
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_room(&self) -> &Room {
        &self.rooms[self.cursor]
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.cursor]
    }

    pub fn entrance(&self) -> &Room {
        &self.rooms[0]
    }

    pub fn exit(&self) -> &Room {
        &self.rooms[self.rooms.len() - 1]
    }

    pub fn boss_room(&self) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_type() == RoomType::Boss)
    }

    pub fn has_next_room(&self) -> bool {
        self.cursor + 1 < self.rooms.len()
    }

    pub fn has_previous_room(&self) -> bool {
        self.cursor > 0
    }

    pub fn is_at_entrance(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_exit(&self) -> bool {
        self.cursor == self.rooms.len() - 1
    }

    pub fn advance_to_next_room(&mut self) -> GameResult<&mut Room> {
        if !self.has_next_room() {
            return Err(GameError::state(format!("already at the exit of floor {}", self.number)));
        }
        self.cursor += 1;
        Ok(self.current_room_mut())
    }

    pub fn return_to_previous_room(&mut self) -> GameResult<&mut Room> {
        if !self.has_previous_room() {
            return Err(GameError::state(format!(
                "already at the entrance of floor {}",
                self.number
            )));
        }
        self.cursor -= 1;
        Ok(self.current_room_mut())
    }

    /// True when every combat and boss room has been cleared.
    pub fn all_combat_rooms_cleared(&self) -> bool {
        self.rooms
            .iter()
            .filter(|room| room.room_type().requires_clearing())
            .all(Room::is_cleared)
    }

    pub fn count_rooms(&self, room_type: RoomType) -> usize {
        self.rooms.iter().filter(|room| room.room_type() == room_type).count()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Stable byte encoding of the generated layout: room types, enemy
    /// compositions, and item compositions in order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.number.to_le_bytes());
        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.push(room.room_type() as u8);
            bytes.extend((room.enemies().len() as u32).to_le_bytes());
            for enemy in room.enemies() {
                bytes.push(enemy.kind() as u8);
                bytes.extend(enemy.health().maximum().to_le_bytes());
                bytes.extend(enemy.stats().total_attack().to_le_bytes());
                bytes.extend(enemy.stats().total_defense().to_le_bytes());
            }
            bytes.extend((room.items().len() as u32).to_le_bytes());
            for item in room.items() {
                bytes.push(item.item_type as u8);
                bytes.push(item.rarity as u8);
                bytes.extend(item.attack_bonus.to_le_bytes());
                bytes.extend(item.defense_bonus.to_le_bytes());
                bytes.extend(item.heal_amount.to_le_bytes());
                bytes.extend(item.value.to_le_bytes());
                bytes.extend(item.name.as_bytes());
            }
        }
        bytes
    }

    /// Highest rarity present anywhere on the floor.
    pub fn best_rarity(&self) -> Option<Rarity> {
        self.rooms.iter().flat_map(|room| room.items()).map(|item| item.rarity).max()
    }

    fn out_of_range(&self, index: usize) -> GameError {
        GameError::argument(format!(
            "room index {index} is outside floor {} with {} rooms",
            self.number,
            self.rooms.len()
        ))
    }
}
