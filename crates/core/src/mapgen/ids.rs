use crate::types::EntityId;

/// Hands out deterministic, per-dungeon entity ids such as `room_4` or `rat_12`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdAllocator {
    floors: u64,
    rooms: u64,
    enemies: u64,
    items: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_floor(&mut self) -> EntityId {
        self.floors += 1;
        EntityId::numbered("floor", self.floors)
    }

    pub fn next_room(&mut self) -> EntityId {
        self.rooms += 1;
        EntityId::numbered("room", self.rooms)
    }

    pub fn next_enemy(&mut self, prefix: &str) -> EntityId {
        self.enemies += 1;
        EntityId::numbered(prefix, self.enemies)
    }

    pub fn next_item(&mut self, prefix: &str) -> EntityId {
        self.items += 1;
        EntityId::numbered(prefix, self.items)
    }
}
