//! Dungeon generation parameters, validated eagerly.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Plain generation configuration.
///
/// Build it with named fields (starting from a preset and struct-update
/// syntax) and call [`DungeonConfig::validate`]; `Dungeon::new` validates
/// again before generating anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub max_floors: u32,
    pub min_rooms_per_floor: u32,
    pub max_rooms_per_floor: u32,
    pub min_enemies_per_room: u32,
    pub max_enemies_per_room: u32,
    /// Carried for presentation layers; generation does not roll elites.
    pub elite_spawn_chance: f64,
    pub item_drop_chance: f64,
    pub treasure_room_chance: f64,
    pub shop_room_chance: f64,
    pub rest_room_chance: f64,
    pub boss_floor_interval: u32,
    /// Carried for presentation layers; enemy growth uses fixed per-floor increments.
    pub difficulty_scale_per_floor: f64,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl DungeonConfig {
    pub fn standard() -> Self {
        Self {
            max_floors: 3,
            min_rooms_per_floor: 4,
            max_rooms_per_floor: 6,
            min_enemies_per_room: 1,
            max_enemies_per_room: 3,
            elite_spawn_chance: 0.15,
            item_drop_chance: 0.3,
            treasure_room_chance: 0.15,
            shop_room_chance: 0.1,
            rest_room_chance: 0.25,
            boss_floor_interval: 3,
            difficulty_scale_per_floor: 0.1,
        }
    }

    pub fn easy() -> Self {
        Self {
            max_floors: 2,
            min_rooms_per_floor: 3,
            max_rooms_per_floor: 4,
            min_enemies_per_room: 1,
            max_enemies_per_room: 2,
            elite_spawn_chance: 0.05,
            rest_room_chance: 0.35,
            boss_floor_interval: 2,
            ..Self::standard()
        }
    }

    pub fn hard() -> Self {
        Self {
            max_floors: 5,
            min_rooms_per_floor: 5,
            max_rooms_per_floor: 7,
            min_enemies_per_room: 2,
            max_enemies_per_room: 4,
            elite_spawn_chance: 0.25,
            rest_room_chance: 0.15,
            boss_floor_interval: 2,
            difficulty_scale_per_floor: 0.2,
            ..Self::standard()
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.max_floors == 0 {
            return Err(GameError::argument("max_floors must be at least 1"));
        }
        if self.min_rooms_per_floor == 0 {
            return Err(GameError::argument("min_rooms_per_floor must be at least 1"));
        }
        if self.min_rooms_per_floor > self.max_rooms_per_floor {
            return Err(GameError::argument(format!(
                "min_rooms_per_floor {} exceeds max_rooms_per_floor {}",
                self.min_rooms_per_floor, self.max_rooms_per_floor
            )));
        }
        if self.min_enemies_per_room > self.max_enemies_per_room {
            return Err(GameError::argument(format!(
                "min_enemies_per_room {} exceeds max_enemies_per_room {}",
                self.min_enemies_per_room, self.max_enemies_per_room
            )));
        }
        if self.boss_floor_interval == 0 {
            return Err(GameError::argument("boss_floor_interval must be at least 1"));
        }
        for (name, value) in [
            ("elite_spawn_chance", self.elite_spawn_chance),
            ("item_drop_chance", self.item_drop_chance),
            ("treasure_room_chance", self.treasure_room_chance),
            ("shop_room_chance", self.shop_room_chance),
            ("rest_room_chance", self.rest_room_chance),
            ("difficulty_scale_per_floor", self.difficulty_scale_per_floor),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GameError::argument(format!("{name} {value} is outside [0, 1]")));
            }
        }
        let special = self.treasure_room_chance + self.shop_room_chance + self.rest_room_chance;
        if special > 1.0 {
            return Err(GameError::argument(format!(
                "treasure, shop, and rest chances sum to {special}, above 1"
            )));
        }
        Ok(())
    }

    pub fn is_boss_floor(&self, floor_number: u32) -> bool {
        floor_number > 0 && floor_number % self.boss_floor_interval == 0
    }
}
