//! Procedural floor generation split into config, tables, ids, and population.

pub mod config;
pub mod progression;

mod generator;
mod ids;
mod spawns;

pub use config::DungeonConfig;
pub use generator::FloorGenerator;
pub use ids::IdAllocator;
pub use progression::{rarity_chances, rarity_thresholds};
pub use spawns::RoomContentGenerator;

use crate::error::GameResult;
use crate::floor::Floor;
use crate::rng::GameRng;

/// Generates one floor with a throwaway generator seeded from `seed`.
pub fn generate_floor(seed: u64, floor_number: u32, config: &DungeonConfig) -> GameResult<Floor> {
    let mut rng = GameRng::new(seed);
    FloorGenerator::new(config.clone())?.generate_floor(&mut rng, floor_number)
}
