//! Floor generation: room count, room-type plan, then per-room population.

use tracing::debug;

use crate::error::GameResult;
use crate::floor::{Floor, Room};
use crate::rng::GameRng;

use super::config::DungeonConfig;
use super::ids::IdAllocator;
use super::progression::plan_room_types;
use super::spawns::RoomContentGenerator;

/// Builds floors from a config and a borrowed RNG.
///
/// The generator never owns entropy: callers lend the dungeon's single
/// `GameRng`, so floor generation interleaves with combat rolls in one
/// canonical stream.
pub struct FloorGenerator {
    config: DungeonConfig,
    content: RoomContentGenerator,
    ids: IdAllocator,
}

impl FloorGenerator {
    pub fn new(config: DungeonConfig) -> GameResult<Self> {
        Self::with_enemy_multiplier(config, 1.0)
    }

    pub fn with_enemy_multiplier(config: DungeonConfig, enemy_multiplier: f64) -> GameResult<Self> {
        config.validate()?;
        let content = RoomContentGenerator::new(config.clone(), enemy_multiplier);
        Ok(Self { config, content, ids: IdAllocator::new() })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn generate_floor(&mut self, rng: &mut GameRng, floor_number: u32) -> GameResult<Floor> {
        let room_count = rng.next_int_in_range(
            self.config.min_rooms_per_floor as i32,
            self.config.max_rooms_per_floor as i32,
        )? as usize;
        let boss_floor = self.config.is_boss_floor(floor_number);
        let plan = plan_room_types(rng, &self.config, room_count, boss_floor);

        let floor_id = self.ids.next_floor();
        let mut rooms = Vec::with_capacity(room_count);
        for (index, room_type) in plan.into_iter().enumerate() {
            let mut room = Room::new(self.ids.next_room(), room_type, floor_number, index);
            self.content.populate(&mut room, rng, &mut self.ids)?;
            rooms.push(room);
        }

        let floor = Floor::new(floor_id, floor_number, rooms)?;
        debug!(
            floor = floor_number,
            rooms = floor.room_count(),
            boss_floor,
            "generated floor"
        );
        Ok(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoomType;
    use proptest::prelude::*;
    use xxhash_rust::xxh3::xxh3_64;

    fn generate(seed: u64, floors: u32, config: &DungeonConfig) -> Vec<Floor> {
        let mut rng = GameRng::new(seed);
        let mut generator = FloorGenerator::new(config.clone()).unwrap();
        (1..=floors).map(|number| generator.generate_floor(&mut rng, number).unwrap()).collect()
    }

    #[test]
    fn same_seed_produces_identical_floors() {
        let config = DungeonConfig::standard();
        let left = generate(88_001, 6, &config);
        let right = generate(88_001, 6, &config);
        assert_eq!(left, right);
        for (a, b) in left.iter().zip(&right) {
            assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        }
    }

    #[test]
    fn different_seeds_usually_diverge() {
        let config = DungeonConfig::standard();
        let fingerprints: Vec<u64> = (0..8)
            .map(|seed| xxh3_64(&generate(seed, 1, &config)[0].canonical_bytes()))
            .collect();
        let mut unique = fingerprints.clone();
        unique.sort_unstable();
        unique.dedup();
        assert!(unique.len() > 4, "expected varied layouts, got {fingerprints:?}");
    }

    #[test]
    fn floor_fingerprints_are_stable_within_a_process() {
        let config = DungeonConfig::hard();
        for seed in [11_u64, 2_024, 77_777, 909_090] {
            let first: Vec<u64> =
                generate(seed, 5, &config).iter().map(|f| xxh3_64(&f.canonical_bytes())).collect();
            let second: Vec<u64> =
                generate(seed, 5, &config).iter().map(|f| xxh3_64(&f.canonical_bytes())).collect();
            assert_eq!(first, second, "seed={seed}");
        }
    }

    #[test]
    fn room_ids_are_unique_across_floors() {
        let floors = generate(5, 4, &DungeonConfig::standard());
        let mut ids: Vec<String> = floors
            .iter()
            .flat_map(|floor| floor.rooms().iter().map(|room| room.id().to_string()))
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn invalid_config_is_rejected_before_generation() {
        let config = DungeonConfig { min_rooms_per_floor: 9, max_rooms_per_floor: 2, ..DungeonConfig::standard() };
        assert!(FloorGenerator::new(config).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_floors_hold_structural_invariants(
            seed in any::<u64>(),
            interval in 1_u32..=4,
            floors in 1_u32..=8
        ) {
            let config = DungeonConfig { boss_floor_interval: interval, ..DungeonConfig::standard() };
            for floor in generate(seed, floors, &config) {
                let count = floor.room_count() as u32;
                prop_assert!((config.min_rooms_per_floor..=config.max_rooms_per_floor).contains(&count));
                prop_assert_eq!(floor.entrance().room_type(), if count == 1 && config.is_boss_floor(floor.number()) { RoomType::Boss } else { RoomType::Combat });
                prop_assert_eq!(floor.boss_room().is_some(), config.is_boss_floor(floor.number()));
                prop_assert!(floor.count_rooms(RoomType::Boss) <= 1);
                for room in floor.rooms() {
                    if room.room_type() == RoomType::Combat {
                        let enemies = room.enemies().len() as u32;
                        prop_assert!((config.min_enemies_per_room..=config.max_enemies_per_room).contains(&enemies));
                    }
                }
            }
        }
    }
}
