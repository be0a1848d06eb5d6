//! The dungeon: lazily generated floors, the floor pointer, and the win boundary.

use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::floor::{Floor, Room};
use crate::mapgen::{DungeonConfig, FloorGenerator};
use crate::rng::GameRng;

/// Owns the run's only RNG and every floor generated so far.
///
/// Floors are contiguous from 1, so the cache is a vector indexed by
/// `number - 1`.
pub struct Dungeon {
    seed: u64,
    rng: GameRng,
    generator: FloorGenerator,
    floors: Vec<Floor>,
    current_floor: u32,
    deepest_floor: u32,
}

impl Dungeon {
    pub fn new(seed: u64, config: DungeonConfig) -> GameResult<Self> {
        Self::with_enemy_multiplier(seed, config, 1.0)
    }

    /// Validates `config` and generates floor 1.
    pub fn with_enemy_multiplier(
        seed: u64,
        config: DungeonConfig,
        enemy_multiplier: f64,
    ) -> GameResult<Self> {
        let mut rng = GameRng::new(seed);
        let mut generator = FloorGenerator::with_enemy_multiplier(config, enemy_multiplier)?;
        let first = generator.generate_floor(&mut rng, 1)?;
        Ok(Self {
            seed,
            rng,
            generator,
            floors: vec![first],
            current_floor: 1,
            deepest_floor: 1,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &DungeonConfig {
        self.generator.config()
    }

    pub fn max_floors(&self) -> u32 {
        self.config().max_floors
    }

    pub fn current_floor_number(&self) -> u32 {
        self.current_floor
    }

    pub fn deepest_floor(&self) -> u32 {
        self.deepest_floor
    }

    pub fn current_floor(&self) -> &Floor {
        &self.floors[self.current_floor as usize - 1]
    }

    pub fn current_floor_mut(&mut self) -> &mut Floor {
        &mut self.floors[self.current_floor as usize - 1]
    }

    pub fn current_room(&self) -> &Room {
        self.current_floor().current_room()
    }

    pub fn current_room_mut(&mut self) -> &mut Room {
        self.current_floor_mut().current_room_mut()
    }

    pub fn floor(&self, number: u32) -> Option<&Floor> {
        self.floors.get((number as usize).checked_sub(1)?)
    }

    pub fn generated_floors(&self) -> impl Iterator<Item = &Floor> {
        self.floors.iter()
    }

    pub fn is_on_final_floor(&self) -> bool {
        self.current_floor >= self.max_floors()
    }

    pub fn is_boss_floor(&self, number: u32) -> bool {
        self.config().is_boss_floor(number)
    }

    /// At the exit, every combat room cleared, and a deeper floor exists.
    pub fn can_descend(&self) -> bool {
        let floor = self.current_floor();
        floor.is_at_exit() && floor.all_combat_rooms_cleared() && !self.is_on_final_floor()
    }

    /// The win condition: the final floor's exit reached with every combat room cleared.
    pub fn is_complete(&self) -> bool {
        let floor = self.current_floor();
        self.is_on_final_floor() && floor.is_at_exit() && floor.all_combat_rooms_cleared()
    }

    pub fn descend_to_next_floor(&mut self) -> GameResult<&mut Floor> {
        if !self.can_descend() {
            return Err(GameError::state(format!(
                "cannot descend from floor {}: exit not reached, rooms uncleared, or final floor",
                self.current_floor
            )));
        }
        let next = self.current_floor + 1;
        if self.floors.len() < next as usize {
            let floor = self.generator.generate_floor(&mut self.rng, next)?;
            self.floors.push(floor);
        }
        self.current_floor_mut().mark_completed();
        self.current_floor = next;
        self.deepest_floor = self.deepest_floor.max(next);
        debug!(floor = next, deepest = self.deepest_floor, "descended");
        Ok(self.current_floor_mut())
    }

    pub fn can_ascend(&self) -> bool {
        self.current_floor > 1 && self.floor(self.current_floor - 1).is_some()
    }

    pub fn ascend_to_previous_floor(&mut self) -> GameResult<&mut Floor> {
        if !self.can_ascend() {
            return Err(GameError::state(format!(
                "cannot ascend from floor {}",
                self.current_floor
            )));
        }
        self.current_floor -= 1;
        debug!(floor = self.current_floor, "ascended");
        Ok(self.current_floor_mut())
    }

    /// Splits the borrow so an encounter can mutate the current room while
    /// drawing from the dungeon's RNG.
    pub(crate) fn encounter_parts(&mut self) -> (&mut Room, &mut GameRng) {
        let floor = &mut self.floors[self.current_floor as usize - 1];
        (floor.current_room_mut(), &mut self.rng)
    }

    #[cfg(test)]
    pub(crate) fn install_floor(&mut self, floor: Floor) {
        *self.current_floor_mut() = floor;
    }
}
