//! The single seeded entropy source for the whole core.
//!
//! Every random decision (generation, crit rolls, loot) is drawn from one
//! `GameRng` owned by the dungeon. Draw order is part of the contract: the
//! same seed and the same call sequence always reproduce the same values.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

use crate::error::{GameError, GameResult};

const DOUBLE_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

#[derive(Clone, Debug)]
pub struct GameRng {
    seed: u64,
    inner: ChaCha8Rng,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self { seed, inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `[0, bound)`.
    pub fn next_int(&mut self, bound: u32) -> GameResult<u32> {
        if bound == 0 {
            return Err(GameError::argument("next_int bound must be positive"));
        }
        Ok(self.below(u64::from(bound)) as u32)
    }

    /// Uniform value in `[min, max]`, both ends inclusive.
    pub fn next_int_in_range(&mut self, min: i32, max: i32) -> GameResult<i32> {
        if min > max {
            return Err(GameError::argument(format!("range min {min} exceeds max {max}")));
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = self.below(span) as i64;
        Ok((i64::from(min) + offset) as i32)
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next_double(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * DOUBLE_SCALE
    }

    /// Bernoulli trial. Certain outcomes do not consume entropy.
    pub fn chance(&mut self, probability: f64) -> bool {
        if probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.next_double() < probability
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> GameResult<&'a T> {
        if items.is_empty() {
            return Err(GameError::argument("cannot pick from an empty collection"));
        }
        let index = self.below(items.len() as u64) as usize;
        Ok(&items[index])
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }

    // Rejection sampling keeps the result unbiased for bounds that do not
    // divide 2^64.
    fn below(&mut self, bound: u64) -> u64 {
        debug_assert!(bound > 0);
        let rejected = (u64::MAX % bound + 1) % bound;
        loop {
            let value = self.inner.next_u64();
            if rejected == 0 || value < rejected.wrapping_neg() {
                return value % bound;
            }
        }
    }
}
