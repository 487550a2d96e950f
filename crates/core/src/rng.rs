//! Seeded pseudo-random source threaded through one generation pass.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub struct DungeonRng {
    inner: ChaCha8Rng,
}

impl DungeonRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform value in `min..=max`.
    pub fn range_inclusive(&mut self, min_value: usize, max_value: usize) -> usize {
        debug_assert!(min_value <= max_value);
        let span = (max_value - min_value) as u128 + 1;
        let scaled = (u128::from(self.next_u64()) * span) >> 64;
        min_value + scaled as usize
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn unit_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    /// Bernoulli trial. Probabilities at or beyond the unit interval's ends
    /// still consume one draw so the stream stays aligned across configs.
    pub fn chance(&mut self, probability: f64) -> bool {
        let roll = self.unit_f64();
        if probability >= 1.0 {
            return true;
        }
        roll < probability
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_with = self.range_inclusive(0, index);
            items.swap(index, swap_with);
        }
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.range_inclusive(0, items.len() - 1);
        items.get(index)
    }
}

/// Derives an independent seed for retry `stream` of a base seed.
pub fn mix_seed_stream(seed: u64, stream: u64) -> u64 {
    let mut mixed = seed ^ stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    mixed ^= mixed >> 33;
    mixed = mixed.wrapping_mul(0xC4CE_B9FE_1A85_EC53);
    mixed ^ (mixed >> 33)
}
