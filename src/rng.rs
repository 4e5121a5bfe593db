//! Seeded randomness for cosmetic attributes.
//!
//! Entity counts and energy subtypes are derived deterministically from the
//! state; only pixel jitter, phase offsets, fauna colors, and particle spawn
//! rolls come from this source. Injecting a fixed seed makes regeneration and
//! spawning bit-reproducible in tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct VisualRng {
    inner: ChaCha8Rng,
}

impl VisualRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        self.inner.gen::<f32>() * (max - min) + min
    }

    /// Bernoulli roll.
    pub fn chance(&mut self, probability: f32) -> bool {
        self.inner.gen::<f32>() < probability
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.inner.gen_range(0..items.len());
        &items[index]
    }
}

impl Default for VisualRng {
    fn default() -> Self {
        Self::new(42)
    }
}
