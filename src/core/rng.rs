//! Deterministic random source for strategies.
//!
//! Every random decision a strategy makes draws from this generator, so a
//! seeded session replays identically. The binary seeds from OS entropy
//! unless a seed is given on the command line.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::shape::Shape;

/// Seeded RNG service consumed by the rival strategies.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Return true with the given probability.
    ///
    /// `p <= 0.0` is always false and `p >= 1.0` is always true, so
    /// callers may pass unclamped values.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.inner.gen_bool(p)
    }

    /// Draw a shape uniformly.
    pub fn shape(&mut self) -> Shape {
        Shape::ALL[self.inner.gen_range(0..Shape::ALL.len())]
    }
}
