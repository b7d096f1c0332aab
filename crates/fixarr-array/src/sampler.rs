//! Seeded random index source.
//!
//! [`RandomSampler`] is the production [`IndexSource`]. It is seeded once,
//! either from an explicit seed (identical seeds give identical picks) or
//! from OS entropy, and then reused for every draw.

use std::fmt;

use fixarr_core::IndexSource;
use rand::rngs::ChaCha8Rng;
use rand::{RngExt, SeedableRng};

use crate::config::ArrayConfig;

/// Uniform index sampler backed by ChaCha8.
pub struct RandomSampler {
    rng: ChaCha8Rng,
    seed: Option<u64>,
}

impl RandomSampler {
    /// Deterministic sampler for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Sampler seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: rand::make_rng(),
            seed: None,
        }
    }

    /// Sampler for `config.seed`, falling back to entropy when unset.
    pub fn from_config(config: &ArrayConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// The seed this sampler was built with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl IndexSource for RandomSampler {
    /// Uniform index in `0..len`. Returns `0` for `len == 0`, which no
    /// array accepts as an index.
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

impl fmt::Debug for RandomSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSampler")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
