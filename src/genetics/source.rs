//! Injected numeric sources used to fill in omitted thresholds and weights.

use super::codec;
use crate::error::{NetError, Result};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Supplies integers for network generation
pub trait NumericSource {
    fn next_value(&mut self) -> i32;
}

impl<F> NumericSource for F
where
    F: FnMut() -> i32,
{
    fn next_value(&mut self) -> i32 {
        self()
    }
}

/// Inclusive range random values are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRange {
    pub min: i32,
    pub max: i32,
}

impl Default for GenerationRange {
    /// `[-10, 10]`, a margin inside the codec's `[-15, 15]`
    fn default() -> Self {
        Self { min: -10, max: 10 }
    }
}

impl GenerationRange {
    /// Create a range, rejecting bounds the codec cannot represent
    pub fn new(min: i32, max: i32) -> Result<Self> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        codec::check_range(self.min)?;
        codec::check_range(self.max)?;
        if self.min > self.max {
            return Err(NetError::OutOfRange {
                value: i64::from(self.min),
                min: codec::MIN_VALUE,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Uniform integer source backed by a seeded ChaCha RNG
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: ChaCha8Rng,
    range: GenerationRange,
    seed: u64,
}

impl UniformSource {
    /// Create a reproducible source
    pub fn new(range: GenerationRange, seed: u64) -> Result<Self> {
        range.validate()?;
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            range,
            seed,
        })
    }

    /// Create a source with a seed taken from the thread RNG
    pub fn from_entropy(range: GenerationRange) -> Result<Self> {
        let seed = rand::thread_rng().gen();
        Self::new(range, seed)
    }

    /// Seed this source was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn range(&self) -> GenerationRange {
        self.range
    }
}

impl NumericSource for UniformSource {
    fn next_value(&mut self) -> i32 {
        self.rng.gen_range(self.range.min..=self.range.max)
    }
}
