//! Random sources for the investment simulator
//!
//! The simulator only needs uniform draws in `[0, 1)`. Production code uses
//! the thread-local generator; tests pin the output with [`FixedRandom`] or
//! replay a sequence with [`SeededRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplier of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Thread-local OS-seeded generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic generator for reproducible runs
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(f64);

impl FixedRandom {
    /// Clamps into `[0, 1)`
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { 0.5 } else { value };
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// Midpoint of the range, producing zero fluctuation in the simulator
    pub fn midpoint() -> Self {
        Self(0.5)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
