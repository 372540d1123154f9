//! Injected randomness for combat resolution.
//!
//! Every random draw the rules make goes through [`CombatRng`], so the same
//! seed (or the same scripted values) always produces the same fight.
//!
//! # Draw order
//!
//! Resolution consumes draws in a fixed order, which replays rely on:
//!
//! 1. Round planning: monster combat-range proposal, monster attack range,
//!    then the negotiation pick (each only when there is a real choice)
//! 2. Per attack: the normal damage sample, then the crit roll
//!
//! An attack rejected by the reach check consumes nothing.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Source of random draws for combat.
pub trait CombatRng {
    /// Sample from a normal distribution.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Uniform integer in `[min, max]` inclusive.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index in `0..len`. Returns 0 when `len <= 1` without drawing.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let max = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.range_inclusive(0, max) as usize
    }
}

/// Seedable generator backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl CombatRng for SeededRng {
    /// Negative or non-finite deviations mean no variance.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if !(std_dev.is_finite() && std_dev >= 0.0) {
            return mean;
        }
        Normal::new(mean, std_dev).map_or(mean, |distribution| {
            distribution.sample(&mut self.inner)
        })
    }

    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.inner.gen_range(min..=max)
    }
}

/// Scripted draws, consumed front to back.
///
/// Used for tests and for replaying a recorded fight. Once a queue runs dry,
/// `normal` returns the mean and integer draws return the lower bound.
/// Scripted integers are clamped into the requested bounds.
#[derive(Clone, Debug, Default)]
pub struct FixedRng {
    normals: VecDeque<f64>,
    integers: VecDeque<u32>,
}

impl FixedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues normal samples.
    #[must_use]
    pub fn with_normals(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.normals.extend(values);
        self
    }

    /// Queues integer draws (crit rolls and choice indices).
    #[must_use]
    pub fn with_integers(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.integers.extend(values);
        self
    }

    pub fn push_normal(&mut self, value: f64) {
        self.normals.push_back(value);
    }

    pub fn push_integer(&mut self, value: u32) {
        self.integers.push_back(value);
    }

    /// Draws still queued, as `(normals, integers)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.normals.len(), self.integers.len())
    }
}

impl CombatRng for FixedRng {
    fn normal(&mut self, mean: f64, _std_dev: f64) -> f64 {
        self.normals.pop_front().unwrap_or(mean)
    }

    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        self.integers
            .pop_front()
            .map_or(min, |value| value.clamp(min, max.max(min)))
    }
}
