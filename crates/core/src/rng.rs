//! RNG module - explicit randomness for gem selection
//!
//! The board never touches a process-global generator. Every random draw goes
//! through a [`RandomSource`] owned by the board, so the driver seeds it once and
//! tests can substitute a fixed sequence for deterministic replay.

use crate::types::Gem;

/// A source of uniform random integers.
pub trait RandomSource {
    /// Generate a value in `[0, max)`. `max` is always non-zero.
    fn next_range(&mut self, max: u32) -> u32;

    /// Draw uniformly over every gem, `Empty` included
    fn any_gem(&mut self) -> Gem {
        Gem::ALL[self.next_range(Gem::COUNT) as usize]
    }

    /// Draw uniformly over the non-empty gems
    fn filled_gem(&mut self) -> Gem {
        Gem::ALL[1 + self.next_range(Gem::COUNT - 1) as usize]
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; scale from the high bits instead of `% max`.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced with `% max`, so callers can write the gem tag they want
/// (`1` = Fire, `2` = Water, ...) for `any_gem` draws.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }

    /// Number of draws served so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % max
    }
}
