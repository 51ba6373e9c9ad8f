//! RNG module - random sources for tile spawning
//!
//! Spawning needs two random draws: which empty cell to fill and which value to
//! place. Both go through the [`TileRng`] strategy trait so the engine never
//! touches global random state:
//!
//! - [`SimpleRng`]: seeded LCG for deterministic, reproducible games
//! - [`RandTileRng`]: adapter over any `rand` generator (entropy-seeded play)
//! - [`ScriptedRng`]: fixed draw sequence for tests

use rand::Rng;

/// Source of uniform integer draws used by the spawn policy.
pub trait TileRng {
    /// Uniform integer in `[0, max)`. `max` is always at least 1.
    fn next_range(&mut self, max: u32) -> u32;
}

impl<T: TileRng + ?Sized> TileRng for &mut T {
    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<T: TileRng + ?Sized> TileRng for Box<T> {
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

impl TileRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Adapts any `rand` generator to [`TileRng`].
#[derive(Debug, Clone)]
pub struct RandTileRng<R> {
    inner: R,
}

impl<R: Rng> RandTileRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl RandTileRng<rand::rngs::StdRng> {
    /// Entropy-seeded generator for normal play.
    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self::new(rand::rngs::StdRng::from_entropy())
    }
}

impl<R: Rng> TileRng for RandTileRng<R> {
    fn next_range(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..max)
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// Each draw is reduced modulo the requested range, so scripts stay valid as the
/// number of empty cells shrinks.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    draws: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        let mut draws = draws.into();
        if draws.is_empty() {
            draws.push(0);
        }
        Self { draws, pos: 0 }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl TileRng for ScriptedRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let v = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        v % max
    }
}
