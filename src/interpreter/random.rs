//! Randomness for the `?` instruction
//!
//! The interpreter never reaches for a global RNG. It owns a boxed
//! [`DirectionSource`], which production code fills with an entropy-seeded
//! [`RngDirections`] and tests fill with a seeded RNG or a [`ScriptedDirections`].

use super::cursor::Direction;
use rand::distributions::{Distribution, Standard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplier of directions for `?`
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Uniform directions drawn from any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RngDirections<R>(R);

impl<R: Rng> RngDirections<R> {
    pub fn new(rng: R) -> Self {
        RngDirections(rng)
    }
}

impl RngDirections<StdRng> {
    /// Non-deterministic source used for normal runs
    pub fn from_entropy() -> Self {
        RngDirections::new(StdRng::from_entropy())
    }

    /// Reproducible source
    pub fn seeded(seed: u64) -> Self {
        RngDirections::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DirectionSource for RngDirections<R> {
    fn next_direction(&mut self) -> Direction {
        self.0.gen()
    }
}

/// Replays a fixed sequence of directions, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedDirections {
    sequence: Vec<Direction>,
    next: usize,
}

impl ScriptedDirections {
    /// An empty script always yields [`Direction::Right`]
    pub fn new(sequence: Vec<Direction>) -> Self {
        ScriptedDirections { sequence, next: 0 }
    }
}

impl DirectionSource for ScriptedDirections {
    fn next_direction(&mut self) -> Direction {
        if self.sequence.is_empty() {
            return Direction::Right;
        }
        let direction = self.sequence[self.next % self.sequence.len()];
        self.next += 1;
        direction
    }
}
