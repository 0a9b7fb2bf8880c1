//! RNG module - uniform random piece generation
//!
//! Every draw is an independent uniform choice among the seven kinds (no bag, repeats
//! allowed). The generator owns its own seeded stream, so two games never share
//! randomness and a fixed seed always replays the same piece sequence.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

/// Seeded uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl PieceGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match PieceKind::ALL.choose(&mut self.rng) {
            Some(kind) => *kind,
            // ALL is a non-empty constant.
            None => PieceKind::I,
        }
    }

    /// Seed this generator was built from, if it was built from one
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_SEED)
    }
}
