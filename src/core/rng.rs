//! Deterministic random number generation.
//!
//! The RNG handle is the sole source of nondeterminism in the simulation:
//! dice rolls during combat and the mission draw at setup. It is always
//! passed explicitly (never a process global) so a fixed seed reproduces
//! an entire game.
//!
//! ```
//! use war_sim::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG handle.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy, for interactive play.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::random::<u64>();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a standard six-sided die: uniform over 1..=6.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }

    /// Pick a uniform index in `[0, len)`.
    ///
    /// Panics if `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        self.inner.gen_range(0..len)
    }
}
