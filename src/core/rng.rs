//! Random sources for shuffling, cutting and random insertion.
//!
//! ## Key Features
//!
//! - **Pluggable**: every deck operation that needs randomness takes a
//!   [`RandomSource`], and every `rand::RngCore` is one
//! - **Deterministic**: [`DeckRng`] with the same seed produces the same
//!   sequence, so shuffles are reproducible
//! - **Forkable**: independent branches for dealing several tables from one seed
//! - **Checkpointable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rust_deck::core::{DeckRng, RandomSource};
//!
//! let mut rng = DeckRng::new(42);
//! let mut again = DeckRng::new(42);
//!
//! // Same seed, same draws.
//! assert_eq!(rng.next_index(0, 52), again.next_index(0, 52));
//!
//! // A fork is a different but deterministic stream.
//! let mut table = rng.fork();
//! assert!(table.next_index(0, 52) < 52);
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A uniform random integer generator.
///
/// Implemented for every [`RngCore`], so `rand::thread_rng()`, [`DeckRng`]
/// or any caller-supplied generator can drive deck operations. Test doubles
/// that do not implement `RngCore` can implement this trait directly.
pub trait RandomSource {
    /// Draw an index uniformly from `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn next_index(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Seedable deterministic RNG used for reproducible deck operations.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is still recorded, so [`DeckRng::seed`] can be logged
    /// to replay a session.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().next_u64();
        log::trace!("seeding deck rng from entropy: {seed}");
        Self::new(seed)
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RngCore for DeckRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how many
/// numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
