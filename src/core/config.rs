//! Deck configuration.
//!
//! Applications configure decks at startup by providing a `DeckConfig`:
//! - `seed`: fixed seed for reproducible shuffles, or `None` for entropy
//! - `initial_capacity`: storage preallocated for decks built from the config
//!
//! The config derives serde traits so it can sit inside a larger application
//! config file. It describes how decks are built, never what they contain.

use serde::{Deserialize, Serialize};

use super::error::{DeckError, Result};
use super::rng::DeckRng;

/// Upper bound accepted for `initial_capacity`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Configuration for building decks and their random sources.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Seed for the deck RNG. `None` draws a fresh seed from entropy.
    pub seed: Option<u64>,

    /// Number of items to preallocate storage for.
    pub initial_capacity: usize,
}

impl DeckConfig {
    /// Create a default configuration (entropy seed, no preallocation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the preallocated capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Check the configuration for values the library refuses to use.
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(DeckError::InvalidArgument(
                "initial_capacity exceeds MAX_INITIAL_CAPACITY",
            ));
        }
        Ok(())
    }

    /// Build the random source this configuration describes.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        match self.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        }
    }
}
