//! Core building blocks: errors, random sources, configuration.
//!
//! These are item-agnostic. Decks and group operations in `crate::deck`
//! are built on top of them.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DeckConfig, MAX_INITIAL_CAPACITY};
pub use error::{DeckError, Result};
pub use rng::{DeckRng, DeckRngState, RandomSource};
