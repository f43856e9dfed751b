//! # rust-deck
//!
//! A generic deck container for building card-game logic.
//!
//! ## Design Principles
//!
//! 1. **Item-Agnostic**: `Deck<T>` never inspects its items. Operations that
//!    need `Clone`, `PartialEq` or a predicate ask for it themselves.
//!
//! 2. **Move, Never Copy**: cutting, splitting, dealing and joining transfer
//!    ownership of items. Only `duplicate` copies.
//!
//! 3. **Injectable Randomness**: every random operation takes a
//!    `RandomSource`, with seeded and unseeded conveniences.
//!
//! ## Modules
//!
//! - `core`: errors, random sources, configuration
//! - `deck`: the `Deck<T>` container, empty listeners, group operations
//!
//! ## Example
//!
//! ```
//! use rust_deck::{join, Deck};
//!
//! let mut deck: Deck<u32> = (0..52).collect();
//! deck.shuffle_seeded(7);
//!
//! let hands = deck.deal_hands(4, Some(5)).unwrap();
//! assert_eq!(deck.len(), 32);
//!
//! deck.add_deck_to_bottom(&mut join(hands));
//! assert_eq!(deck.len(), 52);
//! ```

pub mod core;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{DeckConfig, DeckError, DeckRng, DeckRngState, RandomSource, Result};

pub use crate::deck::{
    distribute, distribute_to_bottom, distribute_to_top, join, take_round,
    take_round_from_bottom, take_round_from_top, total_len, Deck, DeckEnd, DeckGroup,
    ListenerId,
};
