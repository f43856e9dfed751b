//! Deck error types.
//!
//! Only the positional and sizing APIs fail. Reading or taking from an
//! empty deck is not an error; those operations return `None` instead.

use thiserror::Error;

/// Errors raised by deck and deck-group operations.
///
/// Every fallible operation checks its arguments before touching any deck,
/// so an `Err` always leaves the decks involved exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A normalized index fell outside `[0, len)`.
    #[error("index {index} out of range for deck of length {len}")]
    IndexOutOfRange {
        /// The index as supplied by the caller (before normalization).
        index: isize,
        /// Deck length at the time of the call.
        len: usize,
    },

    /// A cut asked for more items than the deck holds.
    #[error("cannot take {requested} items from a deck of {available}")]
    InsufficientItems {
        /// Number of items requested.
        requested: usize,
        /// Number of items available.
        available: usize,
    },

    /// An argument was rejected before any mutation took place.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
