//! Decks and the operations that move items between them.
//!
//! ## Key Types
//!
//! - `Deck<T>`: ordered pile, bottom at index 0, top at the last index
//! - `DeckGroup<T>`: an ordered list of decks
//! - `DeckEnd`: top or bottom, for group operations
//! - `ListenerId`: handle for an "became empty" subscription
//!
//! ## Conservation
//!
//! Cutting, splitting, dealing, separating, joining and distributing only
//! move items. The total count across the decks involved never changes
//! unless items are explicitly discarded (`truncate`) or taken out.

pub mod group;
pub mod listeners;
pub mod pile;

pub use group::{
    distribute, distribute_to_bottom, distribute_to_top, join, take_round,
    take_round_from_bottom, take_round_from_top, total_len, DeckEnd,
};
pub use listeners::{EmptyCallback, EmptyListeners, ListenerId};
pub use pile::{Deck, DeckGroup};
