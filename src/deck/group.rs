//! Operations over an ordered list of decks.
//!
//! These are free functions rather than methods so they work on any slice
//! of decks: a `DeckGroup`, a fixed array of hands, or part of a table.
//! Like the single-deck operations, they only ever move items.

use serde::{Deserialize, Serialize};

use crate::core::{DeckError, Result};

use super::pile::Deck;

/// Which end of a deck an operation works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckEnd {
    /// The top (last index).
    Top,
    /// The bottom (index 0).
    Bottom,
}

/// Fold `decks` into one deck, each on top of the previous.
///
/// The result holds `decks[0]` bottom to top, then `decks[1]`, and so on.
/// Each input is drained, which fires its empty listeners.
pub fn join<T, I>(decks: I) -> Deck<T>
where
    I: IntoIterator<Item = Deck<T>>,
{
    let mut joined = Deck::new();
    let mut count = 0usize;
    for mut deck in decks {
        joined.add_deck_to_top(&mut deck);
        count += 1;
    }
    log::debug!("joined {count} decks into {} items", joined.len());
    joined
}

/// Split `source` across `hands` and merge chunk `i` onto hand `i` at `end`.
///
/// Chunks follow the [`Deck::split`] sizing rule. `source` ends empty.
pub fn distribute<T>(hands: &mut [Deck<T>], source: &mut Deck<T>, end: DeckEnd) -> Result<()> {
    if hands.is_empty() {
        return Err(DeckError::InvalidArgument("distribute needs at least one hand"));
    }

    let chunks = source.split(hands.len())?;
    for (hand, mut chunk) in hands.iter_mut().zip(chunks) {
        match end {
            DeckEnd::Top => hand.add_deck_to_top(&mut chunk),
            DeckEnd::Bottom => hand.add_deck_to_bottom(&mut chunk),
        };
    }

    log::debug!("distributed to the {end:?} of {} hands", hands.len());
    Ok(())
}

/// [`distribute`] onto the top of each hand.
pub fn distribute_to_top<T>(hands: &mut [Deck<T>], source: &mut Deck<T>) -> Result<()> {
    distribute(hands, source, DeckEnd::Top)
}

/// [`distribute`] under the bottom of each hand.
pub fn distribute_to_bottom<T>(hands: &mut [Deck<T>], source: &mut Deck<T>) -> Result<()> {
    distribute(hands, source, DeckEnd::Bottom)
}

/// Take one item from `end` of every hand, in hand order.
///
/// The items are stacked bottom to top in hand order. An empty hand
/// contributes `None` to its slot, so the result always has one slot per
/// hand.
pub fn take_round<T>(hands: &mut [Deck<T>], end: DeckEnd) -> Deck<Option<T>> {
    hands
        .iter_mut()
        .map(|hand| match end {
            DeckEnd::Top => hand.take_from_top(),
            DeckEnd::Bottom => hand.take_from_bottom(),
        })
        .collect()
}

/// [`take_round`] from the top of each hand.
pub fn take_round_from_top<T>(hands: &mut [Deck<T>]) -> Deck<Option<T>> {
    take_round(hands, DeckEnd::Top)
}

/// [`take_round`] from the bottom of each hand.
pub fn take_round_from_bottom<T>(hands: &mut [Deck<T>]) -> Deck<Option<T>> {
    take_round(hands, DeckEnd::Bottom)
}

/// Total number of items held by `decks`.
#[must_use]
pub fn total_len<T>(decks: &[Deck<T>]) -> usize {
    decks.iter().map(Deck::len).sum()
}
