//! The `Deck<T>` container.
//!
//! A deck is an ordered pile of items. Index 0 is the bottom, the last index
//! is the top. The deck never looks inside its items: operations that need
//! a capability (`Clone`, `PartialEq`, a predicate) ask for it themselves.
//!
//! ## Error Policy
//!
//! - End-based reads and takes (`top`, `take_from_top`, ...) are permissive
//!   and return `None` on an empty deck.
//! - Positional and sizing operations (`get`, `remove_at`, `cut`, `split`,
//!   `deal`) are strict and return a [`DeckError`] without mutating anything.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use crate::core::{DeckConfig, DeckError, DeckRng, RandomSource, Result};

use super::listeners::{EmptyListeners, ListenerId};

/// An ordered list of decks, as taken and returned by group operations.
pub type DeckGroup<T> = Vec<Deck<T>>;

/// An ordered, index-addressable pile of items.
///
/// ## Usage
///
/// ```
/// use rust_deck::Deck;
///
/// let mut deck: Deck<u32> = (0..10).collect();
///
/// // Cut the top five off, then put them back.
/// let mut cut = deck.cut(5).unwrap();
/// assert_eq!(cut.to_vec(), vec![5, 6, 7, 8, 9]);
///
/// deck.add_deck_to_top(&mut cut);
/// assert!(cut.is_empty());
/// assert_eq!(deck.to_vec(), (0..10).collect::<Vec<_>>());
///
/// // Negative indices count from the top.
/// assert_eq!(deck[-1], 9);
/// ```
pub struct Deck<T> {
    /// Items, bottom first.
    items: VecDeque<T>,
    listeners: EmptyListeners,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deck<T> {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            listeners: EmptyListeners::new(),
        }
    }

    /// Create an empty deck with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            listeners: EmptyListeners::new(),
        }
    }

    /// Create an empty deck as described by `config`.
    pub fn with_config(config: &DeckConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    /// Number of items in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the deck holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // Empty notification
    // =========================================================================

    /// Subscribe to the "became empty" notification.
    ///
    /// The callback runs synchronously each time a removal takes the deck from
    /// non-empty to empty. Removals on an already empty deck do not run it.
    pub fn on_empty<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut() + Send + 'static,
    {
        self.listeners.subscribe(callback)
    }

    /// Unsubscribe a callback. Returns `false` if the ID was unknown.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Fire the empty notification if a removal just drained the deck.
    fn notify_if_drained(&mut self, was_non_empty: bool) {
        if was_non_empty && self.items.is_empty() {
            self.listeners.notify();
        }
    }

    // =========================================================================
    // Ends
    // =========================================================================

    /// The top item, or `None` if the deck is empty.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.items.back()
    }

    /// The bottom item, or `None` if the deck is empty.
    #[must_use]
    pub fn bottom(&self) -> Option<&T> {
        self.items.front()
    }

    /// Put an item on top.
    pub fn add_to_top(&mut self, item: T) -> &mut Self {
        self.items.push_back(item);
        self
    }

    /// Put an item at the bottom.
    pub fn add_to_bottom(&mut self, item: T) -> &mut Self {
        self.items.push_front(item);
        self
    }

    /// Remove and return the top item, or `None` if the deck is empty.
    pub fn take_from_top(&mut self) -> Option<T> {
        let item = self.items.pop_back()?;
        self.notify_if_drained(true);
        Some(item)
    }

    /// Remove and return the bottom item, or `None` if the deck is empty.
    pub fn take_from_bottom(&mut self) -> Option<T> {
        let item = self.items.pop_front()?;
        self.notify_if_drained(true);
        Some(item)
    }

    /// Move every item of `other` on top of this deck.
    ///
    /// `other` keeps its internal order and ends empty.
    pub fn add_deck_to_top(&mut self, other: &mut Deck<T>) -> &mut Self {
        let was_non_empty = !other.items.is_empty();
        self.items.append(&mut other.items);
        other.notify_if_drained(was_non_empty);
        self
    }

    /// Move every item of `other` under the bottom of this deck.
    ///
    /// `other` keeps its internal order and ends empty.
    pub fn add_deck_to_bottom(&mut self, other: &mut Deck<T>) -> &mut Self {
        let was_non_empty = !other.items.is_empty();
        let mut merged = std::mem::take(&mut other.items);
        merged.append(&mut self.items);
        self.items = merged;
        other.notify_if_drained(was_non_empty);
        self
    }

    // =========================================================================
    // Positions
    // =========================================================================

    /// Resolve a possibly negative index into `[0, len)`.
    fn normalize(&self, index: isize) -> Result<usize> {
        let len = self.items.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        match resolved {
            Some(i) if i < len => Ok(i),
            _ => Err(DeckError::IndexOutOfRange { index, len }),
        }
    }

    /// Item at `index`; `-1` is the top.
    pub fn get(&self, index: isize) -> Result<&T> {
        let i = self.normalize(index)?;
        Ok(&self.items[i])
    }

    /// Mutable item at `index`; `-1` is the top.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = self.normalize(index)?;
        Ok(&mut self.items[i])
    }

    /// Replace the item at `index`; `-1` is the top.
    pub fn set(&mut self, index: isize, item: T) -> Result<&mut Self> {
        let i = self.normalize(index)?;
        self.items[i] = item;
        Ok(self)
    }

    /// Remove and return the item at `index`.
    ///
    /// An empty deck yields `Ok(None)` whatever the index. On a non-empty deck
    /// an index outside the deck is an error.
    pub fn remove_at(&mut self, index: isize) -> Result<Option<T>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        let i = self.normalize(index)?;
        let item = self.items.remove(i);
        self.notify_if_drained(true);
        Ok(item)
    }

    /// Remove the first item equal to `item`, searching from the bottom.
    pub fn remove_item(&mut self, item: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let pos = self.items.iter().position(|x| x == item)?;
        let removed = self.items.remove(pos);
        self.notify_if_drained(true);
        removed
    }

    /// Check if the deck holds an item equal to `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Discard every item above the first `len`.
    pub fn truncate(&mut self, len: usize) -> &mut Self {
        let was_non_empty = !self.items.is_empty();
        self.items.truncate(len);
        self.notify_if_drained(was_non_empty);
        self
    }

    /// Reverse the deck in place.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.make_contiguous().reverse();
        self
    }

    // =========================================================================
    // Randomized operations
    // =========================================================================

    /// Shuffle in place.
    ///
    /// Sweeps left to right; position `i` swaps with an index drawn from
    /// `[i, len)`. The same source state always yields the same permutation.
    pub fn shuffle<R>(&mut self, rng: &mut R) -> &mut Self
    where
        R: RandomSource + ?Sized,
    {
        let n = self.items.len();
        log::trace!("shuffling {n} items");
        for i in 0..n {
            let j = rng.next_index(i, n);
            self.items.swap(i, j);
        }
        self
    }

    /// Shuffle with a fresh [`DeckRng`] seeded from `seed`.
    pub fn shuffle_seeded(&mut self, seed: u64) -> &mut Self {
        self.shuffle(&mut DeckRng::new(seed))
    }

    /// Shuffle with the thread-local unseeded generator.
    pub fn shuffle_unseeded(&mut self) -> &mut Self {
        self.shuffle(&mut rand::thread_rng())
    }

    /// Insert `item` at a uniformly random position in `[start, start + length)`.
    ///
    /// Positions are insertion points, so `len()` (on top) is a valid
    /// position. `length` defaults to every point from `start` up to the top.
    pub fn insert_randomly<R>(
        &mut self,
        rng: &mut R,
        item: T,
        start: usize,
        length: Option<usize>,
    ) -> Result<&mut Self>
    where
        R: RandomSource + ?Sized,
    {
        let slots = self.items.len() + 1;
        if start >= slots {
            return Err(DeckError::InvalidArgument(
                "insertion start is above the top of the deck",
            ));
        }

        let length = length.unwrap_or(slots - start);
        if length == 0 {
            return Err(DeckError::InvalidArgument("insertion range is empty"));
        }

        let end = start
            .checked_add(length)
            .filter(|&end| end <= slots)
            .ok_or(DeckError::InvalidArgument(
                "insertion range extends above the top of the deck",
            ))?;

        let pos = rng.next_index(start, end);
        self.items.insert(pos, item);
        Ok(self)
    }

    /// [`insert_randomly`](Self::insert_randomly) with a seeded [`DeckRng`].
    pub fn insert_randomly_seeded(
        &mut self,
        seed: u64,
        item: T,
        start: usize,
        length: Option<usize>,
    ) -> Result<&mut Self> {
        self.insert_randomly(&mut DeckRng::new(seed), item, start, length)
    }

    /// [`insert_randomly`](Self::insert_randomly) with the thread-local generator.
    pub fn insert_randomly_unseeded(
        &mut self,
        item: T,
        start: usize,
        length: Option<usize>,
    ) -> Result<&mut Self> {
        self.insert_randomly(&mut rand::thread_rng(), item, start, length)
    }

    // =========================================================================
    // Cutting, splitting, dealing
    // =========================================================================

    /// Remove the top `n` items as one block, keeping their order.
    pub fn cut(&mut self, n: usize) -> Result<Deck<T>> {
        let available = self.items.len();
        if n > available {
            return Err(DeckError::InsufficientItems {
                requested: n,
                available,
            });
        }
        Ok(self.cut_unchecked(n))
    }

    fn cut_unchecked(&mut self, n: usize) -> Deck<T> {
        let len = self.items.len();
        log::trace!("cutting {n} of {len} items");
        let block = self.items.split_off(len - n);
        self.notify_if_drained(len > 0);
        Deck::from(block)
    }

    /// Cut a uniformly random number of items in `[0, len]`.
    pub fn cut_randomly<R>(&mut self, rng: &mut R) -> Deck<T>
    where
        R: RandomSource + ?Sized,
    {
        let n = rng.next_index(0, self.items.len() + 1);
        self.cut_unchecked(n)
    }

    /// [`cut_randomly`](Self::cut_randomly) with a seeded [`DeckRng`].
    pub fn cut_randomly_seeded(&mut self, seed: u64) -> Deck<T> {
        self.cut_randomly(&mut DeckRng::new(seed))
    }

    /// [`cut_randomly`](Self::cut_randomly) with the thread-local generator.
    pub fn cut_randomly_unseeded(&mut self) -> Deck<T> {
        self.cut_randomly(&mut rand::thread_rng())
    }

    /// Split the deck into `stacks` contiguous decks, draining it.
    ///
    /// Stacks are taken from the bottom up. Stack `i` receives
    /// `(len + stacks - i - 1) / stacks` items, so sizes differ by at most
    /// one and earlier stacks take the remainder.
    pub fn split(&mut self, stacks: usize) -> Result<DeckGroup<T>> {
        if stacks == 0 {
            return Err(DeckError::InvalidArgument("split needs at least one stack"));
        }

        let total = self.items.len();
        log::trace!("splitting {total} items into {stacks} stacks");

        let mut result = Vec::with_capacity(stacks);
        for i in 0..stacks {
            let size = (total + stacks - i - 1) / stacks;
            let rest = self.items.split_off(size);
            let chunk = std::mem::replace(&mut self.items, rest);
            result.push(Deck::from(chunk));
        }

        self.notify_if_drained(total > 0);
        Ok(result)
    }

    /// Deal from the top, one item at a time, round-robin across `hands`.
    ///
    /// Stops when the deck is empty or `hands.len() * max_per_hand` items
    /// have been dealt. `None` means no per-hand limit.
    pub fn deal(
        &mut self,
        hands: &mut [Deck<T>],
        max_per_hand: Option<usize>,
    ) -> Result<&mut Self> {
        if hands.is_empty() {
            return Err(DeckError::InvalidArgument("deal needs at least one hand"));
        }

        let limit = max_per_hand.map_or(usize::MAX, |max| max.saturating_mul(hands.len()));
        let mut dealt = 0;
        while dealt < limit {
            let Some(item) = self.take_from_top() else {
                break;
            };
            hands[dealt % hands.len()].add_to_top(item);
            dealt += 1;
        }

        log::trace!("dealt {dealt} items to {} hands", hands.len());
        Ok(self)
    }

    /// Deal into `num_hands` new hands and return them.
    pub fn deal_hands(
        &mut self,
        num_hands: usize,
        max_per_hand: Option<usize>,
    ) -> Result<DeckGroup<T>> {
        if num_hands == 0 {
            return Err(DeckError::InvalidArgument("deal needs at least one hand"));
        }

        let mut hands: DeckGroup<T> = (0..num_hands).map(|_| Deck::new()).collect();
        self.deal(&mut hands, max_per_hand)?;
        Ok(hands)
    }

    /// Move every item matching `predicate` into a new deck.
    ///
    /// Both this deck and the returned one keep their relative order.
    pub fn separate<F>(&mut self, mut predicate: F) -> Deck<T>
    where
        F: FnMut(&T) -> bool,
    {
        let was_non_empty = !self.items.is_empty();
        let mut kept = VecDeque::with_capacity(self.items.len());
        let mut matched = VecDeque::new();

        for item in self.items.drain(..) {
            if predicate(&item) {
                matched.push_back(item);
            } else {
                kept.push_back(item);
            }
        }

        self.items = kept;
        self.notify_if_drained(was_non_empty);
        Deck::from(matched)
    }

    // =========================================================================
    // Copies and views
    // =========================================================================

    /// Independent copy of the items. Listeners are not copied.
    #[must_use]
    pub fn duplicate(&self) -> Deck<T>
    where
        T: Clone,
    {
        Deck::from(self.items.clone())
    }

    /// Iterate bottom to top.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate bottom to top, mutably.
    pub fn iter_mut(&mut self) -> std::collections::vec_deque::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Copy the items into a `Vec`, bottom first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    /// Consume the deck into a `Vec`, bottom first.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}

impl<T: Clone> Clone for Deck<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Deck<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Deck<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Deck<T> {}

impl<T> Index<isize> for Deck<T> {
    type Output = T;

    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<isize> for Deck<T> {
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.normalize(index) {
            Ok(i) => &mut self.items[i],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from(VecDeque::from(items))
    }
}

impl<T> From<VecDeque<T>> for Deck<T> {
    fn from(items: VecDeque<T>) -> Self {
        Self {
            items,
            listeners: EmptyListeners::new(),
        }
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<VecDeque<T>>())
    }
}

/// Extending adds items on top, in iteration order.
impl<T> Extend<T> for Deck<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::collections::vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deck<T> {
    type Item = &'a mut T;
    type IntoIter = std::collections::vec_deque::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
