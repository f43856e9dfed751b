//! Multi-deck operation tests.
//!
//! These verify that joining, distributing and one-per-hand rounds move
//! cards between decks without losing or duplicating any.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use common::{full_deck, init_logging, Card, Suit};
use rust_deck::{
    distribute, distribute_to_bottom, distribute_to_top, join, take_round_from_bottom,
    take_round_from_top, total_len, Deck, DeckEnd, DeckError, DeckGroup,
};

// =============================================================================
// Join
// =============================================================================

/// Joining drains every input and fires each input's listener.
#[test]
fn test_join_drains_inputs() {
    init_logging();
    let fired = Arc::new(AtomicUsize::new(0));
    let mut stacks = full_deck().split(4).unwrap();

    for stack in stacks.iter_mut() {
        let fired = Arc::clone(&fired);
        stack.on_empty(move || {
            fired.fetch_add(1, Ordering::SeqCst);
        });
    }

    let joined = join(stacks);

    assert_eq!(joined, full_deck());
    assert_eq!(fired.load(Ordering::SeqCst), 4);
}

/// Join accepts any iterator of decks, for example hands in reverse.
#[test]
fn test_join_reversed_hands() {
    let mut deck: Deck<u32> = (0..6).collect();
    let stacks = deck.split(3).unwrap();

    let joined = join(stacks.into_iter().rev());

    assert_eq!(joined.to_vec(), vec![4, 5, 2, 3, 0, 1]);
}

// =============================================================================
// Distribute
// =============================================================================

/// Distributing a full deck over four empty hands matches a plain split.
#[test]
fn test_distribute_matches_split() {
    let mut hands: DeckGroup<Card> = (0..4).map(|_| Deck::new()).collect();
    let mut source = full_deck();

    distribute_to_top(&mut hands, &mut source).unwrap();

    assert!(source.is_empty());
    assert_eq!(hands, full_deck().split(4).unwrap());
}

/// Distribute keeps the total and puts chunks at the requested end.
#[test]
fn test_distribute_conserves_items() {
    let mut hands: DeckGroup<u32> = vec![vec![1000].into(), vec![2000].into()];
    let mut source: Deck<u32> = (0..7).collect();
    let before = total_len(&hands) + source.len();

    distribute(&mut hands, &mut source, DeckEnd::Bottom).unwrap();

    assert_eq!(total_len(&hands) + source.len(), before);
    assert_eq!(hands[0].to_vec(), vec![0, 1, 2, 3, 1000]);
    assert_eq!(hands[1].to_vec(), vec![4, 5, 6, 2000]);

    let mut more: Deck<u32> = (10..12).collect();
    distribute_to_bottom(&mut hands, &mut more).unwrap();
    assert_eq!(hands[0].bottom(), Some(&10));
    assert_eq!(hands[1].bottom(), Some(&11));
}

/// An empty hand list is rejected and the source keeps its cards.
#[test]
fn test_distribute_rejects_no_hands() {
    let mut hands: DeckGroup<Card> = Vec::new();
    let mut source = full_deck();

    let err = distribute_to_top(&mut hands, &mut source).unwrap_err();

    assert_eq!(err, DeckError::InvalidArgument("distribute needs at least one hand"));
    assert_eq!(source.len(), 52);
}

// =============================================================================
// Rounds
// =============================================================================

/// Taking rounds from four hands dealt from a full deck collects
/// each round in hand order.
#[test]
fn test_rounds_after_deal() {
    let mut deck = full_deck();
    let mut hands = deck.deal_hands(4, Some(3)).unwrap();
    assert_eq!(total_len(&hands), 12);

    let round = take_round_from_bottom(&mut hands);

    // The first four cards dealt came off the top: king of spades downwards.
    let expected: Vec<Option<Card>> = (10..=13)
        .rev()
        .map(|value| Some(Card::new(value, Suit::Spades)))
        .collect();
    assert_eq!(round.to_vec(), expected);
    assert_eq!(total_len(&hands), 8);
}

/// Rounds keep their slot for exhausted hands.
#[test]
fn test_rounds_until_exhausted() {
    let mut hands: DeckGroup<u32> = vec![vec![1, 2].into(), vec![3].into()];

    let first = take_round_from_top(&mut hands);
    let second = take_round_from_top(&mut hands);
    let third = take_round_from_top(&mut hands);

    assert_eq!(first.to_vec(), vec![Some(2), Some(3)]);
    assert_eq!(second.to_vec(), vec![Some(1), None]);
    assert_eq!(third.to_vec(), vec![None, None]);

    let real: Vec<u32> = first.into_iter().chain(second).flatten().collect();
    assert_eq!(real, vec![2, 3, 1]);
}
