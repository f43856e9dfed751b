//! Shared fixtures: a plain French-suited card used only by tests.

#![allow(dead_code)]

use rust_deck::Deck;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Diamonds,
    Hearts,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// 1 (ace) through 13 (king).
    pub value: u8,
    pub suit: Suit,
}

impl Card {
    pub fn new(value: u8, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// 52 cards, suit by suit, ace to king within each suit.
pub fn full_deck() -> Deck<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=13).map(move |value| Card::new(value, suit)))
        .collect()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
