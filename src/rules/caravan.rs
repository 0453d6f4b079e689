//! Caravans: the three scoring sequences each side builds.
//!
//! A caravan stores only sequence cards. Face cards act on it and vanish.
//! Direction and score are derived from the stored cards on every call;
//! nothing is cached, so there is nothing to invalidate when a Jack, Queen
//! or King rewrites the sequence.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{card_value, Card};
use crate::core::config::RulesConfig;

/// Caravans per side.
pub const CARAVANS_PER_SIDE: usize = 3;

/// Ordering constraint fixed by a caravan's first two cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => write!(f, "ascending"),
            Direction::Descending => write!(f, "descending"),
        }
    }
}

/// One ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Caravan {
    cards: SmallVec<[Card; 8]>,
    locked: bool,
}

impl Caravan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caravan holding the given sequence cards, in order.
    ///
    /// Face cards are never stored in a caravan.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let cards: SmallVec<[Card; 8]> = cards.into_iter().collect();
        assert!(
            cards.iter().all(|c| c.is_sequence()),
            "caravans only hold sequence cards"
        );
        Self {
            cards,
            locked: false,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Most recently placed card.
    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Close the caravan for the rest of the round. There is no unlock.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Direction once two cards are down.
    ///
    /// Equal first cards read as descending: only a strictly larger second
    /// card makes a caravan ascending.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.cards.as_slice() {
            [first, second, ..] if second.value() > first.value() => Some(Direction::Ascending),
            [_, _, ..] => Some(Direction::Descending),
            _ => None,
        }
    }

    /// Sum of card values.
    #[must_use]
    pub fn score(&self) -> u32 {
        caravan_score(self)
    }

    /// Score with the King's doubling applied to the last card, if it can be.
    #[must_use]
    pub fn score_if_doubled(&self) -> Option<u32> {
        let last = self.last()?;
        let doubled = last.doubled()?;
        Some(self.score() - last.value() + doubled.value())
    }

    pub(crate) fn push(&mut self, card: Card) {
        debug_assert!(card.is_sequence());
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub(crate) fn swap_front(&mut self) {
        self.cards.swap(0, 1);
    }

    pub(crate) fn replace_last(&mut self, card: Card) {
        if let Some(last) = self.cards.last_mut() {
            *last = card;
        }
    }
}

/// Sum of card values in a caravan.
#[must_use]
pub fn caravan_score(caravan: &Caravan) -> u32 {
    caravan.cards.iter().map(|&c| card_value(c)).sum()
}

/// How many caravans sit inside the delivery band.
#[must_use]
pub fn delivered_caravans(caravans: &[Caravan], config: &RulesConfig) -> usize {
    caravans
        .iter()
        .filter(|c| config.is_delivered(c.score()))
        .count()
}
