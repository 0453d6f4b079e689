//! A side's hand.
//!
//! Hands are small (eight cards by default) so they live inline in a
//! `SmallVec`. Cards only enter from the deck and only leave by being
//! played or discarded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::Card;
use crate::core::config::DiscardEnd;

/// Ordered cards held by one side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a hand from explicit cards (scenario setup, tests).
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// Add a drawn card at the end.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Take the card at `index` out of the hand, keeping the order of the rest.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Throw away one card from the configured end without playing it.
    pub fn discard(&mut self, end: DiscardEnd) -> Option<Card> {
        match end {
            DiscardEnd::Back => self.cards.pop(),
            DiscardEnd::Front => self.take(0),
        }
    }
}
