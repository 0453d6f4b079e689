//! The shared deck and dealing.
//!
//! The deck is built once per round, shuffled once, and only ever
//! shrinks. Its top is the tail of the backing `Vec`, so drawing is a
//! `pop`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::hand::Hand;
use crate::core::rng::GameRng;

/// Copies of each face per pack (one per suit; suits carry no meaning).
pub const COPIES_PER_PACK: usize = 4;

/// Shared pool of undealt cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: for each pack, every face four times.
    ///
    /// With two packs this is 104 cards, eight of each face.
    #[must_use]
    pub fn unshuffled(packs: usize) -> Self {
        let cards = (0..packs * COPIES_PER_PACK)
            .flat_map(|_| Card::faces())
            .collect();
        Self { cards }
    }

    /// Build and shuffle a fresh deck.
    #[must_use]
    pub fn shuffled(packs: usize, rng: &mut GameRng) -> Self {
        let mut deck = Self::unshuffled(packs);
        rng.shuffle(&mut deck.cards);
        debug!("shuffled {} cards (seed {})", deck.len(), rng.seed());
        deck
    }

    /// Deck with an explicit order; the last card is drawn first.
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
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw into `hand` until it holds `target` cards or the deck runs out.
    ///
    /// Returns how many cards were drawn. Running out is not an error; the
    /// hand simply stays short.
    pub fn fill(&mut self, hand: &mut Hand, target: usize) -> usize {
        let mut drawn = 0;
        while hand.len() < target {
            match self.draw() {
                Some(card) => {
                    hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }
}

/// Build a shuffled two-pack deck.
#[must_use]
pub fn create_deck(rng: &mut GameRng) -> Deck {
    Deck::shuffled(2, rng)
}

/// Refill `hand` from `deck` up to `target` cards.
pub fn fill(hand: &mut Hand, deck: &mut Deck, target: usize) {
    deck.fill(hand, target);
}
