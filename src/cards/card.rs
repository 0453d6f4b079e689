//! Card semantics.
//!
//! Cards carry no suit or owner; only the face matters. There are two
//! behavioral classes:
//!
//! - **Sequence cards**: `A` (value 1) and numbers `2`-`10`. They extend a
//!   caravan and count toward its score. A King turns a number into its
//!   double, which stays a number card, so `Number` is not capped at 10.
//! - **Effect cards**: `J`, `Q`, `K`. They act on a caravan and are never
//!   stored in one.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Face-card effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Jack: remove the target caravan's last card.
    Jack,
    /// Queen: swap the target caravan's first two cards.
    Queen,
    /// King: double the target caravan's last card.
    King,
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Ace, worth 1.
    Ace,
    /// Number card worth its face value.
    Number(u16),
    /// Face card with a caravan effect, worth 0.
    Effect(Effect),
}

/// Numeric ranks dealt into every pack.
pub const NUMBER_RANKS: std::ops::RangeInclusive<u16> = 2..=10;

impl Card {
    pub const JACK: Card = Card::Effect(Effect::Jack);
    pub const QUEEN: Card = Card::Effect(Effect::Queen);
    pub const KING: Card = Card::Effect(Effect::King);

    /// Every distinct face in a pack: `2`..`10`, then `J`, `Q`, `K`, `A`.
    pub fn faces() -> impl Iterator<Item = Card> {
        NUMBER_RANKS
            .map(Card::Number)
            .chain([Card::JACK, Card::QUEEN, Card::KING, Card::Ace])
    }

    /// Scoring value: numbers their face, Ace 1, face cards 0.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Card::Ace => 1,
            Card::Number(n) => n as u32,
            Card::Effect(_) => 0,
        }
    }

    /// The effect this card triggers, if it is a face card.
    #[must_use]
    pub const fn effect(self) -> Option<Effect> {
        match self {
            Card::Effect(e) => Some(e),
            _ => None,
        }
    }

    /// True for `J`, `Q` and `K`.
    #[must_use]
    pub const fn is_face_effect(self) -> bool {
        matches!(self, Card::Effect(_))
    }

    /// True for cards that extend a caravan (numbers and Ace).
    #[must_use]
    pub const fn is_sequence(self) -> bool {
        !self.is_face_effect()
    }

    /// The doubled card a King leaves behind.
    ///
    /// Only plain number cards double; `None` for Ace, face cards, or if
    /// the doubled value would not fit.
    #[must_use]
    pub fn doubled(self) -> Option<Card> {
        match self {
            Card::Number(n) => n.checked_mul(2).map(Card::Number),
            _ => None,
        }
    }
}

/// Scoring value of a card.
#[must_use]
pub const fn card_value(card: Card) -> u32 {
    card.value()
}

/// Whether a card is one of the three effect cards.
#[must_use]
pub const fn is_face_effect(card: Card) -> bool {
    card.is_face_effect()
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Ace => write!(f, "A"),
            Card::Number(n) => write!(f, "{}", n),
            Card::Effect(Effect::Jack) => write!(f, "J"),
            Card::Effect(Effect::Queen) => write!(f, "Q"),
            Card::Effect(Effect::King) => write!(f, "K"),
        }
    }
}

/// A label that names no card.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown card label {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" => Ok(Card::Ace),
            "J" => Ok(Card::JACK),
            "Q" => Ok(Card::QUEEN),
            "K" => Ok(Card::KING),
            other => match other.parse::<u16>() {
                Ok(n) if n >= 2 => Ok(Card::Number(n)),
                _ => Err(ParseCardError(s.to_string())),
            },
        }
    }
}
