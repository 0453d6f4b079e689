//! Illegal-move reasons.
//!
//! Illegal moves are the engine's only failure. They are ordinary
//! outcomes the host branches on, and every one of them is detected
//! before anything is mutated.

use thiserror::Error;

use crate::cards::Card;
use crate::rules::caravan::Direction;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no card at hand index {0}")]
    NoSuchCard(usize),

    #[error("no caravan at index {0}")]
    NoSuchCaravan(usize),

    #[error("sequence cards can only be played on your own caravans")]
    OpponentCaravan,

    #[error("caravan is locked")]
    Locked,

    #[error("{0} needs a caravan with at least one card")]
    EmptyCaravan(Card),

    #[error("queen needs a caravan with at least two cards")]
    TooShortToSwap,

    #[error("king can only double a number card, not {0}")]
    NotANumber(Card),

    #[error("doubling {0} overflows")]
    DoubleOverflow(Card),

    #[error("{card} does not continue the {direction} caravan ending in {last}")]
    BreaksDirection {
        card: Card,
        last: Card,
        direction: Direction,
    },
}
