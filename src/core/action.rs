//! Move representation: a hand slot plus a target caravan.
//!
//! A move is the only thing either side can do on its turn. Sequence
//! cards extend a caravan; face cards act on one. Either way the move
//! names exactly one card in the acting side's hand and one caravan on
//! the table.

use serde::{Deserialize, Serialize};

use super::side::Side;

/// A caravan on the table, addressed by its owner and position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// Side that owns the caravan.
    pub side: Side,
    /// Caravan index within that side (0-based).
    pub caravan: usize,
}

impl Target {
    #[must_use]
    pub const fn new(side: Side, caravan: usize) -> Self {
        Self { side, caravan }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} caravan {}", self.side, self.caravan)
    }
}

/// A complete move.
///
/// ```
/// use caravan_engine::core::{Move, Side, Target};
///
/// // Play the third card in hand onto the opponent's first caravan.
/// let mv = Move::new(2, Target::new(Side::Player, 0));
/// assert_eq!(mv.hand_index, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the card in the acting side's hand.
    pub hand_index: usize,
    /// Caravan the card is played on.
    pub target: Target,
}

impl Move {
    #[must_use]
    pub const fn new(hand_index: usize, target: Target) -> Self {
        Self { hand_index, target }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hand[{}] -> {}", self.hand_index, self.target)
    }
}
