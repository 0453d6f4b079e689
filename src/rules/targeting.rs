//! Which caravans a card may be aimed at.
//!
//! Sequence cards only ever extend the acting side's own caravans. Face
//! cards may hit either side's. Human and bot moves both go through this
//! module, so the two code paths cannot drift apart.

use crate::cards::Card;
use crate::core::action::Target;
use crate::core::side::Side;
use crate::rules::caravan::CARAVANS_PER_SIDE;
use crate::rules::error::IllegalMove;

/// Caravans a card class can reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetScope {
    /// Only the acting side's caravans.
    Own,
    /// Caravans on both sides.
    Any,
}

/// Reach of a card.
#[must_use]
pub fn scope(card: Card) -> TargetScope {
    if card.is_face_effect() {
        TargetScope::Any
    } else {
        TargetScope::Own
    }
}

/// Whether `actor` may aim `card` at `target`.
///
/// Only ownership and index range are checked here; caravan contents are
/// the validator's job.
pub fn check_target(actor: Side, card: Card, target: Target) -> Result<(), IllegalMove> {
    if target.caravan >= CARAVANS_PER_SIDE {
        return Err(IllegalMove::NoSuchCaravan(target.caravan));
    }
    if scope(card) == TargetScope::Own && target.side != actor {
        return Err(IllegalMove::OpponentCaravan);
    }
    Ok(())
}

/// Every caravan `actor` may aim `card` at: own caravans first, then the
/// opponent's when the card reaches them.
pub fn targets(actor: Side, card: Card) -> impl Iterator<Item = Target> {
    let own = (0..CARAVANS_PER_SIDE).map(move |i| Target::new(actor, i));
    let theirs_count = match scope(card) {
        TargetScope::Own => 0,
        TargetScope::Any => CARAVANS_PER_SIDE,
    };
    let theirs = (0..theirs_count).map(move |i| Target::new(actor.opponent(), i));
    own.chain(theirs)
}
