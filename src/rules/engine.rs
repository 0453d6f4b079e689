//! Round outcome and legal-move enumeration.

use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::side::Side;
use crate::core::state::GameState;
use crate::rules::targeting::targets;
use crate::rules::validator::check;

/// Result of a finished round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// This side delivered enough caravans.
    Winner(Side),
    /// Deck and hands ran dry with nobody at the threshold.
    Draw,
}

impl GameResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Every move `side` could legally make right now.
///
/// Ordered by hand index, then own caravans before the opponent's. The
/// host can use this to highlight playable cards; the bots rely on the
/// same targeting rule, so anything a bot plays appears here.
#[must_use]
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    state
        .hand(side)
        .iter()
        .enumerate()
        .flat_map(|(index, card)| {
            targets(side, card)
                .filter(move |&target| {
                    state
                        .caravan(target)
                        .is_some_and(|caravan| check(caravan, card).is_ok())
                })
                .map(move |target| Move::new(index, target))
        })
        .collect()
}
