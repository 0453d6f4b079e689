//! Executing a bot turn.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::config::BotConfig;
use super::policy::{BotPolicy, BotView, Difficulty};
use crate::cards::Card;
use crate::core::action::Move;
use crate::core::side::Side;
use crate::core::state::GameState;
use crate::rules::validator::Played;

/// What a bot turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A card was played.
    Played { mv: Move, card: Card, played: Played },
    /// No move was chosen; this card was thrown away.
    Discarded(Card),
    /// The hand was already empty.
    Idle,
}

/// Let `policy` act for `side`, then refill `side`'s hand.
///
/// The turn always changes state unless the hand is empty: a chosen move
/// is played, otherwise one card is discarded from the configured end.
pub fn take_turn<P>(state: &mut GameState, side: Side, policy: &P, weights: &BotConfig) -> TurnOutcome
where
    P: BotPolicy + ?Sized,
{
    let choice = policy.choose(&BotView::new(state, side, weights));

    let chosen = choice.and_then(|mv| Some((mv, state.hand(side).get(mv.hand_index)?)));

    let outcome = match chosen {
        Some((mv, card)) => match state.play(side, mv) {
            Ok(played) => TurnOutcome::Played { mv, card, played },
            Err(err) => {
                warn!("{} chose illegal move {}: {}", side, mv, err);
                discard(state, side)
            }
        },
        None => discard(state, side),
    };

    state.refill(side);
    outcome
}

/// One turn for the bot side at the given difficulty, default weights.
pub fn bot_turn(state: &mut GameState, difficulty: Difficulty) -> TurnOutcome {
    debug!("bot turn ({})", difficulty);
    take_turn(state, Side::Bot, &difficulty, &BotConfig::default())
}

fn discard(state: &mut GameState, side: Side) -> TurnOutcome {
    state.discard(side).map_or(TurnOutcome::Idle, TurnOutcome::Discarded)
}
