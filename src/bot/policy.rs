//! Bot decision policies.
//!
//! Policies are trait-based so the host can swap them per round:
//! - `Easy`: first legal sequence placement
//! - `Medium`: best-scoring sequence placement
//! - `Hard`: per-card priority cascade over all four move classes
//! - `Impossible`: one scored pass over every (card, caravan) pair
//!
//! A policy only chooses. Executing the move, or discarding when it
//! returns `None`, is `bot::take_turn`'s job.

use log::trace;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use super::config::BotConfig;
use crate::cards::{Card, Effect, Hand};
use crate::core::action::{Move, Target};
use crate::core::config::RulesConfig;
use crate::core::side::Side;
use crate::core::state::GameState;
use crate::rules::caravan::{Caravan, CARAVANS_PER_SIDE};
use crate::rules::targeting::targets;
use crate::rules::validator::check;

// =============================================================================
// View
// =============================================================================

/// Read-only slice of the state a policy decides from.
#[derive(Clone, Copy, Debug)]
pub struct BotView<'a> {
    /// Side the policy plays for.
    pub side: Side,
    pub hand: &'a Hand,
    pub own: &'a [Caravan; CARAVANS_PER_SIDE],
    pub opponent: &'a [Caravan; CARAVANS_PER_SIDE],
    pub rules: &'a RulesConfig,
    pub weights: &'a BotConfig,
}

impl<'a> BotView<'a> {
    #[must_use]
    pub fn new(state: &'a GameState, side: Side, weights: &'a BotConfig) -> Self {
        Self {
            side,
            hand: state.hand(side),
            own: state.caravans(side),
            opponent: state.caravans(side.opponent()),
            rules: state.config(),
            weights,
        }
    }

    /// Caravan at `target`, seen from this side.
    #[must_use]
    pub fn caravan(&self, target: Target) -> Option<&'a Caravan> {
        let caravans = if target.side == self.side {
            self.own
        } else {
            self.opponent
        };
        caravans.get(target.caravan)
    }

    /// Caravans `card` can legally be played on, own first.
    pub fn legal_targets(&self, card: Card) -> impl Iterator<Item = (Target, &'a Caravan)> + '_ {
        targets(self.side, card).filter_map(move |target| {
            self.caravan(target)
                .filter(|caravan| check(caravan, card).is_ok())
                .map(|caravan| (target, caravan))
        })
    }

    fn is_own(&self, target: Target) -> bool {
        target.side == self.side
    }
}

// =============================================================================
// Policy trait
// =============================================================================

/// Chooses one move for a side, or `None` to discard.
///
/// Implementations must only return moves that are legal in the view they
/// were given.
pub trait BotPolicy: Send + Sync {
    fn choose(&self, view: &BotView<'_>) -> Option<Move>;
}

/// Keep `mv` if it beats the running best strictly. Earlier candidates win ties.
fn offer(best: &mut Option<(i64, Move)>, score: i64, mv: Move) {
    trace!("candidate {} scores {}", mv, score);
    if best.map_or(true, |(top, _)| score > top) {
        *best = Some((score, mv));
    }
}

/// Caravan score after appending `card`.
fn score_with(caravan: &Caravan, card: Card) -> u32 {
    caravan.score() + card.value()
}

// =============================================================================
// Easy
// =============================================================================

/// First-fit: the first sequence card, in hand order, that fits any own
/// caravan, in caravan order. Face cards are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Easy;

impl BotPolicy for Easy {
    fn choose(&self, view: &BotView<'_>) -> Option<Move> {
        view.hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_sequence())
            .find_map(|(index, card)| {
                view.legal_targets(card)
                    .next()
                    .map(|(target, _)| Move::new(index, target))
            })
    }
}

// =============================================================================
// Medium
// =============================================================================

/// Best-of: every legal sequence placement is scored by the caravan's new
/// total, with a bonus when it lands in the delivery band. Face cards are
/// ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct Medium;

impl Medium {
    fn score(view: &BotView<'_>, caravan: &Caravan, card: Card) -> i64 {
        let total = score_with(caravan, card);
        if view.rules.is_delivered(total) {
            view.weights.in_band_bonus + i64::from(total)
        } else {
            i64::from(total)
        }
    }
}

impl BotPolicy for Medium {
    fn choose(&self, view: &BotView<'_>) -> Option<Move> {
        let mut best = None;
        for (index, card) in view.hand.iter().enumerate() {
            if card.is_face_effect() {
                continue;
            }
            for (target, caravan) in view.legal_targets(card) {
                offer(&mut best, Self::score(view, caravan, card), Move::new(index, target));
            }
        }
        best.map(|(_, mv)| mv)
    }
}

// =============================================================================
// Hard
// =============================================================================

/// Priority cascade, card by card in hand order. The first card that
/// triggers is played at once, even if a later card would be better:
///
/// - sequence card whose best placement lands in band
/// - Jack on an opponent caravan ending in a high card
/// - King that doubles an own caravan into band
/// - Queen on any own caravan with two cards
///
/// If nothing triggers, the best sequence placement seen is played.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hard;

impl Hard {
    fn score(view: &BotView<'_>, caravan: &Caravan, card: Card) -> i64 {
        let total = score_with(caravan, card);
        if view.rules.is_delivered(total) {
            view.weights.in_band_bonus + i64::from(total)
        } else if view.rules.is_bust(total) {
            view.weights.bust_score
        } else {
            i64::from(total)
        }
    }
}

impl BotPolicy for Hard {
    fn choose(&self, view: &BotView<'_>) -> Option<Move> {
        let mut fallback = None;

        for (index, card) in view.hand.iter().enumerate() {
            match card.effect() {
                None => {
                    let mut best_here = None;
                    for (target, caravan) in view.legal_targets(card) {
                        offer(&mut best_here, Self::score(view, caravan, card), Move::new(index, target));
                    }
                    let Some((score, mv)) = best_here else { continue };
                    let lands = view
                        .caravan(mv.target)
                        .is_some_and(|c| view.rules.is_delivered(score_with(c, card)));
                    if lands {
                        return Some(mv);
                    }
                    offer(&mut fallback, score, mv);
                }
                Some(Effect::Jack) => {
                    let hit = view.legal_targets(card).find(|&(target, caravan)| {
                        !view.is_own(target)
                            && caravan
                                .last()
                                .is_some_and(|last| last.value() >= view.weights.hard_jack_threshold)
                    });
                    if let Some((target, _)) = hit {
                        return Some(Move::new(index, target));
                    }
                }
                Some(Effect::King) => {
                    let hit = view.legal_targets(card).find(|&(target, caravan)| {
                        view.is_own(target)
                            && caravan
                                .score_if_doubled()
                                .is_some_and(|total| view.rules.is_delivered(total))
                    });
                    if let Some((target, _)) = hit {
                        return Some(Move::new(index, target));
                    }
                }
                Some(Effect::Queen) => {
                    let hit = view.legal_targets(card).find(|&(target, _)| view.is_own(target));
                    if let Some((target, _)) = hit {
                        return Some(Move::new(index, target));
                    }
                }
            }
        }

        fallback.map(|(_, mv)| mv)
    }
}

// =============================================================================
// Impossible
// =============================================================================

/// Every (card, caravan) pair on one scale, single pass, best strictly
/// greater wins:
///
/// | move | score |
/// |---|---|
/// | placement landing in band | 1000 |
/// | placement busting | -100 |
/// | other placement | 2 x new total |
/// | Jack on opponent card worth >= 5 | 999 |
/// | King doubling own caravan into band | 1000 |
/// | Queen on own caravan | 10 |
///
/// Scores come from `BotConfig`; the table shows the defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct Impossible;

impl Impossible {
    fn score(view: &BotView<'_>, target: Target, caravan: &Caravan, card: Card) -> Option<i64> {
        let weights = view.weights;
        let own = view.is_own(target);
        match card.effect() {
            None => {
                let total = score_with(caravan, card);
                Some(if view.rules.is_delivered(total) {
                    weights.placement_in_band_score
                } else if view.rules.is_bust(total) {
                    weights.bust_score
                } else {
                    weights.open_placement_factor * i64::from(total)
                })
            }
            Some(Effect::Jack) => caravan
                .last()
                .filter(|last| !own && last.value() >= weights.impossible_jack_threshold)
                .map(|_| weights.jack_score),
            Some(Effect::King) => caravan
                .score_if_doubled()
                .filter(|&total| own && view.rules.is_delivered(total))
                .map(|_| weights.king_score),
            Some(Effect::Queen) => own.then_some(weights.queen_score),
        }
    }
}

impl BotPolicy for Impossible {
    fn choose(&self, view: &BotView<'_>) -> Option<Move> {
        let mut best = None;
        for (index, card) in view.hand.iter().enumerate() {
            for (target, caravan) in view.legal_targets(card) {
                if let Some(score) = Self::score(view, target, caravan, card) {
                    offer(&mut best, score, Move::new(index, target));
                }
            }
        }
        best.map(|(_, mv)| mv)
    }
}

// =============================================================================
// Difficulty
// =============================================================================

/// Bot tier picked in the host's menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];
}

impl BotPolicy for Difficulty {
    fn choose(&self, view: &BotView<'_>) -> Option<Move> {
        match self {
            Difficulty::Easy => Easy.choose(view),
            Difficulty::Medium => Medium.choose(view),
            Difficulty::Hard => Hard.choose(view),
            Difficulty::Impossible => Impossible.choose(view),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown difficulty {0:?}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}
