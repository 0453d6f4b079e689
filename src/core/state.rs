//! Game state for one round.
//!
//! ## SideState
//!
//! What one side owns: a hand and three caravans.
//!
//! ## GameState
//!
//! Complete round state:
//! - Rules configuration
//! - Shared deck
//! - Both sides
//!
//! A `GameState` is built fresh for every round and owns everything it
//! touches. The host never edits hands or caravans directly; it goes
//! through `play`, `discard`, `refill` and `lock_caravan`.

use log::debug;

use super::action::{Move, Target};
use super::config::{ConfigError, RulesConfig};
use super::rng::GameRng;
use super::side::{Side, SideMap};
use crate::bot::{Difficulty, TurnOutcome};
use crate::cards::{Card, Deck, Hand};
use crate::rules::caravan::{delivered_caravans, Caravan, CARAVANS_PER_SIDE};
use crate::rules::engine::GameResult;
use crate::rules::error::IllegalMove;
use crate::rules::targeting::check_target;
use crate::rules::validator::{self, Played};

/// One side's hand and caravans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SideState {
    pub(crate) hand: Hand,
    pub(crate) caravans: [Caravan; CARAVANS_PER_SIDE],
}

impl SideState {
    /// Side with an explicit hand and caravans (scenario setup).
    #[must_use]
    pub fn new(hand: Hand, caravans: [Caravan; CARAVANS_PER_SIDE]) -> Self {
        Self { hand, caravans }
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn caravans(&self) -> &[Caravan; CARAVANS_PER_SIDE] {
        &self.caravans
    }
}

/// Complete state of one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: RulesConfig,
    deck: Deck,
    sides: SideMap<SideState>,
}

impl GameState {
    /// Start a round: shuffle a fresh deck and deal both hands.
    ///
    /// The player is dealt first, then the bot.
    pub fn new(config: RulesConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut GameRng::new(seed))
    }

    /// Start a round with a seed from the thread RNG.
    pub fn with_entropy(config: RulesConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, &mut GameRng::from_entropy())
    }

    fn with_rng(config: RulesConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = Deck::shuffled(config.packs, rng);
        let mut state = Self {
            config,
            deck,
            sides: SideMap::with_default(),
        };
        for side in Side::ALL {
            state.refill(side);
        }
        Ok(state)
    }

    /// Assemble a state from explicit parts, without dealing.
    pub fn from_parts(
        config: RulesConfig,
        deck: Deck,
        player: SideState,
        bot: SideState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            deck,
            sides: SideMap::from_pair(player, bot),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side]
    }

    #[must_use]
    pub fn hand(&self, side: Side) -> &Hand {
        &self.sides[side].hand
    }

    #[must_use]
    pub fn caravans(&self, side: Side) -> &[Caravan; CARAVANS_PER_SIDE] {
        &self.sides[side].caravans
    }

    /// Caravan at `target`, if the index is in range.
    #[must_use]
    pub fn caravan(&self, target: Target) -> Option<&Caravan> {
        self.sides[target.side].caravans.get(target.caravan)
    }

    // === Moves ===

    /// Play a card for `side`.
    ///
    /// Sequence cards must target `side`'s own caravans; face cards may
    /// target either side. Nothing changes when the move is illegal.
    pub fn play(&mut self, side: Side, mv: Move) -> Result<Played, IllegalMove> {
        let card = self.sides[side]
            .hand
            .get(mv.hand_index)
            .ok_or(IllegalMove::NoSuchCard(mv.hand_index))?;
        check_target(side, card, mv.target)?;

        let (me, them) = self.sides.split_mut(side);
        let caravan = if mv.target.side == side {
            &mut me.caravans[mv.target.caravan]
        } else {
            &mut them.caravans[mv.target.caravan]
        };
        let played = validator::try_play(&mut me.hand, caravan, mv.hand_index)?;
        debug!("{} played {} ({})", side, card, mv);
        Ok(played)
    }

    /// Play a card and, if it was legal, refill `side`'s hand.
    ///
    /// This is the human turn: the hand is topped up right after a
    /// successful play.
    pub fn play_turn(&mut self, side: Side, mv: Move) -> Result<Played, IllegalMove> {
        let played = self.play(side, mv)?;
        self.refill(side);
        Ok(played)
    }

    /// Throw away one card from the configured end of `side`'s hand.
    pub fn discard(&mut self, side: Side) -> Option<Card> {
        let card = self.sides[side].hand.discard(self.config.discard_end);
        if let Some(card) = card {
            debug!("{} discarded {}", side, card);
        }
        card
    }

    /// Top `side`'s hand up to the configured size. Returns cards drawn.
    pub fn refill(&mut self, side: Side) -> usize {
        let drawn = self.deck.fill(&mut self.sides[side].hand, self.config.hand_size);
        if drawn > 0 {
            debug!("{} drew {} ({} left in deck)", side, drawn, self.deck.len());
        }
        drawn
    }

    /// Close a caravan for the rest of the round.
    pub fn lock_caravan(&mut self, side: Side, index: usize) -> Result<(), IllegalMove> {
        self.sides[side]
            .caravans
            .get_mut(index)
            .ok_or(IllegalMove::NoSuchCaravan(index))?
            .lock();
        Ok(())
    }

    /// Run one bot turn for the bot side with default heuristics.
    pub fn bot_turn(&mut self, difficulty: Difficulty) -> TurnOutcome {
        crate::bot::bot_turn(self, difficulty)
    }

    // === Delivery ===

    /// Delivered caravans for `side`.
    #[must_use]
    pub fn delivered(&self, side: Side) -> usize {
        delivered_caravans(&self.sides[side].caravans, &self.config)
    }

    /// Deck and both hands are empty: nobody can act any more.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.sides.iter().all(|(_, side)| side.hand.is_empty())
    }

    /// Outcome of the round, or `None` while it continues.
    ///
    /// The player is checked first, so if both sides reach the threshold
    /// on the same action the player wins.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        let winner = self
            .sides
            .iter()
            .find(|(_, state)| delivered_caravans(&state.caravans, &self.config) >= self.config.win_threshold);
        if let Some((side, _)) = winner {
            return Some(GameResult::Winner(side));
        }
        if self.is_exhausted() {
            return Some(GameResult::Draw);
        }
        None
    }
}
