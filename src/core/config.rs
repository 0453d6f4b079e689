//! Round configuration.
//!
//! The host injects a `RulesConfig` when it starts a round. Every ruleset
//! variant the game has shipped with (two or three delivered caravans to
//! win, discarding from either end of the hand) is a value here rather
//! than a separate code path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest deck a round accepts, in packs.
pub const MAX_PACKS: usize = 16;

/// Which end of the hand a forced discard removes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscardEnd {
    /// First card in the hand.
    Front,
    /// Last card in the hand (the most recently drawn).
    #[default]
    Back,
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("win threshold {0} must be between 1 and 3")]
    WinThreshold(usize),

    #[error("hand size must be at least 1")]
    HandSize,

    #[error("delivery band {min}..={max} is empty")]
    DeliveryBand { min: u32, max: u32 },

    #[error("pack count {0} must be between 1 and 16")]
    Packs(usize),
}

/// Rules for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Delivered caravans needed to win the round.
    pub win_threshold: usize,

    /// Hands are refilled up to this many cards.
    pub hand_size: usize,

    /// Lowest delivered caravan score (inclusive).
    pub delivery_min: u32,

    /// Highest delivered caravan score (inclusive).
    pub delivery_max: u32,

    /// Number of packs in the shared deck; each pack holds every rank
    /// four times.
    pub packs: usize,

    /// End of the hand a forced discard takes from.
    pub discard_end: DiscardEnd,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            win_threshold: 2,
            hand_size: 8,
            delivery_min: 21,
            delivery_max: 26,
            packs: 2,
            discard_end: DiscardEnd::Back,
        }
    }
}

impl RulesConfig {
    /// Set the delivered-caravan count needed to win.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: usize) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the hand refill target.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the inclusive delivery band.
    #[must_use]
    pub fn with_delivery_band(mut self, min: u32, max: u32) -> Self {
        self.delivery_min = min;
        self.delivery_max = max;
        self
    }

    /// Set the number of packs in the deck.
    #[must_use]
    pub fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    /// Set which end of the hand a forced discard takes from.
    #[must_use]
    pub fn with_discard_end(mut self, end: DiscardEnd) -> Self {
        self.discard_end = end;
        self
    }

    /// Whether a caravan score counts as delivered.
    #[must_use]
    pub fn is_delivered(&self, score: u32) -> bool {
        (self.delivery_min..=self.delivery_max).contains(&score)
    }

    /// Whether a caravan score has gone past the band.
    #[must_use]
    pub fn is_bust(&self, score: u32) -> bool {
        score > self.delivery_max
    }

    /// Check the values are playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=crate::rules::CARAVANS_PER_SIDE).contains(&self.win_threshold) {
            return Err(ConfigError::WinThreshold(self.win_threshold));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::HandSize);
        }
        if self.delivery_min > self.delivery_max {
            return Err(ConfigError::DeliveryBand {
                min: self.delivery_min,
                max: self.delivery_max,
            });
        }
        if !(1..=MAX_PACKS).contains(&self.packs) {
            return Err(ConfigError::Packs(self.packs));
        }
        Ok(())
    }
}
