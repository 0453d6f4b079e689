//! Bot heuristic weights.

use serde::{Deserialize, Serialize};

/// Weights and thresholds used by the bot policies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    /// Bonus added to the raw score of a placement that lands in band
    /// (Medium and Hard).
    pub in_band_bonus: i64,

    /// Score of a placement that busts past the band (Hard and Impossible).
    pub bust_score: i64,

    /// Hard jacks an opponent caravan whose last card is worth at least this.
    pub hard_jack_threshold: u32,

    /// Impossible jacks an opponent caravan whose last card is worth at least this.
    pub impossible_jack_threshold: u32,

    /// Impossible: placement landing in band.
    pub placement_in_band_score: i64,

    /// Impossible: other placements score `raw * open_placement_factor`.
    pub open_placement_factor: i64,

    /// Impossible: qualifying Jack removal.
    pub jack_score: i64,

    /// Impossible: King doubling a caravan into band.
    pub king_score: i64,

    /// Impossible: any Queen swap.
    pub queen_score: i64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            in_band_bonus: 1000,
            bust_score: -100,
            hard_jack_threshold: 8,
            impossible_jack_threshold: 5,
            placement_in_band_score: 1000,
            open_placement_factor: 2,
            jack_score: 999,
            king_score: 1000,
            queen_score: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale() {
        let config = BotConfig::default();
        // A qualifying Jack sits just under an in-band placement or King
        assert!(config.jack_score < config.placement_in_band_score);
        assert_eq!(config.king_score, config.placement_in_band_score);
        assert!(config.bust_score < 0);
    }

    #[test]
    fn test_serde() {
        let config = BotConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
