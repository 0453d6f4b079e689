//! Bot decision engine.
//!
//! Four deterministic, rule-based tiers behind one `BotPolicy` trait. A
//! policy picks a move from a read-only `BotView`; `take_turn` plays it
//! through the same `GameState::play` the human uses, or discards when
//! the policy finds nothing.
//!
//! ## Modules
//!
//! - `config`: heuristic weights and thresholds
//! - `policy`: the view, the trait, the four tiers and `Difficulty`
//! - `turn`: turn execution and the discard fallback

pub mod config;
pub mod policy;
pub mod turn;

pub use config::BotConfig;
pub use policy::{BotPolicy, BotView, Difficulty, Easy, Hard, Impossible, Medium, ParseDifficultyError};
pub use turn::{bot_turn, take_turn, TurnOutcome};
