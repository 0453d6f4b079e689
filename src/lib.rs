//! # caravan-engine
//!
//! Rule engine and bot strategies for Caravan, a two-sided card duel.
//! Each side builds three caravans from a shared deck, trying to bring
//! their totals into the delivery band while the other side disrupts them
//! with face cards.
//!
//! ## Design Principles
//!
//! 1. **Host-driven**: No loop, input handling, or scheduling. The host
//!    calls in once per action and every call runs to completion.
//!
//! 2. **Explicit state**: Every call takes the round's `GameState`; there
//!    are no globals. A new round starts from a fresh `GameState`.
//!
//! 3. **Configuration over variants**: Win threshold, hand size, delivery
//!    band and discard end are `RulesConfig` values, so every shipped
//!    ruleset is one engine.
//!
//! ## Example
//!
//! ```
//! use caravan_engine::{legal_moves, Difficulty, GameState, RulesConfig, Side};
//!
//! let mut state = GameState::new(RulesConfig::default(), 42).unwrap();
//!
//! // Human turn: the host picks one of the legal moves
//! if let Some(&mv) = legal_moves(&state, Side::Player).first() {
//!     state.play_turn(Side::Player, mv).unwrap();
//! } else {
//!     state.discard(Side::Player);
//! }
//!
//! // Bot turn
//! state.bot_turn(Difficulty::Hard);
//!
//! assert!(state.result().is_none());
//! ```
//!
//! ## Modules
//!
//! - `core`: sides, moves, RNG, configuration, game state
//! - `cards`: card semantics, deck, hands
//! - `rules`: caravans, move validation, targeting, delivery
//! - `bot`: the four bot tiers and turn execution
//! - `logging`: optional stderr logger

pub mod bot;
pub mod cards;
pub mod core;
pub mod logging;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiscardEnd, GameRng, GameState, Move, RulesConfig, Side, SideMap, SideState, Target,
};

pub use crate::cards::{card_value, create_deck, fill, is_face_effect, Card, Deck, Effect, Hand};

pub use crate::rules::{
    caravan_score, delivered_caravans, is_valid_move, legal_moves, play_card, Caravan, Direction, GameResult,
    IllegalMove, Played, CARAVANS_PER_SIDE,
};

pub use crate::bot::{bot_turn, take_turn, BotConfig, BotPolicy, BotView, Difficulty, TurnOutcome};

pub use crate::logging::init_logging;
