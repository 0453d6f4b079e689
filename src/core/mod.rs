//! Core engine types: sides, moves, RNG, configuration, game state.

pub mod action;
pub mod config;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Move, Target};
pub use config::{ConfigError, DiscardEnd, RulesConfig, MAX_PACKS};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{GameState, SideState};
