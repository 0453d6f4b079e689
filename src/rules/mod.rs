//! Caravan rules: sequences, legality, effects, targeting, delivery.
//!
//! - `caravan`: the sequence type, derived direction and score
//! - `validator`: caravan-local legality and the one mutating play
//! - `targeting`: which side's caravans a card may reach
//! - `engine`: round outcome and legal-move enumeration

pub mod caravan;
pub mod engine;
pub mod error;
pub mod targeting;
pub mod validator;

pub use caravan::{caravan_score, delivered_caravans, Caravan, Direction, CARAVANS_PER_SIDE};
pub use engine::{legal_moves, GameResult};
pub use error::IllegalMove;
pub use targeting::{check_target, scope, targets, TargetScope};
pub use validator::{check, is_valid_move, play_card, try_play, Played};
