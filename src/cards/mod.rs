//! Card system: semantics, the shared deck, and hands.
//!
//! ## Key Types
//!
//! - `Card`: a face; either a sequence card (Ace, numbers) or an `Effect`
//! - `Deck`: shuffled shared pool, drawn from the tail
//! - `Hand`: ordered cards held by one side

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{card_value, is_face_effect, Card, Effect, ParseCardError};
pub use deck::{create_deck, fill, Deck};
pub use hand::Hand;
