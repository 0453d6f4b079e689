//! Move legality and execution against a single caravan.
//!
//! The validator only knows about one caravan and one card. Whose caravan
//! it is does not matter here; that rule lives in `rules::targeting`.
//!
//! ## Atomicity
//!
//! `check` runs every precondition first and `try_play` mutates only
//! after it passes, so a rejected move leaves the hand and caravan exactly
//! as they were.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Effect, Hand};
use crate::rules::caravan::{Caravan, Direction};
use crate::rules::error::IllegalMove;

/// What a successful play did to its caravan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Played {
    /// A sequence card was appended.
    Placed(Card),
    /// A Jack removed this card from the end.
    Removed(Card),
    /// A Queen swapped the first two cards.
    Swapped,
    /// A King doubled the last card.
    Doubled { from: Card, to: Card },
}

/// Caravan-local legality, ignoring Queen/King length and type checks.
///
/// - nothing goes on a locked caravan
/// - face cards need at least one card to act on
/// - the first two sequence cards are free
/// - after that a sequence card must strictly continue the direction
///
/// Pure: never mutates, same answer for the same inputs.
#[must_use]
pub fn is_valid_move(caravan: &Caravan, card: Card) -> bool {
    if caravan.is_locked() {
        return false;
    }
    if card.is_face_effect() {
        return !caravan.is_empty();
    }
    continues_sequence(caravan, card).is_ok()
}

/// Full precondition check for playing `card` on `caravan`.
pub fn check(caravan: &Caravan, card: Card) -> Result<(), IllegalMove> {
    if caravan.is_locked() {
        return Err(IllegalMove::Locked);
    }

    match card.effect() {
        None => continues_sequence(caravan, card),
        Some(Effect::Jack) => {
            if caravan.is_empty() {
                return Err(IllegalMove::EmptyCaravan(card));
            }
            Ok(())
        }
        Some(Effect::Queen) => {
            if caravan.len() < 2 {
                return Err(IllegalMove::TooShortToSwap);
            }
            Ok(())
        }
        Some(Effect::King) => {
            let last = caravan.last().ok_or(IllegalMove::EmptyCaravan(card))?;
            doubled(last).map(|_| ())
        }
    }
}

/// Play `hand[hand_index]` on `caravan`.
///
/// On success the card leaves the hand and its effect is applied. On
/// failure nothing changes.
pub fn try_play(
    hand: &mut Hand,
    caravan: &mut Caravan,
    hand_index: usize,
) -> Result<Played, IllegalMove> {
    let card = hand.get(hand_index).ok_or(IllegalMove::NoSuchCard(hand_index))?;
    check(caravan, card)?;

    let played = match card.effect() {
        None => {
            caravan.push(card);
            Played::Placed(card)
        }
        Some(Effect::Jack) => match caravan.pop() {
            Some(removed) => Played::Removed(removed),
            None => return Err(IllegalMove::EmptyCaravan(card)),
        },
        Some(Effect::Queen) => {
            caravan.swap_front();
            Played::Swapped
        }
        Some(Effect::King) => {
            let from = caravan.last().ok_or(IllegalMove::EmptyCaravan(card))?;
            let to = doubled(from)?;
            caravan.replace_last(to);
            Played::Doubled { from, to }
        }
    };

    hand.take(hand_index);
    debug!("played {} -> {:?}, caravan score {}", card, played, caravan.score());
    Ok(played)
}

/// Boolean form of `try_play` over a side's caravans.
///
/// `false` means the move was illegal (including out-of-range indices)
/// and nothing changed.
pub fn play_card(
    hand: &mut Hand,
    caravans: &mut [Caravan],
    hand_index: usize,
    caravan_index: usize,
) -> bool {
    match caravans.get_mut(caravan_index) {
        Some(caravan) => try_play(hand, caravan, hand_index).is_ok(),
        None => false,
    }
}

fn continues_sequence(caravan: &Caravan, card: Card) -> Result<(), IllegalMove> {
    let (Some(direction), Some(last)) = (caravan.direction(), caravan.last()) else {
        return Ok(());
    };
    let ok = match direction {
        Direction::Ascending => card.value() > last.value(),
        Direction::Descending => card.value() < last.value(),
    };
    if ok {
        Ok(())
    } else {
        Err(IllegalMove::BreaksDirection {
            card,
            last,
            direction,
        })
    }
}

fn doubled(last: Card) -> Result<Card, IllegalMove> {
    match last {
        Card::Number(_) => last.doubled().ok_or(IllegalMove::DoubleOverflow(last)),
        other => Err(IllegalMove::NotANumber(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(values: &[u16]) -> Caravan {
        Caravan::from_cards(values.iter().map(|&v| Card::Number(v)))
    }

    #[test]
    fn test_first_two_cards_are_free() {
        assert!(is_valid_move(&Caravan::new(), Card::Number(10)));
        assert!(is_valid_move(&Caravan::new(), Card::Ace));
        assert!(is_valid_move(&numbers(&[5]), Card::Number(2)));
        assert!(is_valid_move(&numbers(&[5]), Card::Number(5)));
        assert!(is_valid_move(&numbers(&[5]), Card::Number(9)));
    }

    #[test]
    fn test_direction_is_strict() {
        let up = numbers(&[5, 7]);
        assert!(is_valid_move(&up, Card::Number(8)));
        assert!(!is_valid_move(&up, Card::Number(7)));
        assert!(!is_valid_move(&up, Card::Number(3)));

        let down = numbers(&[7, 5]);
        assert!(is_valid_move(&down, Card::Number(4)));
        assert!(is_valid_move(&down, Card::Ace));
        assert!(!is_valid_move(&down, Card::Number(5)));
        assert!(!is_valid_move(&down, Card::Number(6)));
    }

    #[test]
    fn test_face_cards_need_a_target() {
        for face in [Card::JACK, Card::QUEEN, Card::KING] {
            assert!(!is_valid_move(&Caravan::new(), face));
            assert!(is_valid_move(&numbers(&[3]), face));
        }
    }

    #[test]
    fn test_locked_rejects_everything() {
        let mut caravan = numbers(&[3, 4]);
        caravan.lock();
        for card in Card::faces() {
            assert!(!is_valid_move(&caravan, card));
            assert_eq!(check(&caravan, card), Err(IllegalMove::Locked));
        }
    }

    #[test]
    fn test_check_effect_preconditions() {
        assert_eq!(check(&numbers(&[3]), Card::QUEEN), Err(IllegalMove::TooShortToSwap));
        assert_eq!(
            check(&Caravan::new(), Card::KING),
            Err(IllegalMove::EmptyCaravan(Card::KING))
        );
        assert_eq!(
            check(&Caravan::from_cards([Card::Ace]), Card::KING),
            Err(IllegalMove::NotANumber(Card::Ace))
        );
        assert_eq!(
            check(&numbers(&[3, 4]), Card::Number(2)),
            Err(IllegalMove::BreaksDirection {
                card: Card::Number(2),
                last: Card::Number(4),
                direction: Direction::Ascending,
            })
        );
        assert!(check(&numbers(&[3, 4]), Card::QUEEN).is_ok());
    }

    #[test]
    fn test_try_play_sequence() {
        let mut hand = Hand::from_cards([Card::Number(5), Card::Number(9)]);
        let mut caravan = Caravan::new();

        assert_eq!(try_play(&mut hand, &mut caravan, 0), Ok(Played::Placed(Card::Number(5))));
        assert_eq!(try_play(&mut hand, &mut caravan, 0), Ok(Played::Placed(Card::Number(9))));
        assert!(hand.is_empty());
        assert_eq!(caravan.score(), 14);
        assert_eq!(caravan.direction(), Some(Direction::Ascending));
    }

    #[test]
    fn test_jack_removes_last() {
        let mut hand = Hand::from_cards([Card::JACK]);
        let mut caravan = numbers(&[7, 10]);

        assert_eq!(
            try_play(&mut hand, &mut caravan, 0),
            Ok(Played::Removed(Card::Number(10)))
        );
        assert_eq!(caravan.cards(), &[Card::Number(7)]);
        assert!(hand.is_empty());
    }

    #[test]
    fn test_queen_flips_direction() {
        let mut hand = Hand::from_cards([Card::QUEEN]);
        let mut caravan = numbers(&[4, 2]);

        assert_eq!(try_play(&mut hand, &mut caravan, 0), Ok(Played::Swapped));
        assert_eq!(caravan.cards(), &[Card::Number(2), Card::Number(4)]);
        assert_eq!(caravan.direction(), Some(Direction::Ascending));
    }

    #[test]
    fn test_king_doubles_and_can_repeat() {
        let mut hand = Hand::from_cards([Card::KING, Card::KING]);
        let mut caravan = numbers(&[5, 9]);

        assert_eq!(
            try_play(&mut hand, &mut caravan, 0),
            Ok(Played::Doubled {
                from: Card::Number(9),
                to: Card::Number(18)
            })
        );
        assert_eq!(caravan.score(), 23);

        assert!(try_play(&mut hand, &mut caravan, 0).is_ok());
        assert_eq!(caravan.last(), Some(Card::Number(36)));
    }

    #[test]
    fn test_failed_play_is_atomic() {
        let mut hand = Hand::from_cards([Card::Number(3), Card::QUEEN]);
        let mut caravan = numbers(&[5, 9]);
        let (hand_before, caravan_before) = (hand.clone(), caravan.clone());

        assert!(try_play(&mut hand, &mut caravan, 0).is_err());
        assert_eq!(try_play(&mut hand, &mut caravan, 7), Err(IllegalMove::NoSuchCard(7)));

        let mut single = numbers(&[5]);
        let single_before = single.clone();
        assert!(try_play(&mut hand, &mut single, 1).is_err());

        assert_eq!(hand, hand_before);
        assert_eq!(caravan, caravan_before);
        assert_eq!(single, single_before);
    }

    #[test]
    fn test_play_card_bool() {
        let mut hand = Hand::from_cards([Card::Number(6)]);
        let mut caravans = [Caravan::new(), Caravan::new(), Caravan::new()];

        assert!(!play_card(&mut hand, &mut caravans, 0, 3));
        assert!(play_card(&mut hand, &mut caravans, 0, 2));
        assert_eq!(caravans[2].score(), 6);
        assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    }
}
