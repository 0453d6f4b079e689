//! Rule scenarios through the public API: sequencing, face effects,
//! targeting, locking, delivery.

use caravan_engine::{
    delivered_caravans, is_valid_move, play_card, Caravan, Card, Deck, Direction, GameResult, GameState,
    Hand, IllegalMove, Move, Played, RulesConfig, Side, SideState, Target,
};

fn numbers(values: &[u16]) -> Caravan {
    Caravan::from_cards(values.iter().map(|&v| Card::Number(v)))
}

fn empty_caravans() -> Vec<Caravan> {
    vec![Caravan::new(), Caravan::new(), Caravan::new()]
}

// =============================================================================
// Sequencing and King
// =============================================================================

#[test]
fn test_five_nine_three_king() {
    let mut hand = Hand::from_cards([Card::Number(5), Card::Number(9), Card::Number(3), Card::KING]);
    let mut caravans = empty_caravans();
    let config = RulesConfig::default();

    assert!(play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!(caravans[0].cards(), &[Card::Number(5)]);
    assert_eq!(caravans[0].score(), 5);

    assert!(play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!(caravans[0].direction(), Some(Direction::Ascending));

    // 3 < 9 breaks the ascending caravan
    let before = (hand.clone(), caravans.clone());
    assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!((hand.clone(), caravans.clone()), before);

    // King doubles the 9
    assert!(play_card(&mut hand, &mut caravans, 1, 0));
    assert_eq!(caravans[0].cards(), &[Card::Number(5), Card::Number(18)]);
    assert_eq!(caravans[0].score(), 23);
    assert_eq!(delivered_caravans(&caravans, &config), 1);

    assert_eq!(hand.cards(), &[Card::Number(3)]);
}

#[test]
fn test_king_on_ace_fails() {
    let mut hand = Hand::from_cards([Card::KING]);
    let mut caravans = vec![Caravan::from_cards([Card::Number(3), Card::Ace])];

    assert!(is_valid_move(&caravans[0], Card::KING));
    assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!(hand.len(), 1);
}

// =============================================================================
// Jack and Queen
// =============================================================================

#[test]
fn test_jack_on_opponent_caravan() {
    let mut state = GameState::from_parts(
        RulesConfig::default(),
        Deck::default(),
        SideState::new(Hand::from_cards([Card::Number(2), Card::JACK]), Default::default()),
        SideState::new(Hand::new(), [numbers(&[7, 10]), Caravan::new(), Caravan::new()]),
    )
    .unwrap();

    let played = state.play(Side::Player, Move::new(1, Target::new(Side::Bot, 0)));

    assert_eq!(played, Ok(Played::Removed(Card::Number(10))));
    assert_eq!(state.caravans(Side::Bot)[0].cards(), &[Card::Number(7)]);
    assert_eq!(state.hand(Side::Player).cards(), &[Card::Number(2)]);
}

#[test]
fn test_jack_ignores_sequencing() {
    // Nothing could extend this caravan, but a Jack can still hit it
    let mut hand = Hand::from_cards([Card::Number(10), Card::JACK]);
    let mut caravans = vec![numbers(&[2, 10])];

    assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    assert!(play_card(&mut hand, &mut caravans, 1, 0));
    assert_eq!(caravans[0].cards(), &[Card::Number(2)]);
}

#[test]
fn test_queen_flips_descending_to_ascending() {
    let mut hand = Hand::from_cards([Card::QUEEN, Card::Number(3), Card::Number(5)]);
    let mut caravans = vec![numbers(&[4, 2])];

    assert!(play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!(caravans[0].cards(), &[Card::Number(2), Card::Number(4)]);
    assert_eq!(caravans[0].direction(), Some(Direction::Ascending));

    // 3 would have continued the old descending run; now it must exceed 4
    assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    assert!(play_card(&mut hand, &mut caravans, 1, 0));
    assert_eq!(caravans[0].score(), 11);
}

#[test]
fn test_queen_needs_two_cards() {
    let mut hand = Hand::from_cards([Card::QUEEN]);
    let mut caravans = vec![numbers(&[4])];

    assert!(is_valid_move(&caravans[0], Card::QUEEN));
    assert!(!play_card(&mut hand, &mut caravans, 0, 0));
    assert_eq!(hand.len(), 1);
}

// =============================================================================
// Targeting
// =============================================================================

#[test]
fn test_targeting_is_the_same_for_both_sides() {
    let mut state = GameState::from_parts(
        RulesConfig::default(),
        Deck::default(),
        SideState::new(Hand::from_cards([Card::Number(6), Card::KING]), [numbers(&[9]), Caravan::new(), Caravan::new()]),
        SideState::new(Hand::from_cards([Card::Number(6), Card::KING]), [numbers(&[9]), Caravan::new(), Caravan::new()]),
    )
    .unwrap();

    for side in Side::ALL {
        let foe = side.opponent();
        assert_eq!(
            state.play(side, Move::new(0, Target::new(foe, 1))),
            Err(IllegalMove::OpponentCaravan)
        );
    }

    // Player doubles the bot's 9 to 18, then the bot doubles that to 36
    assert!(state.play(Side::Player, Move::new(1, Target::new(Side::Bot, 0))).is_ok());
    assert!(state.play(Side::Bot, Move::new(1, Target::new(Side::Bot, 0))).is_ok());
    assert_eq!(state.caravans(Side::Bot)[0].cards(), &[Card::Number(36)]);
    assert_eq!(state.caravans(Side::Player)[0].cards(), &[Card::Number(9)]);
}

// =============================================================================
// Locking
// =============================================================================

#[test]
fn test_locking_is_terminal() {
    let mut state = GameState::from_parts(
        RulesConfig::default(),
        Deck::default(),
        SideState::new(
            Hand::from_cards([Card::Number(8), Card::JACK, Card::QUEEN, Card::KING, Card::Ace]),
            [numbers(&[3, 5]), Caravan::new(), Caravan::new()],
        ),
        SideState::default(),
    )
    .unwrap();
    state.lock_caravan(Side::Player, 0).unwrap();
    let before = state.side(Side::Player).clone();

    for index in 0..5 {
        let result = state.play(Side::Player, Move::new(index, Target::new(Side::Player, 0)));
        assert_eq!(result, Err(IllegalMove::Locked));
    }
    assert_eq!(state.side(Side::Player), &before);
    assert!(state.caravans(Side::Player)[0].is_locked());
}

// =============================================================================
// Delivery
// =============================================================================

#[test]
fn test_win_threshold_is_configurable() {
    let caravans = [numbers(&[10, 9, 2]), numbers(&[10, 8, 5]), numbers(&[4, 6])];

    for (threshold, expected) in [(1, Some(GameResult::Winner(Side::Bot))), (2, Some(GameResult::Winner(Side::Bot))), (3, None)] {
        let state = GameState::from_parts(
            RulesConfig::default().with_win_threshold(threshold),
            Deck::from_cards([Card::Ace]),
            SideState::default(),
            SideState::new(Hand::new(), caravans.clone()),
        )
        .unwrap();
        assert_eq!(state.delivered(Side::Bot), 2);
        assert_eq!(state.result(), expected, "threshold {}", threshold);
    }
}

#[test]
fn test_custom_delivery_band() {
    let config = RulesConfig::default().with_delivery_band(10, 12);
    let caravans = [numbers(&[10, 2]), numbers(&[10, 9, 2]), numbers(&[9])];
    assert_eq!(delivered_caravans(&caravans, &config), 1);
}
