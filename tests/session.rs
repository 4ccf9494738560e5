//! Shoe and session tests.

use bjtrainer::{
    Action, Card, DECK_SIZE, DealError, EvaluationError, OptionsError, PlayerStats, Round,
    Session, Shoe, Suit, TrainerOptions, parse_decks,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn session(decks: u8) -> Session {
    Session::new(TrainerOptions::default().with_decks(decks).with_seed(Some(7))).unwrap()
}

fn set_shoe_from_draws(session: &mut Session, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    session.shoe_mut().stack(cards);
}

#[test]
fn shoe_holds_full_decks() {
    let shoe = Shoe::seeded(3, 1);
    assert_eq!(shoe.remaining(), 3 * DECK_SIZE);
    assert_eq!(shoe.decks(), 3);
}

#[test]
fn seeded_shoes_deal_the_same_order() {
    let mut a = Shoe::seeded(2, 99);
    let mut b = Shoe::new(2, ChaCha8Rng::seed_from_u64(99));
    for _ in 0..2 * DECK_SIZE {
        assert_eq!(a.deal_card(false), b.deal_card(false));
    }
    assert_eq!(a.deal_card(false), None);
}

#[test]
fn shoe_contains_every_card_once_per_deck() {
    let mut shoe = Shoe::seeded(1, 5);
    let mut dealt = Vec::new();
    while let Some(card) = shoe.deal_card(false) {
        dealt.push((card.suit as u8, card.rank));
    }
    dealt.sort_unstable();
    dealt.dedup();
    assert_eq!(dealt.len(), DECK_SIZE);
}

#[test]
fn dealt_cards_carry_visibility() {
    let mut shoe = Shoe::seeded(1, 5);
    assert!(shoe.deal_card(true).unwrap().face_down);
    assert!(!shoe.deal_card(false).unwrap().face_down);
}

#[test]
fn refill_restores_the_shoe() {
    let mut shoe = Shoe::seeded(1, 3);
    shoe.stack(vec![card(Suit::Hearts, 2); 3]);
    assert!(shoe.needs_refill());

    shoe.refill();
    assert!(!shoe.needs_refill());
    assert_eq!(shoe.remaining(), DECK_SIZE);
}

#[test]
fn options_reject_bad_deck_counts() {
    assert_eq!(
        Session::new(TrainerOptions::default().with_decks(0)).unwrap_err(),
        OptionsError::InvalidDecks(0)
    );
    assert_eq!(
        Session::new(TrainerOptions::default().with_decks(9)).unwrap_err(),
        OptionsError::InvalidDecks(9)
    );
    assert!(TrainerOptions::default().with_decks(8).validate().is_ok());
}

#[test]
fn deck_answers_are_parsed_strictly() {
    assert_eq!(parse_decks("1"), Some(1));
    assert_eq!(parse_decks("8\n"), Some(8));
    assert_eq!(parse_decks(" 6"), Some(6));
    assert_eq!(parse_decks("0"), None);
    assert_eq!(parse_decks("-3"), None);
    assert_eq!(parse_decks("four"), None);
    assert_eq!(parse_decks(""), None);
    assert_eq!(parse_decks("300"), None);
}

#[test]
fn round_is_dealt_in_table_order() {
    let mut session = session(1);
    set_shoe_from_draws(
        &mut session,
        &[
            card(Suit::Hearts, 8),   // player
            card(Suit::Clubs, 6),    // dealer up
            card(Suit::Diamonds, 7), // player
            card(Suit::Spades, 10),  // dealer hole
        ],
    );

    let round = session.deal_round().unwrap();
    assert!(!round.refilled);
    assert_eq!(
        round.player.cards(),
        &[card(Suit::Hearts, 8), card(Suit::Diamonds, 7)]
    );
    assert_eq!(round.dealer.up_card(), Some(&card(Suit::Clubs, 6)));
    assert_eq!(
        round.dealer.hole_card(),
        Some(&card(Suit::Spades, 10).with_face_down(true))
    );
    assert_eq!(session.shoe().remaining(), 0);
}

#[test]
fn empty_shoe_is_refilled_before_dealing() {
    let mut session = session(2);
    set_shoe_from_draws(&mut session, &[card(Suit::Hearts, 8), card(Suit::Clubs, 6)]);

    let round = session.deal_round().unwrap();
    assert!(round.refilled);
    assert_eq!(session.shoe().remaining(), 2 * DECK_SIZE - 4);
}

#[test]
fn judge_records_stats() {
    let mut session = session(1);
    set_shoe_from_draws(
        &mut session,
        &[
            card(Suit::Hearts, 8),
            card(Suit::Clubs, 6),
            card(Suit::Diamonds, 7),
            card(Suit::Spades, 10),
        ],
    );
    let round = session.deal_round().unwrap();

    // Hard 15 against a 6 stands.
    let judgement = session.judge(&round, Action::Stand).unwrap();
    assert!(judgement.accurate);
    assert_eq!(judgement.prescribed, Action::Stand);

    let judgement = session.judge(&round, Action::Hit).unwrap();
    assert!(!judgement.accurate);
    assert_eq!(judgement.declared, Action::Hit);

    assert_eq!(
        session.stats(),
        PlayerStats {
            played: 2,
            correct: 1
        }
    );
    assert!((session.stats().percentage() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn judge_errors_leave_stats_untouched() {
    let mut session = session(1);
    let mut round: Round = session.deal_round().unwrap();
    round.player.add_card(card(Suit::Hearts, 2));

    assert_eq!(
        session.judge(&round, Action::Hit).unwrap_err(),
        EvaluationError::InvalidHandSize(3)
    );
    assert_eq!(session.stats(), PlayerStats::new());
}

#[test]
fn stats_start_at_zero_percent() {
    let stats = PlayerStats::default();
    assert_eq!(stats.played, 0);
    assert!(stats.percentage().abs() < f64::EPSILON);
}

#[test]
fn dealer_config_follows_options() {
    assert_eq!(session(6).dealer().decks, 6);
    assert_eq!(bjtrainer::DealerConfig::default().decks, 4);
}

#[test]
fn deal_error_is_reported() {
    assert_eq!(
        DealError::NotEnoughCards.to_string(),
        "not enough cards in the shoe"
    );
}
