//! Card and rank table integration tests.

use std::collections::HashSet;

use cardstack::ranks::{BIG2_RANKS, CRIBBAGE_RANKS, POKER_RANKS};
use cardstack::{Card, DEFAULT_RANKS, ParseCardError, Suit, Value};

const fn card(value: Value, suit: Suit) -> Card {
    Card::new(value, suit)
}

#[test]
fn names_and_abbreviations() {
    let ace = card(Value::Ace, Suit::Spades);
    assert_eq!(ace.name(), "Ace of Spades");
    assert_eq!(ace.abbrev(), "AS");
    assert_eq!(ace.to_string(), "Ace of Spades");

    let ten = card(Value::Ten, Suit::Hearts);
    assert_eq!(ten.name(), "10 of Hearts");
    assert_eq!(ten.abbrev(), "10H");

    let two = card(Value::Two, Suit::Diamonds);
    assert_eq!(two.abbrev(), "2D");
    assert_eq!(card(Value::Queen, Suit::Clubs).abbrev(), "QC");
}

#[test]
fn jokers_have_no_suit() {
    let joker = Card::joker();
    assert!(joker.is_joker());
    assert_eq!(joker.suit(), None);
    assert_eq!(joker.name(), "Joker");
    assert_eq!(joker.abbrev(), "JKR");

    assert_eq!(card(Value::Joker, Suit::Spades), joker);
}

#[test]
fn parse_normalizes_case() {
    assert_eq!(
        Card::parse("ace", "SPADES").unwrap(),
        card(Value::Ace, Suit::Spades)
    );
    assert_eq!(
        Card::parse("10", "hEaRtS").unwrap(),
        card(Value::Ten, Suit::Hearts)
    );
    assert_eq!(Card::parse("joker", "None").unwrap(), Card::joker());
    assert_eq!("king".parse::<Value>().unwrap(), Value::King);
    assert_eq!("clubs".parse::<Suit>().unwrap(), Suit::Clubs);
}

#[test]
fn parse_rejects_unknown_names() {
    assert_eq!(
        Card::parse("Eleven", "Spades").unwrap_err(),
        ParseCardError::UnknownValue("Eleven".to_owned())
    );
    assert_eq!(
        Card::parse("Ace", "Stars").unwrap_err(),
        ParseCardError::UnknownSuit("Stars".to_owned())
    );
}

#[test]
fn equality_uses_value_and_suit() {
    let a = card(Value::Seven, Suit::Clubs);
    let b = Card::parse("7", "clubs").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, card(Value::Seven, Suit::Hearts));

    let set: HashSet<Card> = [a, b, card(Value::Seven, Suit::Hearts)].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn default_ranks_compare_value_then_suit() {
    let king_spades = card(Value::King, Suit::Spades);
    let queen_diamonds = card(Value::Queen, Suit::Diamonds);
    let ace_spades = card(Value::Ace, Suit::Spades);
    let ace_diamonds = card(Value::Ace, Suit::Diamonds);

    assert!(king_spades.gt(&queen_diamonds, None));
    assert!(queen_diamonds.lt(&king_spades, None));
    assert!(ace_spades.gt(&ace_diamonds, None));
    assert!(ace_spades.ge(&ace_spades, None));
    assert!(ace_spades.le(&ace_spades, None));
    assert!(ace_spades.eq(&ace_spades, None));
    assert!(ace_spades.ne(&ace_diamonds, None));
}

#[test]
fn suit_only_breaks_value_ties() {
    let three_diamonds = card(Value::Three, Suit::Diamonds);
    let two_spades = card(Value::Two, Suit::Spades);

    assert!(three_diamonds.gt(&two_spades, None));
    assert!(!two_spades.ge(&three_diamonds, None));
}

#[test]
fn suitless_tables_compare_values_only() {
    let ace_spades = card(Value::Ace, Suit::Spades);
    let ace_diamonds = card(Value::Ace, Suit::Diamonds);

    assert!(ace_spades.eq(&ace_diamonds, Some(&POKER_RANKS)));
    assert!(!ace_spades.gt(&ace_diamonds, Some(&POKER_RANKS)));

    let king = card(Value::King, Suit::Clubs);
    let ten = card(Value::Ten, Suit::Hearts);
    assert!(king.eq(&ten, Some(&CRIBBAGE_RANKS)));
}

#[test]
fn big2_ranks_twos_highest() {
    let two = card(Value::Two, Suit::Diamonds);
    let ace = card(Value::Ace, Suit::Spades);
    assert!(ace.gt(&two, None));
    assert!(two.gt(&ace, Some(&BIG2_RANKS)));
}

#[test]
fn jokers_rank_lowest() {
    let joker = Card::joker();
    let two = card(Value::Two, Suit::Diamonds);
    assert!(joker.lt(&two, None));
    assert!(joker.lt(&two, Some(&BIG2_RANKS)));
    assert_eq!(DEFAULT_RANKS.key(&joker), (0, 0));
}

#[test]
fn ord_follows_default_ranks() {
    let mut cards = vec![
        card(Value::Ace, Suit::Spades),
        Card::joker(),
        card(Value::Two, Suit::Hearts),
        card(Value::Two, Suit::Diamonds),
    ];
    cards.sort();

    assert_eq!(
        cards,
        vec![
            Card::joker(),
            card(Value::Two, Suit::Diamonds),
            card(Value::Two, Suit::Hearts),
            card(Value::Ace, Suit::Spades),
        ]
    );
}
