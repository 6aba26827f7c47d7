//! Deck integration tests.

use std::collections::HashSet;

use cardstack::ranks::BIG2_RANKS;
use cardstack::tools::{build_cards, compare_stacks};
use cardstack::{Card, DECK_SIZE, Deck, DeckOptions, End, Stack, Suit, Value};

fn fresh_deck() -> Deck {
    Deck::new(DeckOptions::default(), 1)
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default()
        .with_jokers(true)
        .with_num_jokers(3)
        .with_rebuild(true)
        .with_re_shuffle(true)
        .with_build(false)
        .with_ranks(BIG2_RANKS);

    assert!(options.jokers);
    assert_eq!(options.num_jokers, 3);
    assert!(options.rebuild);
    assert!(options.re_shuffle);
    assert!(!options.build);
    assert_eq!(options.ranks, BIG2_RANKS);
}

#[test]
fn new_deck_holds_each_card_once() {
    let deck = fresh_deck();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.decks_used(), 1);

    let unique: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for value in Value::STANDARD {
        for suit in Suit::ALL {
            assert!(unique.contains(&Card::new(value, suit)));
        }
    }
}

#[test]
fn build_replaces_contents() {
    let mut deck = fresh_deck();
    let _ = deck.deal(10, End::Top);

    deck.build(false, 0);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.decks_used(), 2);

    deck.build(false, 0);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.decks_used(), 3);
}

#[test]
fn unbuilt_deck_is_empty() {
    let mut deck = Deck::new(DeckOptions::default().with_build(false), 1);
    assert!(deck.is_empty());
    assert_eq!(deck.decks_used(), 0);

    deck.build(false, 0);
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn deal_comes_off_the_top_in_order() {
    let mut deck = fresh_deck();
    let dealt = deck.deal(4, End::Top);

    let names: Vec<String> = dealt.iter().map(Card::name).collect();
    assert_eq!(
        names,
        ["Ace of Spades", "Ace of Hearts", "Ace of Clubs", "Ace of Diamonds"]
    );
    assert_eq!(deck.len(), 48);
}

#[test]
fn deal_rebuilds_when_asked() {
    let mut deck = fresh_deck();
    let dealt = deck.deal_with(53, true, false, End::Top);

    assert_eq!(dealt.len(), 53);
    assert_eq!(deck.len(), 51);
    assert_eq!(deck.decks_used(), 2);
    assert_eq!(dealt[52].abbrev(), "AS");
}

#[test]
fn deal_rebuilds_from_options() {
    let mut deck = Deck::new(DeckOptions::default().with_rebuild(true), 1);
    let dealt = deck.deal(60, End::Top);

    assert_eq!(dealt.len(), 60);
    assert_eq!(deck.len(), 44);
    assert_eq!(deck.decks_used(), 2);
}

#[test]
fn deal_without_rebuild_stops_short() {
    let mut deck = fresh_deck();
    let dealt = deck.deal(60, End::Top);

    assert_eq!(dealt.len(), DECK_SIZE);
    assert!(deck.is_empty());
    assert_eq!(deck.decks_used(), 1);
    assert!(deck.deal(1, End::Top).is_empty());
}

#[test]
fn deal_reshuffles_after_rebuild() {
    let mut deck = fresh_deck();
    let _ = deck.deal_with(DECK_SIZE + 10, true, true, End::Top);

    assert_eq!(deck.len(), 42);
    let canonical = Stack::from_cards(build_cards(false, 0));
    assert_ne!(deck.slice(..), canonical.slice(..42));
}

#[test]
fn jokers_from_options_and_build() {
    let options = DeckOptions::default().with_jokers(true).with_num_jokers(2);
    let mut deck = Deck::new(options, 1);
    assert_eq!(deck.len(), DECK_SIZE + 2);
    assert!(deck[0].is_joker() && deck[1].is_joker());

    let bottom = deck.deal(2, End::Bottom);
    assert!(bottom.iter().all(Card::is_joker));

    deck.build(true, 3);
    assert_eq!(deck.len(), DECK_SIZE + 3);

    let mut plain = fresh_deck();
    plain.build(true, 1);
    assert_eq!(plain.len(), DECK_SIZE + 1);
    assert_eq!(plain.find("Joker", 0, false, None), vec![0]);
}

#[test]
fn same_seed_shuffles_the_same() {
    let mut a = Deck::new(DeckOptions::default(), 99);
    let mut b = Deck::new(DeckOptions::default(), 99);
    a.shuffle(1);
    b.shuffle(1);

    assert_eq!(a, b);
    assert_ne!(a, fresh_deck());
    assert!(compare_stacks(&a.slice(..), &build_cards(false, 0)));
}

#[test]
fn stack_operations_through_deref() {
    let mut deck = fresh_deck();
    assert_eq!(deck.find("AS", 0, false, None), vec![51]);

    let aces = deck.get("Ace", 0, false, None).unwrap();
    assert_eq!(aces.len(), 4);
    assert_eq!(deck.len(), 48);

    deck.reverse();
    deck.sort(None);
    assert!(deck.is_sorted(None));
}

#[test]
fn deck_ranks_come_from_options() {
    let mut deck = Deck::new(DeckOptions::default().with_ranks(BIG2_RANKS), 1);
    deck.sort(None);
    assert_eq!(*deck.at(-1).unwrap(), Card::new(Value::Two, Suit::Spades));
}

#[test]
fn random_card_uses_deck_generator() {
    let mut deck = fresh_deck();

    let card = deck.random_card(true).unwrap();
    assert_eq!(deck.len(), 51);
    assert!(!deck.contains(&card));
}

#[test]
fn merge_and_convert() {
    let merged = fresh_deck() + fresh_deck();
    assert_eq!(merged.len(), 2 * DECK_SIZE);

    let stack = fresh_deck().into_stack();
    assert_eq!(fresh_deck(), stack);

    let deck = Deck::from_stack(stack, DeckOptions::default(), 5);
    assert_eq!(deck.decks_used(), 0);
    assert_eq!(deck, fresh_deck());
}

#[test]
fn split_consumes_the_deck() {
    let (bottom, top) = fresh_deck().split(None);
    assert_eq!((bottom.len(), top.len()), (26, 26));
    assert_eq!(top[25].abbrev(), "AS");
    assert!(compare_stacks(&(bottom + top).slice(..), &build_cards(false, 0)));

    let options = DeckOptions::default().with_ranks(BIG2_RANKS);
    let (bottom, top) = Deck::new(options, 1).split(Some(60));
    assert_eq!(bottom.len(), DECK_SIZE);
    assert!(top.is_empty());
    assert_eq!(*top.ranks(), BIG2_RANKS);
}
