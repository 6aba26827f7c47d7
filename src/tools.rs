//! Free functions for working with sequences of cards.
//!
//! [`Stack`](crate::Stack) and [`Deck`](crate::Deck) are built on these, and
//! they can be used on plain slices as well.

use alloc::vec::Vec;
use core::ops::Index;

use crate::card::{Card, Suit, Value};
use crate::ranks::{DEFAULT_RANKS, RankTable};

/// Number of cards in a standard deck, jokers excluded.
pub const DECK_SIZE: usize = 52;

/// Builds a full 52 card French deck in canonical order.
///
/// Values run from 2 to Ace, and each value is repeated for Diamonds, Clubs,
/// Hearts and Spades, so the last card is the Ace of Spades. Jokers, if
/// requested, come first.
///
/// # Example
///
/// ```
/// use cardstack::tools::{DECK_SIZE, build_cards};
///
/// let cards = build_cards(true, 2);
/// assert_eq!(cards.len(), DECK_SIZE + 2);
/// assert!(cards[0].is_joker());
/// assert_eq!(cards[cards.len() - 1].abbrev(), "AS");
/// ```
#[must_use]
pub fn build_cards(jokers: bool, num_jokers: usize) -> Vec<Card> {
    let num_jokers = if jokers { num_jokers } else { 0 };
    let mut cards = Vec::with_capacity(DECK_SIZE + num_jokers);

    cards.extend((0..num_jokers).map(|_| Card::joker()));
    for value in Value::STANDARD {
        for suit in Suit::ALL {
            cards.push(Card::new(value, suit));
        }
    }

    cards
}

/// Checks a search term against a card.
///
/// The term matches, ignoring case, the card's full name, value, suit,
/// abbreviation, or the first letter of its value or suit.
///
/// ```
/// use cardstack::tools::check_term;
/// use cardstack::{Card, Suit, Value};
///
/// let card = Card::new(Value::Queen, Suit::Hearts);
/// for term in ["queen of hearts", "Queen", "hearts", "QH", "q", "H"] {
///     assert!(check_term(&card, term));
/// }
/// assert!(!check_term(&card, "Spades"));
/// ```
#[must_use]
pub fn check_term(card: &Card, term: &str) -> bool {
    let is_initial = |initial: char| {
        let mut chars = term.chars();
        chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&initial)) && chars.next().is_none()
    };

    card.name().eq_ignore_ascii_case(term)
        || card.value().name().eq_ignore_ascii_case(term)
        || card.abbrev().eq_ignore_ascii_case(term)
        || is_initial(card.value().initial())
        || card.suit().is_some_and(|suit| {
            suit.name().eq_ignore_ascii_case(term) || is_initial(suit.initial())
        })
}

/// Returns the positions of cards matching `term`, at most `limit` of them
/// (`0` for no limit).
#[must_use]
pub fn find_card<'a, I>(cards: I, term: &str, limit: usize) -> Vec<usize>
where
    I: IntoIterator<Item = &'a Card>,
{
    let matches = cards
        .into_iter()
        .enumerate()
        .filter(|(_, card)| check_term(card, term))
        .map(|(i, _)| i);

    if limit == 0 {
        matches.collect()
    } else {
        matches.take(limit).collect()
    }
}

/// Sorts cards in place by value rank, then suit rank.
///
/// The sort is stable, so cards of equal rank keep their relative order.
pub fn sort_cards(cards: &mut [Card], ranks: Option<&RankTable>) {
    let ranks = ranks.unwrap_or(&DEFAULT_RANKS);
    cards.sort_by_key(|card| ranks.key(card));
}

/// Sorts positions into `cards` by the rank of the card each one points at.
///
/// # Panics
///
/// Panics if a position is out of bounds for `cards`.
pub fn sort_card_indices<C>(cards: &C, indices: &mut [usize], ranks: Option<&RankTable>)
where
    C: Index<usize, Output = Card> + ?Sized,
{
    let ranks = ranks.unwrap_or(&DEFAULT_RANKS);
    indices.sort_by_key(|&i| ranks.key(&cards[i]));
}

/// Returns whether the cards are in ascending or descending rank order.
///
/// ```
/// use cardstack::tools::{build_cards, check_sorted};
///
/// let mut cards = build_cards(false, 0);
/// assert!(check_sorted(&cards, None));
/// cards.reverse();
/// assert!(check_sorted(&cards, None));
/// cards.swap(0, 10);
/// assert!(!check_sorted(&cards, None));
/// ```
#[must_use]
pub fn check_sorted<'a, I>(cards: I, ranks: Option<&RankTable>) -> bool
where
    I: IntoIterator<Item = &'a Card>,
{
    let ranks = ranks.unwrap_or(&DEFAULT_RANKS);
    let mut ascending = true;
    let mut descending = true;
    let mut previous: Option<(u8, u8)> = None;

    for card in cards {
        let key = ranks.key(card);
        if let Some(prev) = previous {
            ascending &= prev <= key;
            descending &= prev >= key;
            if !ascending && !descending {
                return false;
            }
        }
        previous = Some(key);
    }

    true
}

/// Returns whether two card sequences hold the same cards, ignoring order.
///
/// Cards are compared by value and suit.
#[must_use]
pub fn compare_stacks(cards_x: &[Card], cards_y: &[Card]) -> bool {
    if cards_x.len() != cards_y.len() {
        return false;
    }

    let mut x = cards_x.to_vec();
    let mut y = cards_y.to_vec();
    x.sort_unstable();
    y.sort_unstable();
    x == y
}
