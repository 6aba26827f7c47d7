//! Rank tables used for comparing and sorting cards.
//!
//! A [`RankTable`] maps every card [`Value`] (and, optionally, every [`Suit`])
//! to an integer rank. Tables are plain data and can be built by callers for
//! games with their own ordering; the crate ships the common ones as
//! constants.

use core::cmp::Ordering;

use crate::card::{Card, Suit, Value};

/// Mapping from card values and suits to ordering ranks.
///
/// `values` is indexed by [`Value::index`], `suits` by [`Suit::index`].
/// When `suits` is `None`, cards are compared and sorted by value alone.
/// Cards without a suit (jokers) always get suit rank 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankTable {
    /// Rank of each value, in [`Value::ALL`] order.
    pub values: [u8; Value::COUNT],
    /// Rank of each suit, in [`Suit::ALL`] order.
    pub suits: Option<[u8; Suit::COUNT]>,
}

impl RankTable {
    /// Creates a rank table from value and suit ranks.
    #[must_use]
    pub const fn new(values: [u8; Value::COUNT], suits: Option<[u8; Suit::COUNT]>) -> Self {
        Self { values, suits }
    }

    /// Returns a copy of this table with the given suit ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::ranks::{BIG2_RANKS, POKER_RANKS};
    ///
    /// let table = POKER_RANKS.with_suits(BIG2_RANKS.suits);
    /// assert!(table.has_suits());
    /// ```
    #[must_use]
    pub const fn with_suits(mut self, suits: Option<[u8; Suit::COUNT]>) -> Self {
        self.suits = suits;
        self
    }

    /// Returns whether the table ranks suits.
    #[must_use]
    pub const fn has_suits(&self) -> bool {
        self.suits.is_some()
    }

    /// Returns the rank of a value.
    #[must_use]
    pub const fn value_rank(&self, value: Value) -> u8 {
        self.values[value.index()]
    }

    /// Returns the rank of a suit, 0 for jokers or suit-less tables.
    #[must_use]
    pub const fn suit_rank(&self, suit: Option<Suit>) -> u8 {
        match (self.suits, suit) {
            (Some(suits), Some(suit)) => suits[suit.index()],
            _ => 0,
        }
    }

    /// Returns the `(value rank, suit rank)` sort key of a card.
    #[must_use]
    pub const fn key(&self, card: &Card) -> (u8, u8) {
        (self.value_rank(card.value()), self.suit_rank(card.suit()))
    }

    /// Compares two cards by value rank, breaking ties by suit rank.
    #[must_use]
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }
}

impl Default for RankTable {
    fn default() -> Self {
        DEFAULT_RANKS
    }
}

/// Poker value ranks (2 low, Ace high). Suits are unranked.
pub const POKER_RANKS: RankTable =
    RankTable::new([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 0], None);

/// Big Two ranks (3 low, 2 high; Diamonds < Clubs < Hearts < Spades).
pub const BIG2_RANKS: RankTable = RankTable::new(
    [13, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0],
    Some([1, 2, 3, 4]),
);

/// Cribbage counting ranks (Ace 1, face cards 10). Suits are unranked.
pub const CRIBBAGE_RANKS: RankTable =
    RankTable::new([2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 1, 0], None);

/// Poker values with Big Two suits, used wherever no table is given.
pub const DEFAULT_RANKS: RankTable = POKER_RANKS.with_suits(BIG2_RANKS.suits);
