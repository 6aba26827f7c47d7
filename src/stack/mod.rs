//! The [`Stack`] card container.

use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Bound, Index, RangeBounds};

use crate::card::Card;
use crate::error::StackError;
use crate::ranks::{DEFAULT_RANKS, RankTable};

mod arrange;
pub mod key;
mod search;

pub use key::{End, SearchKey};

/// An ordered collection of cards, usable as a hand, a discard pile, or any
/// other pile of cards.
///
/// Position 0 is the bottom of the stack and the last position is the top.
/// Cards can be added to and dealt from either [`End`]. Duplicate cards are
/// allowed.
///
/// Two stacks are equal when they hold the same cards in the same order;
/// their rank tables are not compared.
///
/// # Example
///
/// ```
/// use cardstack::{Card, End, Stack, Suit, Value};
///
/// let mut stack = Stack::new();
/// stack.add([Card::new(Value::Ace, Suit::Spades)], End::Top);
/// stack.add_card(Card::new(Value::Two, Suit::Hearts), End::Bottom);
///
/// assert_eq!(stack.len(), 2);
/// assert_eq!(stack.find("AS", 0, false, None), vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    cards: VecDeque<Card>,
    ranks: RankTable,
}

impl Stack {
    /// Creates an empty stack using [`DEFAULT_RANKS`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_ranks(DEFAULT_RANKS)
    }

    /// Creates an empty stack with the given rank table.
    #[must_use]
    pub const fn with_ranks(ranks: RankTable) -> Self {
        Self {
            cards: VecDeque::new(),
            ranks,
        }
    }

    /// Creates a stack holding `cards`, first card at the bottom.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        cards.into_iter().collect()
    }

    /// Returns the rank table used when an operation is given none.
    #[must_use]
    pub const fn ranks(&self) -> &RankTable {
        &self.ranks
    }

    /// Sets the rank table used when an operation is given none.
    pub const fn set_ranks(&mut self, ranks: RankTable) {
        self.ranks = ranks;
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub const fn cards(&self) -> &VecDeque<Card> {
        &self.cards
    }

    /// Returns an iterator over the cards, bottom first.
    pub fn iter(&self) -> alloc::collections::vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the stack.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether a card with the same value and suit is in the stack.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Adds cards to one end of the stack.
    ///
    /// Adding is the inverse of [`Stack::deal`]: the first card of `cards`
    /// ends up nearest to `end`, so re-adding dealt cards to the end they
    /// came from restores the previous order.
    ///
    /// ```
    /// use cardstack::{End, Stack};
    /// use cardstack::tools::build_cards;
    ///
    /// let mut stack = Stack::from_cards(build_cards(false, 0));
    /// let before = stack.clone();
    /// let dealt = stack.deal(5, End::Top);
    /// stack.add(dealt, End::Top);
    /// assert_eq!(stack, before);
    /// ```
    pub fn add<I: IntoIterator<Item = Card>>(&mut self, cards: I, end: End) {
        let cards: Vec<Card> = cards.into_iter().collect();
        match end {
            End::Top => self.cards.extend(cards.into_iter().rev()),
            End::Bottom => {
                for card in cards.into_iter().rev() {
                    self.cards.push_front(card);
                }
            }
        }
    }

    /// Adds a single card to one end of the stack.
    pub fn add_card(&mut self, card: Card, end: End) {
        match end {
            End::Top => self.cards.push_back(card),
            End::Bottom => self.cards.push_front(card),
        }
    }

    /// Removes up to `num` cards from one end, in the order they come off.
    ///
    /// If the stack holds fewer than `num` cards, all of them are dealt.
    #[must_use = "dealt cards are removed from the stack"]
    pub fn deal(&mut self, num: usize, end: End) -> Self {
        let mut dealt = Self::with_ranks(self.ranks);
        while dealt.len() < num {
            match self.pop_card(end) {
                Some(card) => dealt.cards.push_back(card),
                None => break,
            }
        }
        dealt
    }

    /// Removes one card from the given end.
    pub(crate) fn pop_card(&mut self, end: End) -> Option<Card> {
        match end {
            End::Top => self.cards.pop_back(),
            End::Bottom => self.cards.pop_front(),
        }
    }

    /// Removes every card and returns them, bottom first.
    pub fn empty(&mut self) -> Vec<Card> {
        self.cards.drain(..).collect()
    }

    /// Replaces the contents of the stack, first card at the bottom.
    pub fn set_cards<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards = cards.into_iter().collect();
    }

    /// Converts a position into an index, wrapping negative positions from
    /// the top.
    pub(crate) fn resolve(&self, index: isize) -> Result<usize, StackError> {
        let len = self.cards.len();
        let resolved = if index < 0 {
            len.checked_sub(index.unsigned_abs())
        } else {
            Some(index.unsigned_abs())
        };

        resolved
            .filter(|&i| i < len)
            .ok_or(StackError::IndexOutOfRange { index, len })
    }

    /// Returns the card at a position; `-1` is the top card.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    pub fn at(&self, index: isize) -> Result<&Card, StackError> {
        let i = self.resolve(index)?;
        Ok(&self.cards[i])
    }

    /// Replaces the card at a position and returns the old card.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    pub fn set(&mut self, index: isize, card: Card) -> Result<Card, StackError> {
        let i = self.resolve(index)?;
        Ok(core::mem::replace(&mut self.cards[i], card))
    }

    /// Removes and returns the card at a position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    pub fn remove(&mut self, index: isize) -> Result<Card, StackError> {
        let i = self.resolve(index)?;
        self.cards.remove(i).ok_or(StackError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Returns a copy of the cards in `range`, clamped to the stack bounds.
    ///
    /// ```
    /// use cardstack::Stack;
    /// use cardstack::tools::build_cards;
    ///
    /// let stack = Stack::from_cards(build_cards(false, 0));
    /// assert_eq!(stack.slice(50..).len(), 2);
    /// assert_eq!(stack.slice(60..70).len(), 0);
    /// ```
    #[must_use]
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Vec<Card> {
        let len = self.cards.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .min(len);

        if start >= end {
            return Vec::new();
        }
        self.cards.range(start..end).copied().collect()
    }

    /// Reverses the order of the stack in place.
    pub fn reverse(&mut self) {
        self.cards.make_contiguous().reverse();
    }
}

impl PartialEq for Stack {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards
    }
}

impl Eq for Stack {}

impl PartialEq<[Card]> for Stack {
    fn eq(&self, other: &[Card]) -> bool {
        self.cards.iter().eq(other.iter())
    }
}

impl PartialEq<Vec<Card>> for Stack {
    fn eq(&self, other: &Vec<Card>) -> bool {
        self == other.as_slice()
    }
}

impl Index<usize> for Stack {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl FromIterator<Card> for Stack {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
            ranks: DEFAULT_RANKS,
        }
    }
}

impl Extend<Card> for Stack {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl From<Vec<Card>> for Stack {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl IntoIterator for Stack {
    type Item = Card;
    type IntoIter = alloc::collections::vec_deque::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stack {
    type Item = &'a Card;
    type IntoIter = alloc::collections::vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Merges two stacks, placing `other` on top.
impl Add for Stack {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.cards.extend(other.cards);
        self
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.cards.iter().map(Card::name).collect();
        f.write_str(&names.join("\n"))
    }
}
