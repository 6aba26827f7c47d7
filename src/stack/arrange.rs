use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::StackError;
use crate::ranks::RankTable;
use crate::tools::{check_sorted, sort_cards};

use super::Stack;

impl Stack {
    /// Inserts a card at a position.
    ///
    /// `0` puts the card at the bottom, `-1` (or the stack length) on top.
    /// Other negative positions count from the top, so `-2` leaves two cards
    /// above the inserted one.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    pub fn insert(&mut self, card: Card, position: isize) -> Result<(), StackError> {
        self.insert_list([card], position)
    }

    /// Inserts cards as one contiguous block at a position.
    ///
    /// Positions are interpreted as in [`Stack::insert`], and the block keeps
    /// the order of `cards`.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::{Card, Stack, Suit, Value};
    /// use cardstack::tools::build_cards;
    ///
    /// let mut stack = Stack::from_cards(build_cards(false, 0));
    /// let block = [
    ///     Card::new(Value::Ace, Suit::Spades),
    ///     Card::new(Value::Two, Suit::Diamonds),
    /// ];
    /// stack.insert_list(block, 1).unwrap();
    /// assert_eq!(stack.slice(1..3), block);
    /// ```
    pub fn insert_list<I: IntoIterator<Item = Card>>(
        &mut self,
        cards: I,
        position: isize,
    ) -> Result<(), StackError> {
        let len = self.cards.len();
        let index = match position {
            -1 => Some(len),
            p if p < 0 => len.checked_sub(p.unsigned_abs()),
            p => Some(p.unsigned_abs()).filter(|&i| i <= len),
        }
        .ok_or(StackError::IndexOutOfRange { index: position, len })?;

        let top = self.cards.split_off(index);
        self.cards.extend(cards);
        self.cards.extend(top);
        Ok(())
    }

    /// Returns whether the stack is in ascending or descending rank order.
    #[must_use]
    pub fn is_sorted(&self, ranks: Option<&RankTable>) -> bool {
        check_sorted(&self.cards, Some(ranks.unwrap_or(&self.ranks)))
    }

    /// Sorts the stack by value rank, breaking ties by suit rank.
    ///
    /// The sort is stable. Without `ranks`, the stack's own table is used.
    pub fn sort(&mut self, ranks: Option<&RankTable>) {
        let ranks = *ranks.unwrap_or(&self.ranks);
        sort_cards(self.cards.make_contiguous(), Some(&ranks));
    }

    /// Shuffles the stack `times` times.
    ///
    /// One pass is already a uniform permutation; further passes do not make
    /// the order any more random.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, times: usize) {
        for _ in 0..times {
            self.cards.make_contiguous().shuffle(rng);
        }
    }

    /// Returns a uniformly chosen card, removing it when `remove` is set.
    ///
    /// Returns `None` if the stack is empty.
    pub fn random_card<R: Rng + ?Sized>(&mut self, rng: &mut R, remove: bool) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let i = rng.random_range(0..self.cards.len());
        if remove {
            self.cards.remove(i)
        } else {
            self.cards.get(i).copied()
        }
    }

    /// Splits the stack into a bottom and a top part, consuming it.
    ///
    /// Without a position the stack is cut at half its length, rounding
    /// down. Positions past the end leave the top part empty. Both parts keep
    /// the rank table.
    ///
    /// ```
    /// use cardstack::Stack;
    /// use cardstack::tools::build_cards;
    ///
    /// let stack = Stack::from_cards(build_cards(false, 0));
    /// let (bottom, top) = stack.split(None);
    /// assert_eq!((bottom.len(), top.len()), (26, 26));
    /// ```
    #[must_use]
    pub fn split(self, position: Option<usize>) -> (Self, Self) {
        let Self { mut cards, ranks } = self;
        let mid = position.unwrap_or(cards.len() / 2).min(cards.len());
        let top = cards.split_off(mid);

        (Self { cards, ranks }, Self { cards: top, ranks })
    }
}
