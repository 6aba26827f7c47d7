use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

use crate::card::Card;
use crate::error::StackError;
use crate::ranks::RankTable;
use crate::tools::{check_term, find_card, sort_card_indices, sort_cards};

use super::{SearchKey, Stack};

impl Stack {
    /// Searches the stack for cards matching `term`.
    ///
    /// The term is compared, ignoring case, with each card's full name,
    /// value, suit, abbreviation, and value or suit initial. At most `limit`
    /// positions are returned (`0` for no limit). With `sort`, positions are
    /// ordered by the rank of their cards under `ranks`, or the stack's own
    /// table.
    ///
    /// An empty result means nothing matched.
    ///
    /// ```
    /// use cardstack::Stack;
    /// use cardstack::tools::build_cards;
    ///
    /// let stack = Stack::from_cards(build_cards(false, 0));
    /// assert_eq!(stack.find("Spades", 0, false, None).len(), 13);
    /// assert_eq!(stack.find("Spades", 2, false, None).len(), 2);
    /// assert!(stack.find("Zebra", 0, false, None).is_empty());
    /// ```
    #[must_use]
    pub fn find(
        &self,
        term: &str,
        limit: usize,
        sort: bool,
        ranks: Option<&RankTable>,
    ) -> Vec<usize> {
        let mut found = find_card(&self.cards, term, limit);
        if sort {
            self.sort_positions(&mut found, ranks);
        }
        found
    }

    /// Searches the stack for cards matching any of `terms`.
    ///
    /// `limit` applies to each term separately. A position matched by more
    /// than one term is reported once, in the order it was first found.
    #[must_use]
    pub fn find_list<I>(
        &self,
        terms: I,
        limit: usize,
        sort: bool,
        ranks: Option<&RankTable>,
    ) -> Vec<usize>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for term in terms {
            self.match_term(term.as_ref(), limit, &mut seen, &mut found);
        }

        if sort {
            self.sort_positions(&mut found, ranks);
        }
        found
    }

    /// Removes and returns the cards matching `key`.
    ///
    /// A [`SearchKey::Term`] is searched as in [`Stack::find`]; when it
    /// matches nothing but reads as an integer, the card at that position is
    /// taken instead. A [`SearchKey::Position`] takes the card at that
    /// position. With `sort`, the returned cards are sorted by rank.
    ///
    /// # Errors
    ///
    /// Returns an error if a position key is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::Stack;
    /// use cardstack::tools::build_cards;
    ///
    /// let mut stack = Stack::from_cards(build_cards(false, 0));
    /// let aces = stack.get("Ace", 0, false, None).unwrap();
    /// assert_eq!(aces.len(), 4);
    /// assert_eq!(stack.len(), 48);
    ///
    /// let bottom = stack.get(0, 0, false, None).unwrap();
    /// assert_eq!(bottom[0].abbrev(), "2D");
    /// ```
    pub fn get<'a, K>(
        &mut self,
        key: K,
        limit: usize,
        sort: bool,
        ranks: Option<&RankTable>,
    ) -> Result<Vec<Card>, StackError>
    where
        K: Into<SearchKey<'a>>,
    {
        self.get_list([key.into()], limit, sort, ranks)
    }

    /// Removes and returns the cards matching any of `keys`.
    ///
    /// Every key is resolved as in [`Stack::get`] against the stack as it
    /// was before the call, so positions are not shifted by earlier keys.
    /// Cards matched more than once are returned once.
    ///
    /// # Errors
    ///
    /// Returns an error if a position key is out of range. The stack is left
    /// unchanged in that case.
    pub fn get_list<'a, I, K>(
        &mut self,
        keys: I,
        limit: usize,
        sort: bool,
        ranks: Option<&RankTable>,
    ) -> Result<Vec<Card>, StackError>
    where
        I: IntoIterator<Item = K>,
        K: Into<SearchKey<'a>>,
    {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for key in keys {
            match key.into() {
                SearchKey::Term(term) => {
                    if !self.match_term(term, limit, &mut seen, &mut found) {
                        let position = term
                            .trim()
                            .parse::<isize>()
                            .ok()
                            .and_then(|p| self.resolve(p).ok());
                        if let Some(i) = position.filter(|&i| seen.insert(i)) {
                            found.push(i);
                        }
                    }
                }
                SearchKey::Position(position) => {
                    let i = self.resolve(position)?;
                    if seen.insert(i) {
                        found.push(i);
                    }
                }
            }
        }

        let mut got: Vec<Card> = found.iter().map(|&i| self.cards[i]).collect();

        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !seen.contains(&position);
            position += 1;
            keep
        });

        if sort {
            sort_cards(&mut got, Some(ranks.unwrap_or(&self.ranks)));
        }
        Ok(got)
    }

    /// Collects unseen positions matching `term` into `found`, at most
    /// `limit` of them. Returns whether anything matched at all.
    fn match_term(
        &self,
        term: &str,
        limit: usize,
        seen: &mut HashSet<usize>,
        found: &mut Vec<usize>,
    ) -> bool {
        let mut matched = false;
        let mut count = 0;

        for (i, card) in self.cards.iter().enumerate() {
            if limit != 0 && count >= limit {
                break;
            }
            if check_term(card, term) {
                matched = true;
                if seen.insert(i) {
                    found.push(i);
                    count += 1;
                }
            }
        }

        matched
    }

    fn sort_positions(&self, positions: &mut [usize], ranks: Option<&RankTable>) {
        sort_card_indices(&self.cards, positions, Some(ranks.unwrap_or(&self.ranks)));
    }
}
