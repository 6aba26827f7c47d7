//! The [`Deck`] type: a stack that builds itself from a standard deck.

use core::fmt;
use core::ops::{Add, Deref, DerefMut};

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::options::DeckOptions;
use crate::stack::{End, Stack};
use crate::tools::build_cards;

/// A stack of cards that can (re)build itself as a standard 52 card deck.
///
/// A deck dereferences to [`Stack`], so every stack operation is available.
/// [`Deck::deal`], [`Deck::shuffle`] and [`Deck::random_card`] replace the
/// stack versions: they rebuild on demand and use the deck's own seeded
/// random number generator.
///
/// # Example
///
/// ```
/// use cardstack::{Deck, DeckOptions, End};
///
/// let mut deck = Deck::new(DeckOptions::default(), 42);
/// assert_eq!(deck.len(), 52);
///
/// let hand = deck.deal(5, End::Top);
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.len(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck.
    stack: Stack,
    /// Deck options.
    pub options: DeckOptions,
    /// Number of builds performed.
    decks_used: usize,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a new deck with the given seed.
    ///
    /// The deck is built immediately unless `options.build` is unset.
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut deck = Self {
            stack: Stack::with_ranks(options.ranks),
            options,
            decks_used: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        if options.build {
            deck.build(false, 0);
        }
        deck
    }

    /// Creates a deck holding the given cards, first card at the bottom,
    /// without building.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(
        cards: I,
        options: DeckOptions,
        seed: u64,
    ) -> Self {
        let mut stack = Stack::from_cards(cards);
        stack.set_ranks(options.ranks);

        Self {
            stack,
            options,
            decks_used: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Turns a stack into a deck without building.
    #[must_use]
    pub fn from_stack(stack: Stack, options: DeckOptions, seed: u64) -> Self {
        Self::from_cards(stack, options, seed)
    }

    /// Converts the deck into a plain stack.
    #[must_use]
    pub fn into_stack(self) -> Stack {
        self.stack
    }

    /// Returns the number of builds performed so far.
    #[must_use]
    pub const fn decks_used(&self) -> usize {
        self.decks_used
    }

    /// Replaces the contents with a freshly built standard deck.
    ///
    /// Jokers are placed at the bottom. `jokers` and `num_jokers` fall back
    /// to the deck options when `false` and `0`.
    pub fn build(&mut self, jokers: bool, num_jokers: usize) {
        let jokers = jokers || self.options.jokers;
        let num_jokers = if num_jokers == 0 {
            self.options.num_jokers
        } else {
            num_jokers
        };

        self.decks_used += 1;
        self.stack.set_cards(build_cards(jokers, num_jokers));
        debug!(
            "built deck #{} with {} cards",
            self.decks_used,
            self.stack.len()
        );
    }

    /// Deals `num` cards from one end, rebuilding according to the options.
    ///
    /// See [`Deck::deal_with`].
    #[must_use = "dealt cards are removed from the deck"]
    pub fn deal(&mut self, num: usize, end: End) -> Stack {
        self.deal_with(num, false, false, end)
    }

    /// Deals `num` cards from one end, in the order they come off.
    ///
    /// When the deck runs out and `rebuild` (or the `rebuild` option) is set,
    /// a new deck is built, shuffled if `shuffle` (or the `re_shuffle`
    /// option) is set, and dealing continues. Otherwise dealing stops and
    /// the cards dealt so far are returned.
    ///
    /// ```
    /// use cardstack::{Deck, DeckOptions, End};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 7);
    /// let dealt = deck.deal_with(53, true, false, End::Top);
    /// assert_eq!(dealt.len(), 53);
    /// assert_eq!(deck.len(), 51);
    /// assert_eq!(deck.decks_used(), 2);
    /// ```
    #[must_use = "dealt cards are removed from the deck"]
    pub fn deal_with(&mut self, num: usize, rebuild: bool, shuffle: bool, end: End) -> Stack {
        let rebuild = rebuild || self.options.rebuild;
        let shuffle = shuffle || self.options.re_shuffle;
        let mut dealt = Stack::with_ranks(*self.stack.ranks());

        while dealt.len() < num {
            match self.stack.pop_card(end) {
                Some(card) => dealt.add_card(card, End::Top),
                None if rebuild => {
                    trace!("deck ran out after {} of {num} cards, rebuilding", dealt.len());
                    self.build(false, 0);
                    if shuffle {
                        self.shuffle(1);
                    }
                    if self.stack.is_empty() {
                        break;
                    }
                }
                None => break,
            }
        }

        dealt
    }

    /// Shuffles the deck `times` times with the deck's generator.
    pub fn shuffle(&mut self, times: usize) {
        debug!("shuffling {} cards {times} time(s)", self.stack.len());
        self.stack.shuffle(&mut self.rng, times);
    }

    /// Returns a random card using the deck's generator, removing it when
    /// `remove` is set.
    pub fn random_card(&mut self, remove: bool) -> Option<Card> {
        self.stack.random_card(&mut self.rng, remove)
    }

    /// Splits the deck's cards into a bottom and a top stack, consuming the
    /// deck. See [`Stack::split`].
    ///
    /// ```
    /// use cardstack::{Deck, DeckOptions};
    ///
    /// let (bottom, top) = Deck::new(DeckOptions::default(), 1).split(Some(12));
    /// assert_eq!((bottom.len(), top.len()), (12, 40));
    /// ```
    #[must_use]
    pub fn split(self, position: Option<usize>) -> (Stack, Stack) {
        self.stack.split(position)
    }
}

impl Deref for Deck {
    type Target = Stack;

    fn deref(&self) -> &Stack {
        &self.stack
    }
}

impl DerefMut for Deck {
    fn deref_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }
}

impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.stack == other.stack
    }
}

impl PartialEq<Stack> for Deck {
    fn eq(&self, other: &Stack) -> bool {
        &self.stack == other
    }
}

/// Merges two decks, placing `other` on top.
impl Add for Deck {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.stack.extend(other.stack);
        self
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.stack, f)
    }
}
