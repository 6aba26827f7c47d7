//! Card types.

use alloc::format;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;
use crate::ranks::{DEFAULT_RANKS, RankTable};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Number of suits.
    pub const COUNT: usize = 4;

    /// All suits, in deck building order.
    pub const ALL: [Self; Self::COUNT] = [Self::Diamonds, Self::Clubs, Self::Hearts, Self::Spades];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Capitalized suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Clubs => "Clubs",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// First letter of the suit name.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCardError::UnknownSuit(String::from(s)))
    }
}

/// Card value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
    /// Joker.
    Joker,
}

impl Value {
    /// Number of values, joker included.
    pub const COUNT: usize = 14;

    /// The 13 standard values, in deck building order.
    pub const STANDARD: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// All values, joker last.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
        Self::Joker,
    ];

    /// Position of the value in [`Value::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Value name as printed on cards: numerals for pips, words for faces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
            Self::Joker => "Joker",
        }
    }

    /// First character of the value name (`'1'` for a ten).
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => '1',
            Self::Jack | Self::Joker => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Value {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|value| value.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCardError::UnknownValue(String::from(s)))
    }
}

/// A playing card.
///
/// Equality and hashing use the value and suit only. The [`Ord`] impl follows
/// [`DEFAULT_RANKS`]; use the comparison methods to rank cards by another
/// table.
///
/// ```
/// use cardstack::{Card, Suit, Value};
///
/// let card = Card::new(Value::Ace, Suit::Spades);
/// assert_eq!(card.name(), "Ace of Spades");
/// assert_eq!(card.abbrev(), "AS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    value: Value,
    suit: Option<Suit>,
}

impl Card {
    /// Creates a new card. A joker never keeps a suit.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        match value {
            Value::Joker => Self::joker(),
            _ => Self {
                value,
                suit: Some(suit),
            },
        }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self {
            value: Value::Joker,
            suit: None,
        }
    }

    /// Parses a card from value and suit names, ignoring case.
    ///
    /// A joker accepts any suit text, which is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the value or suit is not recognized.
    ///
    /// # Example
    ///
    /// ```
    /// use cardstack::Card;
    ///
    /// let card = Card::parse("queen", "HEARTS").unwrap();
    /// assert_eq!(card.name(), "Queen of Hearts");
    /// ```
    pub fn parse(value: &str, suit: &str) -> Result<Self, ParseCardError> {
        let value: Value = value.parse()?;
        if value == Value::Joker {
            return Ok(Self::joker());
        }
        Ok(Self::new(value, suit.parse()?))
    }

    /// Returns the card value.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    /// Returns the card suit, `None` for jokers.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.value, Value::Joker)
    }

    /// Full card name, e.g. `"10 of Hearts"` or `"Joker"`.
    #[must_use]
    pub fn name(&self) -> String {
        match self.suit {
            Some(suit) if !self.is_joker() => format!("{} of {}", self.value, suit),
            _ => String::from("Joker"),
        }
    }

    /// Short card code, e.g. `"AS"`, `"10H"` or `"JKR"`.
    #[must_use]
    pub fn abbrev(&self) -> String {
        match (self.value, self.suit) {
            (Value::Ten, Some(suit)) => format!("10{}", suit.initial()),
            (value, Some(suit)) if value != Value::Joker => {
                format!("{}{}", value.initial(), suit.initial())
            }
            _ => String::from("JKR"),
        }
    }

    /// Returns whether both cards have equal ranks under the table.
    ///
    /// Tables without suit ranks compare values only.
    #[must_use]
    pub fn eq(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        Self::cmp_with(self, other, ranks) == Ordering::Equal
    }

    /// Returns whether the ranks differ under the table.
    #[must_use]
    pub fn ne(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        !self.eq(other, ranks)
    }

    /// Returns whether this card ranks below `other`.
    #[must_use]
    pub fn lt(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        Self::cmp_with(self, other, ranks) == Ordering::Less
    }

    /// Returns whether this card ranks at or below `other`.
    #[must_use]
    pub fn le(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        Self::cmp_with(self, other, ranks) != Ordering::Greater
    }

    /// Returns whether this card ranks above `other`.
    ///
    /// Values are compared first; suits only break a tie in value.
    ///
    /// ```
    /// use cardstack::{Card, Suit, Value};
    /// use cardstack::ranks::BIG2_RANKS;
    ///
    /// let two = Card::new(Value::Two, Suit::Diamonds);
    /// let ace = Card::new(Value::Ace, Suit::Spades);
    /// assert!(ace.gt(&two, None));
    /// assert!(two.gt(&ace, Some(&BIG2_RANKS)));
    /// ```
    #[must_use]
    pub fn gt(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        Self::cmp_with(self, other, ranks) == Ordering::Greater
    }

    /// Returns whether this card ranks at or above `other`.
    #[must_use]
    pub fn ge(&self, other: &Self, ranks: Option<&RankTable>) -> bool {
        Self::cmp_with(self, other, ranks) != Ordering::Less
    }

    fn cmp_with(a: &Self, b: &Self, ranks: Option<&RankTable>) -> Ordering {
        ranks.unwrap_or(&DEFAULT_RANKS).compare(a, b)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        DEFAULT_RANKS.compare(self, other)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
