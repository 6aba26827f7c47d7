//! Playing card stacks and decks with optional `no_std` support.
//!
//! The crate provides a [`Stack`] type, an ordered pile of cards that can be
//! dealt from either end, searched by name, sorted by a [`RankTable`], split
//! and shuffled, and a [`Deck`] that builds itself as a standard 52 card
//! deck and can rebuild when it runs out.
//!
//! # Example
//!
//! ```
//! use cardstack::{Deck, DeckOptions, End};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42);
//! deck.shuffle(1);
//!
//! let mut hand = deck.deal(7, End::Top);
//! hand.sort(None);
//! assert!(hand.is_sorted(None));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod persist;
pub mod ranks;
pub mod stack;
pub mod tools;

// Re-export main types
pub use card::{Card, Suit, Value};
pub use deck::Deck;
#[cfg(feature = "std")]
pub use error::PersistError;
pub use error::{ParseCardError, StackError};
pub use options::DeckOptions;
pub use ranks::{DEFAULT_RANKS, RankTable};
pub use stack::{End, SearchKey, Stack};
pub use tools::DECK_SIZE;
