//! Error types for card, stack, and file operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when accessing stack positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// Position is outside the stack.
    #[error("the index ({index}) is out of range for a stack of {len} cards")]
    IndexOutOfRange {
        /// The requested position.
        index: isize,
        /// The stack length at the time of the request.
        len: usize,
    },
}

/// Errors that can occur when parsing cards from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Value name is not recognized.
    #[error("unknown card value: {0:?}")]
    UnknownValue(String),
    /// Suit name is not recognized.
    #[error("unknown card suit: {0:?}")]
    UnknownSuit(String),
    /// Line does not hold exactly a value and a suit.
    #[cfg(feature = "std")]
    #[error("expected \"<value> <suit>\", found {0:?}")]
    FieldCount(String),
}

/// Errors that can occur when saving or opening card files.
#[cfg(feature = "std")]
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A line could not be read as a card.
    #[error("line {line}: {source}")]
    Malformed {
        /// One-based line number.
        line: usize,
        /// The parse failure.
        source: ParseCardError,
    },
}
