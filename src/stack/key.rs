//! Stack end and lookup key types.

/// One of the two ends of a stack.
///
/// The bottom is position 0, the top is the last position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum End {
    /// The top of the stack (last position).
    #[default]
    Top,
    /// The bottom of the stack (position 0).
    Bottom,
}

/// What to look up when taking cards out of a stack.
///
/// A term is searched first; a term that matches nothing but reads as an
/// integer falls back to that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKey<'a> {
    /// Search term: full name, value, suit, abbreviation, or initial.
    Term(&'a str),
    /// Position in the stack, negative values counting from the top.
    Position(isize),
}

impl<'a> From<&'a str> for SearchKey<'a> {
    fn from(term: &'a str) -> Self {
        Self::Term(term)
    }
}

impl From<isize> for SearchKey<'_> {
    fn from(position: isize) -> Self {
        Self::Position(position)
    }
}

impl From<i32> for SearchKey<'_> {
    fn from(position: i32) -> Self {
        Self::Position(position as isize)
    }
}
