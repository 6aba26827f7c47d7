//! Plain text card files.
//!
//! Each line holds one card as `"<value> <suit>"`, for example `"Ace Spades"`
//! or `"10 Hearts"`. Jokers are written as `"Joker None"`. The last line has
//! no trailing newline.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::card::Card;
use crate::error::{ParseCardError, PersistError};
use crate::stack::Stack;

/// Saves cards to a text file, one per line.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_cards<'a, P, I>(path: P, cards: I) -> Result<(), PersistError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Card>,
{
    let path = path.as_ref();
    let mut writer = BufWriter::new(fs::File::create(path)?);
    let mut count = 0;

    for card in cards {
        if count > 0 {
            writer.write_all(b"\n")?;
        }
        let suit = card.suit().map_or("None", |suit| suit.name());
        write!(writer, "{} {}", card.value(), suit)?;
        count += 1;
    }
    writer.flush()?;

    debug!("saved {count} cards to {}", path.display());
    Ok(())
}

/// Opens cards saved by [`save_cards`], first line first.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is not a card.
pub fn open_cards<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, PersistError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let mut cards = Vec::new();

    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let card = parse_line(line)
            .map_err(|source| PersistError::Malformed { line: i + 1, source })?;
        cards.push(card);
    }

    debug!("opened {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

fn parse_line(line: &str) -> Result<Card, ParseCardError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(value), Some(suit), None) => Card::parse(value, suit),
        (Some(value), None, None) if value.eq_ignore_ascii_case("joker") => Ok(Card::joker()),
        _ => Err(ParseCardError::FieldCount(line.to_owned())),
    }
}

impl Stack {
    /// Saves the stack, bottom card first, to a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_cards<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        save_cards(path, self)
    }

    /// Replaces the stack contents with cards read from a text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is not a card.
    /// The stack is left unchanged in that case.
    pub fn open_cards<P: AsRef<Path>>(&mut self, path: P) -> Result<(), PersistError> {
        let cards = open_cards(path)?;
        self.set_cards(cards);
        Ok(())
    }
}
