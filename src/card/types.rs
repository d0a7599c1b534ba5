use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lowest card value that can be drawn
pub const MIN_CARD: u8 = 1;
/// Highest card value that can be drawn
pub const MAX_CARD: u8 = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardError {
    #[error("Card value {0} is outside 1..=10")]
    OutOfRange(u32),
    #[error("Card sequence is empty")]
    EmptySequence,
}

/// A single drawn card. Only its value matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Card(pub(crate) u8);

impl Card {
    pub fn new(value: u32) -> Result<Self, CardError> {
        if (MIN_CARD as u32..=MAX_CARD as u32).contains(&value) {
            Ok(Card(value as u8))
        } else {
            Err(CardError::OutOfRange(value))
        }
    }

    /// Card value as added to a tally
    pub fn value(self) -> u32 {
        self.0 as u32
    }

    /// All ten card values in ascending order
    pub fn all() -> impl Iterator<Item = Card> {
        (MIN_CARD..=MAX_CARD).map(Card)
    }
}

impl TryFrom<u32> for Card {
    type Error = CardError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Card::new(value)
    }
}

impl From<Card> for u32 {
    fn from(card: Card) -> u32 {
        card.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
