//! Card types and naming.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::error::CardError;

const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King",
];

const SUIT_NAMES: [&str; 4] = ["Clubs", "Diamonds", "Hearts", "Spades"];

/// Card suit, stored as its 1-based index.
///
/// Decks may be built with more suits than have names; such suits still
/// compare and match normally but cannot be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Suit(pub u8);

impl Suit {
    /// Clubs.
    pub const CLUBS: Self = Self(1);
    /// Diamonds.
    pub const DIAMONDS: Self = Self(2);
    /// Hearts.
    pub const HEARTS: Self = Self(3);
    /// Spades.
    pub const SPADES: Self = Self(4);

    /// Returns the suit name, e.g. "Spades".
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the index has no name.
    pub fn name(self) -> Result<&'static str, CardError> {
        (self.0 as usize)
            .checked_sub(1)
            .and_then(|i| SUIT_NAMES.get(i))
            .copied()
            .ok_or(CardError::InvalidSuit(self.0))
    }
}

/// A playing card.
///
/// The derived ordering places standard cards first, ascending by rank then
/// suit, followed by jokers in id order. This is the order hands are shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    /// A ranked, suited card.
    Standard {
        /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
        rank: u8,
        /// The suit of the card.
        suit: Suit,
    },
    /// A joker, identified by its id (1 or 2 in a standard deck).
    Joker(u8),
}

impl Card {
    /// Creates a standard card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but cannot be named.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    /// Creates a joker with the given id.
    #[must_use]
    pub const fn joker(id: u8) -> Self {
        Self::Joker(id)
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self, Self::Joker(_))
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(&self) -> Option<u8> {
        match *self {
            Self::Standard { rank, .. } => Some(rank),
            Self::Joker(_) => None,
        }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        match *self {
            Self::Standard { suit, .. } => Some(suit),
            Self::Joker(_) => None,
        }
    }

    /// Returns the rank name, e.g. "Jack".
    ///
    /// Jokers have no rank and are named "Joker".
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank has no name.
    pub fn rank_name(&self) -> Result<&'static str, CardError> {
        match *self {
            Self::Standard { rank, .. } => (rank as usize)
                .checked_sub(1)
                .and_then(|i| RANK_NAMES.get(i))
                .copied()
                .ok_or(CardError::InvalidRank(rank)),
            Self::Joker(_) => Ok("Joker"),
        }
    }

    /// Returns the full name of the card, e.g. "Jack of Spades".
    ///
    /// Every joker is named "Joker" regardless of its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank or suit is outside the name tables.
    pub fn name(&self) -> Result<String, CardError> {
        match *self {
            Self::Standard { suit, .. } => {
                Ok(format!("{} of {}", self.rank_name()?, suit.name()?))
            }
            Self::Joker(_) => Ok(String::from("Joker")),
        }
    }
}

/// Returns the cards sorted for display: standard cards ascending by
/// (rank, suit), then jokers with joker 1 before joker 2.
#[must_use]
pub fn display_order(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    sorted
}
