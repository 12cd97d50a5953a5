//! Player hand and discard pile.

use alloc::vec::Vec;

use log::info;

use crate::card::Card;
use crate::error::PlayError;
use crate::rules::playable_cards;

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand.
    pub fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Removes a card from the hand, returning whether it was present.
    pub fn remove(&mut self, card: &Card) -> bool {
        self.cards
            .iter()
            .position(|c| c == card)
            .map(|index| self.cards.remove(index))
            .is_some()
    }

    /// Sorts the hand into display order.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards that can be played onto the pile.
    ///
    /// Every card is playable onto an empty pile.
    #[must_use]
    pub fn playable(&self, pile: &DiscardPile) -> Vec<Card> {
        pile.top()
            .map_or_else(|| self.cards.clone(), |top| playable_cards(&self.cards, top))
    }

    /// Moves the played cards from the hand onto the pile, in order.
    ///
    /// The last card becomes the new top of the pile. Either every card is
    /// moved or, on error, neither the hand nor the pile is changed.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` is empty or any card is not in the hand
    /// (including a card listed twice).
    pub fn commit_play(&mut self, cards: &[Card], pile: &mut DiscardPile) -> Result<(), PlayError> {
        if cards.is_empty() {
            return Err(PlayError::EmptyPlay);
        }

        let mut remaining = self.cards.clone();
        for card in cards {
            let index = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(PlayError::CardNotInHand)?;
            remaining.remove(index);
        }

        self.cards = remaining;
        pile.cards.extend_from_slice(cards);
        info!("Played {} card(s), {} left in hand", cards.len(), self.len());

        Ok(())
    }
}

/// The discard pile. The most recently played card is on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscardPile {
    /// Cards in the pile, bottom first.
    cards: Vec<Card>,
}

impl DiscardPile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Places a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns all cards in the pile, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
