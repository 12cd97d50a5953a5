//! Deck construction, shuffling and dealing.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::error::DealError;
use crate::options::GameOptions;

/// A stock of cards. Cards are dealt from the front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates an unshuffled deck.
    ///
    /// Cards are ordered ascending by rank then suit, followed by jokers
    /// numbered from 1.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::{Card, Deck, GameOptions, Suit};
    ///
    /// let deck = Deck::new(&GameOptions::default().with_jokers(2));
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.cards().next(), Some(&Card::new(1, Suit::CLUBS)));
    /// ```
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        let mut cards = VecDeque::with_capacity(options.deck_size());

        for rank in 1..=options.ranks {
            for suit in 1..=options.suits {
                cards.push_back(Card::new(rank, Suit(suit)));
            }
        }
        for id in 1..=options.jokers {
            cards.push_back(Card::joker(id));
        }

        Self { cards }
    }

    /// Creates a deck shuffled with the given seed.
    #[must_use]
    pub fn shuffled(options: &GameOptions, seed: u64) -> Self {
        let mut deck = Self::new(options);
        deck.shuffle(seed);
        deck
    }

    /// Creates a deck from the given cards, the first card on top.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Shuffles the remaining cards with the given seed.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.make_contiguous().shuffle(&mut rng);
    }

    /// Deals one card from the top of the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck is empty.
    pub fn deal_one(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::NotEnoughCards {
            requested: 1,
            available: 0,
        })
    }

    /// Deals `count` cards from the top of the deck.
    ///
    /// Nothing is dealt unless all requested cards are available.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if fewer than `count` cards remain.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DealError> {
        if self.cards.len() < count {
            debug!(
                "Cannot deal {count} cards, {} remaining",
                self.cards.len()
            );
            return Err(DealError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..count).collect())
    }

    /// Returns the remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
