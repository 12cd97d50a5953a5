use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;

use super::MIN_RUN_LEN;

/// Cards with consecutive ascending ranks and no jokers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Run {
    cards: Vec<Card>,
    auto_stopped: bool,
}

impl Run {
    pub(super) const fn new(cards: Vec<Card>, auto_stopped: bool) -> Self {
        Self {
            cards,
            auto_stopped,
        }
    }

    /// Returns the cards in the run.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the run ended because no card could extend it.
    #[must_use]
    pub const fn auto_stopped(&self) -> bool {
        self.auto_stopped
    }

    /// Returns the number of cards in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`, a run holds at least three cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the run, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Returns the first hand card (no jokers) ranked one above `rank`.
fn next_in_hand(hand: &[Card], rank: u8) -> Option<Card> {
    hand.iter()
        .copied()
        .find(|card| card.rank().is_some_and(|r| Some(r) == rank.checked_add(1)))
}

/// Greedily extends a run from `start` using the hand.
///
/// Each step appends the first hand card ranked one above the last card.
/// Returns just the start for a joker.
#[must_use]
pub fn extend_run(hand: &[Card], start: Card) -> Vec<Card> {
    let mut chain = vec![start];
    let mut last = start.rank();

    while let Some(card) = last.and_then(|rank| next_in_hand(hand, rank)) {
        chain.push(card);
        last = card.rank();
    }

    chain
}

/// Returns the playable cards that start a run of at least three cards.
///
/// Runs found from different starts may share cards.
#[must_use]
pub fn detect_runs(hand: &[Card], playable: &[Card]) -> Vec<Card> {
    let starts: Vec<Card> = playable
        .iter()
        .filter(|card| !card.is_joker())
        .filter(|card| extend_run(hand, **card).len() >= MIN_RUN_LEN)
        .copied()
        .collect();

    debug!("Detected {} run start(s)", starts.len());
    starts
}
