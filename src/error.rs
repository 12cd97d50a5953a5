//! Error types for card and rule operations.

use thiserror::Error;

/// Errors that can occur when naming a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank has no name.
    #[error("invalid card rank {0}")]
    InvalidRank(u8),
    /// Suit has no name.
    #[error("invalid card suit {0}")]
    InvalidSuit(u8),
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("insufficient cards available to deal: requested {requested}, available {available}")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        available: usize,
    },
}

/// Errors that can occur when committing a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// No cards were given.
    #[error("no cards to play")]
    EmptyPlay,
    /// A played card is not in the hand.
    #[error("card not in hand")]
    CardNotInHand,
}

/// Errors reported by an input provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input source has no more answers.
    #[error("input closed")]
    Closed,
}

/// Errors that can occur while building a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// A run cannot start with a joker.
    #[error("a run cannot start with a joker")]
    JokerStart,
    /// The starting card is not in the hand.
    #[error("starting card not in hand")]
    StartNotInHand,
    /// The run is too short to stop but nothing can extend it.
    #[error("no card can extend the run")]
    NoCandidates,
    /// Stopping is not allowed until the run reaches its minimum length.
    #[error("the run is too short to stop")]
    StopNotAllowed,
    /// Selection is outside the offered options.
    #[error("selection {selection} is out of range (max {max})")]
    SelectionOutOfRange {
        /// The rejected selection.
        selection: u32,
        /// The largest valid selection.
        max: u32,
    },
    /// The run is still awaiting a choice.
    #[error("the run is not finished")]
    NotFinished,
    /// The builder is already done and accepts no more choices.
    #[error("the run is already finished")]
    AlreadyFinished,
    /// A card in the prompt could not be named.
    #[error("card error: {0}")]
    Card(#[from] CardError),
    /// The input provider failed.
    #[error("input error: {0}")]
    Input(#[from] InputError),
}
