//! Rummy-style card helpers with optional `no_std` support.
//!
//! The crate builds and deals decks, formats hands for display, and
//! evaluates which cards, groups and runs a hand can play onto the discard
//! pile. Runs are built one card at a time by a [`RunBuilder`], which never
//! blocks; [`build_run`] drives it from any [`InputProvider`].
//!
//! # Example
//!
//! ```
//! use rummyrs::{Card, Combinations, Suit, available_combinations, detect_runs, playable_cards};
//!
//! let hand = [
//!     Card::new(5, Suit::CLUBS),
//!     Card::new(6, Suit::CLUBS),
//!     Card::new(7, Suit::CLUBS),
//!     Card::new(9, Suit::DIAMONDS),
//! ];
//! let top = Card::new(4, Suit::CLUBS);
//!
//! let playable = playable_cards(&hand, &top);
//! assert_eq!(playable, &hand[..3]);
//! assert_eq!(detect_runs(&hand, &playable), [hand[0]]);
//! assert_eq!(available_combinations(&hand, &playable), Combinations::Runs);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod console;
pub mod deck;
pub mod display;
pub mod error;
pub mod hand;
pub mod input;
pub mod options;
pub mod rules;

// Re-export main types
pub use card::{Card, Suit, display_order};
pub use deck::Deck;
pub use display::{format_groups, format_played, format_run, show_hand};
pub use error::{CardError, DealError, InputError, PlayError, RunError};
pub use hand::{DiscardPile, Hand};
pub use input::{InputProvider, ScriptedInput};
pub use options::GameOptions;
pub use rules::{
    AUTO_PLAY_NOTICE, BuildState, Choice, Combinations, Group, MIN_GROUP_LEN, MIN_RUN_LEN, Run,
    RunBuilder, available_combinations, build_run, detect_groups, detect_runs, extend_run,
    is_playable, playable_cards,
};
