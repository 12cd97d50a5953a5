//! Plain-text formatting of hands, groups and runs.
//!
//! Every function returns the text for the caller to print.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, display_order};
use crate::error::CardError;
use crate::rules::Group;

fn names(cards: &[Card]) -> Result<Vec<String>, CardError> {
    cards.iter().map(Card::name).collect()
}

/// Lists the cards in display order, one `(i) <name>` line each.
///
/// # Errors
///
/// Returns an error if a card cannot be named.
///
/// ```
/// use rummyrs::{Card, Suit, show_hand};
///
/// let hand = [Card::joker(1), Card::new(12, Suit::HEARTS), Card::new(2, Suit::CLUBS)];
/// assert_eq!(
///     show_hand(&hand).unwrap(),
///     "(1) Two of Clubs\n(2) Queen of Hearts\n(3) Joker"
/// );
/// ```
pub fn show_hand(cards: &[Card]) -> Result<String, CardError> {
    let lines = display_order(cards)
        .iter()
        .enumerate()
        .map(|(index, card)| card.name().map(|name| format!("({}) {name}", index + 1)))
        .collect::<Result<Vec<_>, CardError>>()?;
    Ok(lines.join("\n"))
}

/// Lists the groups in the given order, one `(i) <name>, <name>` line each.
///
/// # Errors
///
/// Returns an error if a card cannot be named.
pub fn format_groups(groups: &[Group]) -> Result<String, CardError> {
    let lines = groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            names(group.cards()).map(|names| format!("({}) {}", index + 1, names.join(", ")))
        })
        .collect::<Result<Vec<_>, CardError>>()?;
    Ok(lines.join("\n"))
}

/// Joins the names of the cards in a run with ", ".
///
/// # Errors
///
/// Returns an error if a card cannot be named.
pub fn format_run(cards: &[Card]) -> Result<String, CardError> {
    Ok(names(cards)?.join(", "))
}

/// Joins the names of played cards with ", the ", for messages such as
/// "You played the Five of Clubs, the Six of Clubs".
///
/// # Errors
///
/// Returns an error if a card cannot be named.
pub fn format_played(cards: &[Card]) -> Result<String, CardError> {
    Ok(names(cards)?.join(", the "))
}
