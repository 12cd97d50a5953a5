use alloc::vec::Vec;

use crate::card::Card;

/// Returns whether `card` can be played onto `top`.
///
/// Jokers are always playable. Other cards must rank above the top card or
/// share its suit. A joker on top counts as rank equal to its id with no
/// suit, so only higher ranks and jokers follow it.
#[must_use]
pub fn is_playable(card: &Card, top: &Card) -> bool {
    let Card::Standard { rank, suit } = *card else {
        return true;
    };

    match *top {
        Card::Standard {
            rank: top_rank,
            suit: top_suit,
        } => rank > top_rank || suit == top_suit,
        Card::Joker(id) => rank > id,
    }
}

/// Returns the cards in `hand` that can be played onto `top`, in hand order.
#[must_use]
pub fn playable_cards(hand: &[Card], top: &Card) -> Vec<Card> {
    hand.iter()
        .filter(|card| is_playable(card, top))
        .copied()
        .collect()
}
