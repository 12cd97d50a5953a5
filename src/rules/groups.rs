use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;

use super::MIN_GROUP_LEN;

/// Cards of the same rank, or all jokers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group {
    cards: Vec<Card>,
}

impl Group {
    /// Returns the cards in the group.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the rank shared by the group, or `None` for a group of jokers.
    #[must_use]
    pub fn rank(&self) -> Option<u8> {
        self.cards.first().and_then(Card::rank)
    }

    /// Returns the number of cards in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always `false`, a group holds at least two cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consumes the group, returning its cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

const fn same_kind(a: &Card, b: &Card) -> bool {
    match (*a, *b) {
        (Card::Standard { rank: a, .. }, Card::Standard { rank: b, .. }) => a == b,
        (Card::Joker(_), Card::Joker(_)) => true,
        _ => false,
    }
}

/// Returns the groups the playable cards can lead.
///
/// Each playable card, in order, collects every hand card of its rank (or
/// every joker) not already taken by an earlier group. A card belongs to at
/// most one returned group.
#[must_use]
pub fn detect_groups(hand: &[Card], playable: &[Card]) -> Vec<Group> {
    let mut consumed = vec![false; hand.len()];
    let mut groups = Vec::new();

    for trigger in playable {
        let already_taken = hand
            .iter()
            .zip(&consumed)
            .any(|(card, &taken)| taken && card == trigger);
        if already_taken {
            continue;
        }

        let mut cards = Vec::new();
        for (card, taken) in hand.iter().zip(consumed.iter_mut()) {
            if !*taken && same_kind(card, trigger) {
                *taken = true;
                cards.push(*card);
            }
        }

        if cards.len() >= MIN_GROUP_LEN {
            groups.push(Group { cards });
        }
    }

    debug!("Detected {} group(s)", groups.len());
    groups
}
