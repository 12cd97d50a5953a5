//! Dealing, committing plays and display integration tests.

use core::time::Duration;

use rummyrs::console::{ConsoleInput, clear, slow_type};
use rummyrs::{
    Card, CardError, DealError, Deck, DiscardPile, GameOptions, Hand, InputError, InputProvider,
    PlayError, Suit, build_run, detect_groups, format_groups, format_played, format_run,
    playable_cards, show_hand,
};

const fn card(rank: u8, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn pile_with(cards: &[Card]) -> DiscardPile {
    let mut pile = DiscardPile::new();
    for card in cards {
        pile.push(*card);
    }
    pile
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_ranks(10)
        .with_suits(2)
        .with_jokers(2)
        .with_hand_size(5);

    assert_eq!(options.ranks, 10);
    assert_eq!(options.suits, 2);
    assert_eq!(options.jokers, 2);
    assert_eq!(options.hand_size, 5);
    assert_eq!(options.deck_size(), 22);
    assert_eq!(GameOptions::default().deck_size(), 52);
}

#[test]
fn new_deck_is_ordered_by_rank_then_suit() {
    let deck = Deck::new(&GameOptions::default().with_jokers(2));
    let cards: Vec<Card> = deck.cards().copied().collect();

    assert_eq!(cards.len(), 54);
    assert_eq!(
        &cards[..5],
        &[
            card(1, Suit::CLUBS),
            card(1, Suit::DIAMONDS),
            card(1, Suit::HEARTS),
            card(1, Suit::SPADES),
            card(2, Suit::CLUBS),
        ]
    );
    assert_eq!(&cards[51..], &[card(13, Suit::SPADES), Card::joker(1), Card::joker(2)]);
}

#[test]
fn shuffle_is_seeded() {
    let options = GameOptions::default().with_jokers(2);

    let first = Deck::shuffled(&options, 7);
    assert_eq!(first, Deck::shuffled(&options, 7));
    assert_ne!(first, Deck::shuffled(&options, 8));
    assert_ne!(first, Deck::new(&options));

    let mut cards: Vec<Card> = first.cards().copied().collect();
    cards.sort_unstable();
    let expected: Vec<Card> = Deck::new(&options).cards().copied().collect();
    assert_eq!(cards, expected);
}

#[test]
fn deal_takes_from_the_top() {
    let mut deck = Deck::new(&GameOptions::default());

    assert_eq!(deck.deal_one().unwrap(), card(1, Suit::CLUBS));
    let hand = deck.deal(3).unwrap();
    assert_eq!(
        hand,
        [
            card(1, Suit::DIAMONDS),
            card(1, Suit::HEARTS),
            card(1, Suit::SPADES)
        ]
    );
    assert_eq!(deck.len(), 48);
    assert!(deck.deal(0).unwrap().is_empty());
}

#[test]
fn deal_reports_insufficient_cards() {
    let mut deck = Deck::from_cards(vec![card(1, Suit::CLUBS), card(2, Suit::CLUBS)]);

    assert_eq!(
        deck.deal(3).unwrap_err(),
        DealError::NotEnoughCards {
            requested: 3,
            available: 2
        }
    );
    assert_eq!(deck.len(), 2);

    deck.deal(2).unwrap();
    assert!(deck.is_empty());
    assert_eq!(
        deck.deal_one().unwrap_err(),
        DealError::NotEnoughCards {
            requested: 1,
            available: 0
        }
    );
}

#[test]
fn commit_moves_cards_in_order() {
    let mut hand = Hand::from_cards(vec![
        card(5, Suit::CLUBS),
        card(9, Suit::DIAMONDS),
        card(6, Suit::CLUBS),
        card(7, Suit::CLUBS),
    ]);
    let mut pile = pile_with(&[card(4, Suit::CLUBS)]);

    let played = [card(5, Suit::CLUBS), card(6, Suit::CLUBS), card(7, Suit::CLUBS)];
    hand.commit_play(&played, &mut pile).unwrap();

    assert_eq!(hand.cards(), &[card(9, Suit::DIAMONDS)]);
    assert_eq!(
        pile.cards(),
        &[
            card(4, Suit::CLUBS),
            card(5, Suit::CLUBS),
            card(6, Suit::CLUBS),
            card(7, Suit::CLUBS),
        ]
    );
    assert_eq!(pile.top(), Some(&card(7, Suit::CLUBS)));
}

#[test]
fn failed_commit_changes_nothing() {
    let cards = vec![card(5, Suit::CLUBS), card(6, Suit::CLUBS)];
    let mut hand = Hand::from_cards(cards.clone());
    let mut pile = pile_with(&[card(4, Suit::CLUBS)]);

    assert_eq!(
        hand.commit_play(&[card(5, Suit::CLUBS), card(8, Suit::CLUBS)], &mut pile)
            .unwrap_err(),
        PlayError::CardNotInHand
    );
    assert_eq!(
        hand.commit_play(&[card(5, Suit::CLUBS), card(5, Suit::CLUBS)], &mut pile)
            .unwrap_err(),
        PlayError::CardNotInHand
    );
    assert_eq!(
        hand.commit_play(&[], &mut pile).unwrap_err(),
        PlayError::EmptyPlay
    );

    assert_eq!(hand.cards(), cards.as_slice());
    assert_eq!(pile.len(), 1);
}

#[test]
fn committing_a_detected_group() {
    let mut hand = Hand::from_cards(vec![
        card(3, Suit::HEARTS),
        card(10, Suit::SPADES),
        card(3, Suit::CLUBS),
        Card::joker(1),
    ]);
    let mut pile = pile_with(&[card(2, Suit::HEARTS)]);

    let playable = hand.playable(&pile);
    assert_eq!(playable.len(), 4);

    let groups = detect_groups(hand.cards(), &playable);
    assert_eq!(groups.len(), 1);

    let group = groups[0].clone();
    hand.commit_play(group.cards(), &mut pile).unwrap();

    assert_eq!(hand.len(), 2);
    assert!(!hand.contains(&card(3, Suit::HEARTS)));
    assert!(!hand.contains(&card(3, Suit::CLUBS)));
    assert_eq!(pile.top(), Some(&card(3, Suit::CLUBS)));
    assert_eq!(&pile.cards()[1..], group.cards());
}

#[test]
fn committing_a_built_run() {
    let mut hand = Hand::from_cards(vec![
        card(8, Suit::HEARTS),
        card(9, Suit::CLUBS),
        card(10, Suit::SPADES),
        card(2, Suit::DIAMONDS),
    ]);
    let mut pile = pile_with(&[card(7, Suit::DIAMONDS)]);
    let mut input = rummyrs::ScriptedInput::new([1, 1]);

    let start = hand.playable(&pile)[0];
    let run = build_run(start, hand.cards(), &mut input).unwrap();
    hand.commit_play(run.cards(), &mut pile).unwrap();

    assert_eq!(hand.cards(), &[card(2, Suit::DIAMONDS)]);
    assert_eq!(pile.len(), 4);
    assert_eq!(pile.top(), Some(&card(10, Suit::SPADES)));
}

#[test]
fn hand_basics() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());

    hand.add_cards([Card::joker(1), card(4, Suit::SPADES)]);
    hand.add_card(card(4, Suit::CLUBS));
    assert_eq!(hand.len(), 3);

    hand.sort();
    assert_eq!(
        hand.cards(),
        &[card(4, Suit::CLUBS), card(4, Suit::SPADES), Card::joker(1)]
    );

    assert!(hand.remove(&card(4, Suit::SPADES)));
    assert!(!hand.remove(&card(4, Suit::SPADES)));
    assert_eq!(hand.len(), 2);

    let pile = DiscardPile::new();
    assert_eq!(hand.playable(&pile), hand.cards());
}

#[test]
fn show_hand_lists_cards_in_display_order() {
    let hand = [
        Card::joker(2),
        card(13, Suit::DIAMONDS),
        card(1, Suit::SPADES),
        Card::joker(1),
    ];

    assert_eq!(
        show_hand(&hand).unwrap(),
        "(1) Ace of Spades\n(2) King of Diamonds\n(3) Joker\n(4) Joker"
    );
    assert_eq!(show_hand(&[]).unwrap(), "");
    assert_eq!(
        show_hand(&[card(20, Suit::CLUBS)]).unwrap_err(),
        CardError::InvalidRank(20)
    );
}

#[test]
fn group_and_run_formatting() {
    let hand = [
        card(7, Suit::CLUBS),
        card(7, Suit::HEARTS),
        card(2, Suit::SPADES),
        card(2, Suit::DIAMONDS),
    ];
    let mut groups = detect_groups(&hand, &hand);
    assert_eq!(
        format_groups(&groups).unwrap(),
        "(1) Seven of Clubs, Seven of Hearts\n(2) Two of Spades, Two of Diamonds"
    );

    groups.sort();
    assert_eq!(
        format_groups(&groups).unwrap(),
        "(1) Two of Spades, Two of Diamonds\n(2) Seven of Clubs, Seven of Hearts"
    );

    let run = [card(3, Suit::CLUBS), card(4, Suit::CLUBS), card(5, Suit::HEARTS)];
    assert_eq!(
        format_run(&run).unwrap(),
        "Three of Clubs, Four of Clubs, Five of Hearts"
    );
    assert_eq!(
        format_played(&run).unwrap(),
        "Three of Clubs, the Four of Clubs, the Five of Hearts"
    );
}

#[test]
fn playable_cards_match_hand_playable() {
    let cards = vec![card(3, Suit::HEARTS), card(9, Suit::SPADES)];
    let hand = Hand::from_cards(cards.clone());
    let pile = pile_with(&[card(5, Suit::HEARTS)]);

    assert_eq!(hand.playable(&pile), playable_cards(&cards, &card(5, Suit::HEARTS)));
    assert_eq!(hand.playable(&pile), cards);
}

#[test]
fn console_input_asks_again_until_valid() {
    let mut input = ConsoleInput::new(&b"two\n7\n\n3\n"[..], Vec::<u8>::new());

    assert_eq!(input.request_integer("Pick: ", 0, 3), Ok(3));

    let output = String::from_utf8(input.into_writer()).unwrap();
    assert_eq!(
        output,
        "Pick: Please enter a number. Please try again: \
         Please enter one of the numbers listed above. Please try again: \
         Please enter a number. Please try again: "
    );
}

#[test]
fn console_input_closes_at_end_of_input() {
    let mut input = ConsoleInput::new(&b"abc\n"[..], Vec::<u8>::new());
    assert_eq!(input.request_integer("Pick: ", 1, 2), Err(InputError::Closed));
}

#[test]
fn console_word_pause_and_notify() {
    let mut input = ConsoleInput::new(&b"42\nAlice\n\n"[..], Vec::<u8>::new());

    assert_eq!(input.request_word("Name: ").unwrap(), "Alice");
    input.pause().unwrap();
    input.notify("Done.");

    let output = String::from_utf8(input.into_writer()).unwrap();
    assert!(output.starts_with("Name: That is an invalid input."));
    assert!(output.ends_with("Press enter to continue Done.\n"));
}

#[test]
fn console_effects_write_text() {
    let mut out = Vec::<u8>::new();
    slow_type(&mut out, "Hi!", Duration::ZERO).unwrap();
    assert_eq!(out, b"Hi!");

    let mut out = Vec::<u8>::new();
    clear(&mut out, 3).unwrap();
    assert_eq!(out, b"\n\n\n");
}
