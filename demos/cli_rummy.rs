//! CLI rummy example: deal a hand and play groups or runs onto the pile.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use rummyrs::console::ConsoleInput;
use rummyrs::{
    Card, Combinations, Deck, DiscardPile, GameOptions, Hand, InputProvider, available_combinations,
    build_run, detect_groups, detect_runs, format_groups, format_played, show_hand,
};

const PLAY_GROUP: u32 = 1;
const PLAY_RUN: u32 = 2;
const PLAY_CARD: u32 = 3;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("Rummy CLI example (end input to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_jokers(2);
    let mut deck = Deck::shuffled(&options, seed);

    let mut hand = Hand::from_cards(deck.deal(options.hand_size)?);
    let mut pile = DiscardPile::new();
    pile.push(deck.deal_one()?);

    let mut input = ConsoleInput::stdio();

    while !hand.is_empty() {
        let Some(top) = pile.top().copied() else {
            break;
        };
        hand.sort();
        println!("\nDiscard pile: {}", top.name()?);
        println!("Your hand:\n{}", show_hand(hand.cards())?);

        let playable = hand.playable(&pile);
        if playable.is_empty() {
            match deck.deal_one() {
                Ok(card) => {
                    println!("You cannot play, you draw the {}.", card.name()?);
                    hand.add_card(card);
                    continue;
                }
                Err(err) => {
                    println!("{err}. Game over.");
                    return Ok(());
                }
            }
        }

        let played = match choose_play(&mut input, hand.cards(), &playable)? {
            PLAY_GROUP => {
                let mut groups = detect_groups(hand.cards(), &playable);
                groups.sort();
                let prompt = format!(
                    "Choose a group to play:\n{}\n> ",
                    format_groups(&groups)?
                );
                let choice = input.request_integer(&prompt, 1, groups.len() as u32)?;
                groups[choice as usize - 1].cards().to_vec()
            }
            PLAY_RUN => {
                let mut starts = detect_runs(hand.cards(), &playable);
                starts.sort_unstable();
                let prompt = format!(
                    "Choose a card to start your run:\n{}\n> ",
                    show_hand(&starts)?
                );
                let choice = input.request_integer(&prompt, 1, starts.len() as u32)?;
                build_run(starts[choice as usize - 1], hand.cards(), &mut input)?.into_cards()
            }
            _ => {
                let mut cards = playable.clone();
                cards.sort_unstable();
                let prompt = format!("Choose a card to play:\n{}\n> ", show_hand(&cards)?);
                let choice = input.request_integer(&prompt, 1, cards.len() as u32)?;
                vec![cards[choice as usize - 1]]
            }
        };

        hand.commit_play(&played, &mut pile)?;
        println!("You played the {}.", format_played(&played)?);
    }

    println!("\nYou played every card. You win!");
    Ok(())
}

fn choose_play(
    input: &mut impl InputProvider,
    hand: &[Card],
    playable: &[Card],
) -> Result<u32, Box<dyn std::error::Error>> {
    let combinations = available_combinations(hand, playable);
    let prompt = match combinations {
        Combinations::None => return Ok(PLAY_CARD),
        Combinations::Groups => "(1) Play a group\n(3) Play a single card\n> ",
        Combinations::Runs => "(2) Play a run\n(3) Play a single card\n> ",
        Combinations::Both => "(1) Play a group\n(2) Play a run\n(3) Play a single card\n> ",
    };

    loop {
        let choice = input.request_integer(prompt, PLAY_GROUP, PLAY_CARD)?;
        let allowed = match choice {
            PLAY_GROUP => combinations.has_groups(),
            PLAY_RUN => combinations.has_runs(),
            _ => true,
        };
        if allowed {
            return Ok(choice);
        }
        input.notify("That play is not available.");
    }
}
