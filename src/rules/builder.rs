use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use log::debug;

use crate::card::Card;
use crate::display::show_hand;
use crate::error::RunError;
use crate::input::InputProvider;

use super::MIN_RUN_LEN;
use super::runs::Run;

/// Shown when a run ends because nothing can extend it.
pub const AUTO_PLAY_NOTICE: &str =
    "Your run has automatically been played as you have no more cards which can continue the run.";

/// Cards offered to extend a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Candidates in display order; selection `k` picks `candidates[k - 1]`.
    candidates: Vec<Card>,
    /// Whether 0 (stop and play the run) is accepted.
    stop_allowed: bool,
}

impl Choice {
    /// Returns the candidate cards in the order they are offered.
    #[must_use]
    pub fn candidates(&self) -> &[Card] {
        &self.candidates
    }

    /// Returns whether the player may stop instead of extending.
    #[must_use]
    pub const fn stop_allowed(&self) -> bool {
        self.stop_allowed
    }

    /// Returns the smallest valid selection.
    #[must_use]
    pub const fn lower(&self) -> u32 {
        if self.stop_allowed { 0 } else { 1 }
    }

    /// Returns the largest valid selection.
    #[must_use]
    pub fn upper(&self) -> u32 {
        u32::try_from(self.candidates.len()).unwrap_or(u32::MAX)
    }

    /// Returns the prompt listing the candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate cannot be named.
    pub fn prompt(&self) -> Result<String, RunError> {
        let listing = show_hand(&self.candidates)?;
        let prompt = if self.stop_allowed {
            format!(
                "Please choose a card below to continue your run, or 0 to play your current run: \n{listing}\n> "
            )
        } else {
            format!("Please choose a card below to continue your run:\n{listing}\n> ")
        };
        Ok(prompt)
    }
}

/// Run builder state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildState {
    /// Waiting for the player to pick a card (or stop).
    AwaitingChoice(Choice),
    /// The run is complete and can be played.
    Done {
        /// Whether the run ended because no card could extend it.
        auto_stopped: bool,
    },
}

/// Extends a run one card at a time from the player's choices.
///
/// The builder never blocks: it reports a [`BuildState`] and waits for
/// [`RunBuilder::select`]. Use [`build_run`] to drive it from an
/// [`InputProvider`].
///
/// ```
/// use rummyrs::{BuildState, Card, RunBuilder, Suit};
///
/// let hand = [
///     Card::new(5, Suit::CLUBS),
///     Card::new(6, Suit::CLUBS),
///     Card::new(7, Suit::HEARTS),
/// ];
/// let mut builder = RunBuilder::new(hand[0], &hand).unwrap();
/// builder.select(&hand, 1).unwrap();
/// builder.select(&hand, 1).unwrap();
/// assert_eq!(builder.state(), &BuildState::Done { auto_stopped: true });
///
/// let run = builder.finish().unwrap();
/// assert_eq!(run.cards(), &hand);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunBuilder {
    cards: Vec<Card>,
    state: BuildState,
}

impl RunBuilder {
    /// Starts a run from `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is a joker, is not in the hand, or has no
    /// card ranked one above it in the hand.
    pub fn new(start: Card, hand: &[Card]) -> Result<Self, RunError> {
        if start.is_joker() {
            return Err(RunError::JokerStart);
        }
        if !hand.contains(&start) {
            return Err(RunError::StartNotInHand);
        }

        let cards = vec![start];
        let state = next_state(&cards, hand)?;
        Ok(Self { cards, state })
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &BuildState {
        &self.state
    }

    /// Returns the cards in the run so far.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the run is complete.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self.state, BuildState::Done { .. })
    }

    /// Applies a selection: 0 stops, `k` appends the `k`-th candidate.
    ///
    /// On error the builder is unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the run is already done, the selection is out of
    /// range, stopping is not yet allowed, or the new card leaves a run too
    /// short to stop with nothing to extend it.
    pub fn select(&mut self, hand: &[Card], selection: u32) -> Result<&BuildState, RunError> {
        let BuildState::AwaitingChoice(choice) = &self.state else {
            return Err(RunError::AlreadyFinished);
        };

        if selection == 0 {
            if !choice.stop_allowed {
                return Err(RunError::StopNotAllowed);
            }
            debug!("Run stopped at {} card(s)", self.cards.len());
            self.state = BuildState::Done {
                auto_stopped: false,
            };
            return Ok(&self.state);
        }

        let card = (selection as usize)
            .checked_sub(1)
            .and_then(|index| choice.candidates.get(index))
            .copied()
            .ok_or(RunError::SelectionOutOfRange {
                selection,
                max: choice.upper(),
            })?;

        let mut cards = self.cards.clone();
        cards.push(card);
        let state = next_state(&cards, hand)?;

        debug!("Run extended to {} card(s)", cards.len());
        self.cards = cards;
        self.state = state;
        Ok(&self.state)
    }

    /// Returns the finished run.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::NotFinished`] if a choice is still pending.
    pub fn finish(self) -> Result<Run, RunError> {
        match self.state {
            BuildState::Done { auto_stopped } => Ok(Run::new(self.cards, auto_stopped)),
            BuildState::AwaitingChoice(_) => Err(RunError::NotFinished),
        }
    }
}

fn next_state(cards: &[Card], hand: &[Card]) -> Result<BuildState, RunError> {
    let next_rank = cards
        .last()
        .and_then(Card::rank)
        .and_then(|rank| rank.checked_add(1));

    let mut candidates: Vec<Card> = hand
        .iter()
        .filter(|card| card.rank().is_some() && card.rank() == next_rank)
        .copied()
        .collect();
    candidates.sort_unstable();

    let stop_allowed = cards.len() >= MIN_RUN_LEN;
    match (candidates.is_empty(), stop_allowed) {
        (true, true) => {
            debug!("Run auto-stopped at {} card(s)", cards.len());
            Ok(BuildState::Done { auto_stopped: true })
        }
        (true, false) => Err(RunError::NoCandidates),
        (false, _) => Ok(BuildState::AwaitingChoice(Choice {
            candidates,
            stop_allowed,
        })),
    }
}

/// Builds a run from `start`, asking `input` for each choice.
///
/// Sends [`AUTO_PLAY_NOTICE`] through [`InputProvider::notify`] when the run
/// ends because nothing can extend it.
///
/// # Errors
///
/// Returns an error if the start is invalid, a card cannot be named, the
/// input closes, or the input returns a selection outside the offered bounds.
pub fn build_run<P>(start: Card, hand: &[Card], input: &mut P) -> Result<Run, RunError>
where
    P: InputProvider + ?Sized,
{
    let mut builder = RunBuilder::new(start, hand)?;

    while let BuildState::AwaitingChoice(choice) = builder.state() {
        let prompt = choice.prompt()?;
        let selection = input.request_integer(&prompt, choice.lower(), choice.upper())?;
        builder.select(hand, selection)?;
    }

    let run = builder.finish()?;
    if run.auto_stopped() {
        input.notify(AUTO_PLAY_NOTICE);
    }
    Ok(run)
}
