//! Rule evaluation: playability, groups, runs and run building.

use log::debug;

use crate::card::Card;

mod builder;
mod groups;
mod playable;
mod runs;

pub use builder::{AUTO_PLAY_NOTICE, BuildState, Choice, RunBuilder, build_run};
pub use groups::{Group, detect_groups};
pub use playable::{is_playable, playable_cards};
pub use runs::{Run, detect_runs, extend_run};

/// Minimum number of cards in a group.
pub const MIN_GROUP_LEN: usize = 2;

/// Minimum number of cards in a run.
pub const MIN_RUN_LEN: usize = 3;

/// Kinds of combinations a hand can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinations {
    /// Neither groups nor runs.
    None,
    /// Groups only.
    Groups,
    /// Runs only.
    Runs,
    /// Both groups and runs.
    Both,
}

impl Combinations {
    /// Returns whether any combination is available.
    #[must_use]
    pub const fn any(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns whether groups are available.
    #[must_use]
    pub const fn has_groups(self) -> bool {
        matches!(self, Self::Groups | Self::Both)
    }

    /// Returns whether runs are available.
    #[must_use]
    pub const fn has_runs(self) -> bool {
        matches!(self, Self::Runs | Self::Both)
    }
}

/// Returns which combinations the hand can play given its playable cards.
#[must_use]
pub fn available_combinations(hand: &[Card], playable: &[Card]) -> Combinations {
    let groups = !detect_groups(hand, playable).is_empty();
    let runs = !detect_runs(hand, playable).is_empty();

    let combinations = match (groups, runs) {
        (false, false) => Combinations::None,
        (true, false) => Combinations::Groups,
        (false, true) => Combinations::Runs,
        (true, true) => Combinations::Both,
    };
    debug!("Available combinations: {combinations:?}");
    combinations
}
