//! Deck and dealing configuration.

/// Configuration options for a deck and deal.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use rummyrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_jokers(2)
///     .with_hand_size(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of ranks per suit, starting at 1.
    pub ranks: u8,
    /// Number of suits, starting at 1.
    pub suits: u8,
    /// Number of jokers appended after the ranked cards.
    pub jokers: u8,
    /// Number of cards dealt to each hand.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            ranks: 13,
            suits: 4,
            jokers: 0,
            hand_size: 7,
        }
    }
}

impl GameOptions {
    /// Sets the number of ranks.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ranks(10);
    /// assert_eq!(options.ranks, 10);
    /// ```
    #[must_use]
    pub const fn with_ranks(mut self, ranks: u8) -> Self {
        self.ranks = ranks;
        self
    }

    /// Sets the number of suits.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_suits(2);
    /// assert_eq!(options.suits, 2);
    /// ```
    #[must_use]
    pub const fn with_suits(mut self, suits: u8) -> Self {
        self.suits = suits;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use rummyrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(10);
    /// assert_eq!(options.hand_size, 10);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Returns the total number of cards in a deck built with these options.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        self.ranks as usize * self.suits as usize + self.jokers as usize
    }
}
