//! Game configuration options.

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjrules::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_fresh_shoe_each_round(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Whether every deal starts from a freshly shuffled 52-card deck.
    ///
    /// When `false` the deck carries over between rounds and is replaced
    /// only once it can no longer cover a deal.
    pub fresh_shoe_each_round: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            fresh_shoe_each_round: true,
        }
    }
}

impl GameOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets whether every deal uses a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::GameOptions;
    ///
    /// let options = GameOptions::default().with_fresh_shoe_each_round(false);
    /// assert_eq!(options.fresh_shoe_each_round, false);
    /// ```
    #[must_use]
    pub const fn with_fresh_shoe_each_round(mut self, fresh: bool) -> Self {
        self.fresh_shoe_each_round = fresh;
        self
    }
}
