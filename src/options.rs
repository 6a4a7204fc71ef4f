//! Game configuration options.

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokersol::GameOptions;
///
/// let options = GameOptions::default().with_hand_size(8);
/// assert_eq!(options.hand_size, 8);
/// ```
///
/// The deck size and the five-card selection cap are fixed constants, not
/// options: see [`DECK_SIZE`](crate::card::DECK_SIZE) and
/// [`SELECTION_CAP`](crate::hand::SELECTION_CAP).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of cards drawn into the opening hand.
    pub hand_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self { hand_size: 7 }
    }
}

impl GameOptions {
    /// Sets the opening hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use pokersol::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(5);
    /// assert_eq!(options.hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }
}
