//! Outcome types returned by the mutating game actions.

use crate::eval::HandCategory;

/// Result of submitting a selection for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayResult {
    /// The category the selection scored as.
    pub category: HandCategory,
    /// Sum of the scoring values of the played cards.
    pub card_sum: u64,
    /// Multiplier applied for the category.
    pub multiplier: u64,
    /// Score added by this play.
    pub score_delta: u64,
    /// Running score total after this play.
    pub total_score: u64,
    /// Number of cards that were selected when the play was made.
    pub cards_played: usize,
    /// Number of replacement cards actually drawn (0 on a short deck).
    pub cards_drawn: usize,
}

/// Result of discarding the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscardResult {
    /// Number of cards that were selected when the discard was made.
    pub cards_discarded: usize,
    /// Number of replacement cards actually drawn (0 on a short deck).
    pub cards_drawn: usize,
}
