//! Score computation for played selections.

use crate::card::Card;
use crate::eval::HandCategory;

impl HandCategory {
    /// Returns the fixed score multiplier for the category.
    ///
    /// The empty-selection sentinel has no multiplier; callers guard with
    /// [`evaluate`](crate::eval::evaluate) returning `Some` before scoring.
    #[must_use]
    pub const fn multiplier(self) -> u64 {
        match self {
            Self::HighCard => 1,
            Self::OnePair => 2,
            Self::TwoPair => 3,
            Self::ThreeOfAKind => 4,
            Self::Straight => 6,
            Self::Flush => 7,
            Self::FullHouse => 9,
            Self::FourOfAKind => 11,
            Self::StraightFlush => 12,
            Self::RoyalFlush => 14,
        }
    }
}

/// Returns the sum of the scoring values of `cards`.
#[must_use]
pub fn card_sum(cards: &[Card]) -> u64 {
    cards.iter().map(|card| u64::from(card.value())).sum()
}

/// Computes the score for a played selection: the card value sum times the
/// category multiplier.
#[must_use]
pub fn hand_score(cards: &[Card], category: HandCategory) -> u64 {
    card_sum(cards) * category.multiplier()
}
