//! Poker hand classification.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Suit};

/// Poker hand category, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    /// No other category matched.
    HighCard,
    /// One rank appears twice.
    OnePair,
    /// Exactly two ranks appear twice.
    TwoPair,
    /// One rank appears three times, without a pair beside it.
    ThreeOfAKind,
    /// Five consecutive distinct ranks (Ace plays high or low).
    Straight,
    /// Exactly five cards of one suit, not consecutive.
    Flush,
    /// One triple plus one pair.
    FullHouse,
    /// One rank appears four times.
    FourOfAKind,
    /// Straight and flush together, below the royal ranks.
    StraightFlush,
    /// The ten-through-ace straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// All categories, weakest first.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::OnePair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];

    /// Returns the display label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        }
    }
}

/// Classifies a selection of cards into its best matching category.
///
/// Returns `None` for an empty selection. Classification is a pure
/// function of the card multiset, so repeated calls agree.
#[must_use]
pub fn evaluate(cards: &[Card]) -> Option<HandCategory> {
    if cards.is_empty() {
        return None;
    }

    let mut rank_counts: HashMap<u8, usize> = HashMap::new();
    let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
    for card in cards {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
        *suit_counts.entry(card.suit).or_insert(0) += 1;
    }

    // A flush needs exactly five cards of one suit; four suited cards in a
    // four-card selection never flush.
    let is_flush = suit_counts.values().any(|&count| count == 5);
    let is_straight = has_straight(&rank_counts);

    let category = if is_flush && is_straight && is_royal_ranks(&rank_counts) {
        HandCategory::RoyalFlush
    } else if is_flush && is_straight {
        HandCategory::StraightFlush
    } else if is_flush {
        HandCategory::Flush
    } else if is_straight {
        HandCategory::Straight
    } else if rank_counts.values().any(|&count| count == 4) {
        HandCategory::FourOfAKind
    } else if has_full_house(&rank_counts) {
        HandCategory::FullHouse
    } else if rank_counts.values().any(|&count| count == 3) {
        HandCategory::ThreeOfAKind
    } else if rank_counts.values().filter(|&&count| count == 2).count() == 2 {
        HandCategory::TwoPair
    } else if rank_counts.values().any(|&count| count == 2) {
        HandCategory::OnePair
    } else {
        HandCategory::HighCard
    };

    Some(category)
}

/// Position of a rank in ace-high order (2 first, Ace last).
const fn order_index(rank: u8) -> u8 {
    match rank {
        1 => 12,
        rank => rank - 2,
    }
}

fn has_straight(rank_counts: &HashMap<u8, usize>) -> bool {
    // The ace-low wheel, checked independently of the window scan below.
    if [1, 2, 3, 4, 5].iter().all(|rank| rank_counts.contains_key(rank)) {
        return true;
    }

    // Duplicate ranks never block a straight; the scan runs over distinct
    // ranks and needs at least five of them.
    let mut indices: Vec<u8> = rank_counts.keys().map(|&rank| order_index(rank)).collect();
    indices.sort_unstable();
    if indices.len() < 5 {
        return false;
    }

    indices.windows(5).any(|window| window[4] - window[0] == 4)
}

fn is_royal_ranks(rank_counts: &HashMap<u8, usize>) -> bool {
    rank_counts.len() == 5
        && [1, 10, 11, 12, 13]
            .iter()
            .all(|rank| rank_counts.contains_key(rank))
}

fn has_full_house(rank_counts: &HashMap<u8, usize>) -> bool {
    let triples = rank_counts.values().filter(|&&count| count == 3).count();
    let pairs = rank_counts.values().filter(|&&count| count == 2).count();
    triples == 1 && pairs == 1
}
