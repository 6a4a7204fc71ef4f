//! Deck construction, shuffling, and drawing.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};

/// The draw pile for a single game session.
///
/// Built once at game start and never regenerated; cards only leave the
/// deck through [`Deck::draw`].
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the draw pile, tail drawn first.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the full unshuffled 52-card deck.
    ///
    /// Cards are enumerated suit-major in canonical suit order, ranks Ace
    /// through King within each suit, so the deck holds no duplicate
    /// (rank, suit) pairs by construction.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the deck in place.
    ///
    /// Runs a Fisher-Yates pass driven entirely by the injected RNG, so the
    /// permutation replays exactly for a given RNG state.
    pub fn shuffle(&mut self, rng: &mut ChaCha8Rng) {
        for i in 0..self.cards.len() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    /// Removes and returns the last `count` cards from the tail.
    ///
    /// If `count` exceeds the remaining deck size, no cards are drawn and
    /// the returned list is empty. A short deck is never an error.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        if count > self.cards.len() {
            return Vec::new();
        }
        self.cards.split_off(self.cards.len() - count)
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the cards currently in the deck, tail drawn first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the deck contents.
    ///
    /// Intended for tests that need a scripted draw order; the tail of
    /// `cards` is drawn first.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
