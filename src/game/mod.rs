//! Game engine and session state.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::eval::{self, HandCategory};
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;

/// A single-player poker scoring game session.
///
/// The session owns the deck, the player's hand with its selection and
/// discard pile, and the running score. All mutation goes through
/// `&mut self`; there is no shared or ambient state, so independent
/// sessions can run side by side and a session replays exactly from its
/// seed.
#[derive(Debug, Clone)]
pub struct Game {
    /// The draw pile.
    deck: Deck,
    /// The player's hand, selection, and discard pile.
    hand: Hand,
    /// Game options.
    options: GameOptions,
    /// Running score total, only ever increased by scored plays.
    score: u64,
    /// Category of the current selection, refreshed after every mutation.
    category: Option<HandCategory>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// Builds the standard deck, shuffles it with a ChaCha8 RNG seeded
    /// from `seed`, and draws the opening hand.
    ///
    /// # Example
    ///
    /// ```
    /// use pokersol::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.hand().len(), 7);
    /// assert_eq!(game.cards_remaining(), 45);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        let mut hand = Hand::new();
        hand.add_cards(deck.draw(options.hand_size));

        let category = eval::evaluate(hand.selection());

        Self {
            deck,
            hand,
            options,
            score: 0,
            category,
        }
    }

    /// Returns the held cards in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the selected cards in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        self.hand.selection()
    }

    /// Returns whether `card` is currently selected.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.hand.is_selected(card)
    }

    /// Returns every card discarded so far.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        self.hand.discards()
    }

    /// Returns the category of the current selection, or `None` when no
    /// cards are selected.
    #[must_use]
    pub const fn category(&self) -> Option<HandCategory> {
        self.category
    }

    /// Returns the running score total.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Replaces the deck contents.
    ///
    /// Intended for tests that need a scripted draw order; the tail of
    /// `cards` is drawn first.
    pub fn set_deck(&mut self, cards: Vec<Card>) {
        self.deck.set_cards(cards);
    }

    /// Re-evaluates the current selection into the cached category.
    pub(crate) fn refresh_category(&mut self) {
        self.category = eval::evaluate(self.hand.selection());
    }
}
