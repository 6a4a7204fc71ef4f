//! Player hand, selection, and discard pile state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Maximum number of cards that can be selected at once.
pub const SELECTION_CAP: usize = 5;

/// The player's held cards, the current selection, and the discard pile.
///
/// The selection is an ordered subset of the hand matched by card value
/// equality; the discard pile is append-only and never returns to the deck.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Held cards in hand order.
    cards: Vec<Card>,
    /// Selected cards in selection order, at most [`SELECTION_CAP`].
    selection: Vec<Card>,
    /// Every card discarded so far.
    discards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            selection: Vec::new(),
            discards: Vec::new(),
        }
    }

    /// Adds drawn cards to the back of the hand.
    pub fn add_cards(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// Returns the held cards in hand order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the selected cards in selection order.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        &self.selection
    }

    /// Returns every card discarded so far.
    #[must_use]
    pub fn discards(&self) -> &[Card] {
        &self.discards
    }

    /// Returns the number of held cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether `card` is currently selected.
    #[must_use]
    pub fn is_selected(&self, card: Card) -> bool {
        self.selection.contains(&card)
    }

    /// Toggles the selection state of `card`.
    ///
    /// An already-selected card is always deselected, regardless of the cap.
    /// Otherwise the card is selected unless the selection already holds
    /// [`SELECTION_CAP`] cards, in which case the toggle is silently ignored.
    ///
    /// Returns whether the selection changed.
    pub fn toggle_select(&mut self, card: Card) -> bool {
        if let Some(pos) = self.selection.iter().position(|&c| c == card) {
            self.selection.remove(pos);
            true
        } else if self.selection.len() < SELECTION_CAP {
            self.selection.push(card);
            true
        } else {
            false
        }
    }

    /// Moves every selected card from the hand to the discard pile.
    ///
    /// Cards are removed in selection order, each taking the first equal
    /// card still held; a selected card no longer in the hand is skipped,
    /// not an error. The selection is cleared.
    ///
    /// Returns the pre-discard selection size, which is the number of
    /// replacement cards to draw even when some cards were skipped.
    pub fn discard_selected(&mut self) -> usize {
        let selected = core::mem::take(&mut self.selection);

        for card in &selected {
            if let Some(pos) = self.cards.iter().position(|&c| c == *card) {
                self.discards.push(self.cards.remove(pos));
            }
        }

        selected.len()
    }
}
