use crate::card::Card;
use crate::error::ActionError;
use crate::result::{DiscardResult, PlayResult};
use crate::scoring;

use super::Game;

impl Game {
    /// Toggles the selection state of `card` and re-evaluates the hand
    /// category.
    ///
    /// An already-selected card is always deselected; selecting past the
    /// five-card cap is silently ignored.
    ///
    /// Returns whether the selection changed.
    pub fn toggle_select(&mut self, card: Card) -> bool {
        let changed = self.hand.toggle_select(card);
        if changed {
            self.refresh_category();
        }
        changed
    }

    /// Discards the current selection and draws replacements.
    ///
    /// Every selected card moves to the discard pile (a selected card no
    /// longer held is skipped) and replacements equal to the pre-discard
    /// selection size are drawn; if the deck cannot cover the draw, no
    /// cards are drawn. An empty selection is a harmless no-op.
    pub fn discard(&mut self) -> DiscardResult {
        let (requested, drawn) = self.replace_selection();
        DiscardResult {
            cards_discarded: requested,
            cards_drawn: drawn,
        }
    }

    /// Scores the current selection, then discards it and draws
    /// replacements exactly as [`Game::discard`] does.
    ///
    /// The score delta is the selection's card value sum times the
    /// multiplier of its evaluated category, added to the running total.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::EmptySelection`] when nothing is selected;
    /// an empty selection has no category to score.
    pub fn submit(&mut self) -> Result<PlayResult, ActionError> {
        let category = self.category.ok_or(ActionError::EmptySelection)?;

        let card_sum = scoring::card_sum(self.hand.selection());
        let multiplier = category.multiplier();
        let score_delta = card_sum * multiplier;
        self.score += score_delta;

        let (requested, drawn) = self.replace_selection();

        Ok(PlayResult {
            category,
            card_sum,
            multiplier,
            score_delta,
            total_score: self.score,
            cards_played: requested,
            cards_drawn: drawn,
        })
    }

    /// Shared discard/redraw sequence for [`Game::discard`] and
    /// [`Game::submit`]: moves the selection to the discard pile, draws
    /// replacements equal to the pre-discard selection size, and
    /// re-evaluates the now-empty selection.
    fn replace_selection(&mut self) -> (usize, usize) {
        let requested = self.hand.discard_selected();
        let replacements = self.deck.draw(requested);
        let drawn = replacements.len();
        self.hand.add_cards(replacements);
        self.refresh_category();
        (requested, drawn)
    }
}
