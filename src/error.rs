//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when playing a selection.
///
/// Most edge conditions in this domain are policy no-ops rather than
/// errors: short-deck draws draw nothing, over-cap selects are ignored,
/// and discarding a card no longer held skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No cards are selected, so there is no category to score.
    #[error("no cards selected")]
    EmptySelection,
}
