//! A single-player poker hand scoring game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that owns a shuffled deck, the
//! player's hand and discard pile, and a running score. The player toggles
//! up to five cards into a selection; the selection is classified into its
//! best poker hand category after every change, and submitting it scores
//! the selected card values against a fixed category multiplier before
//! drawing replacement cards.
//!
//! # Example
//!
//! ```
//! use pokersol::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let first = game.hand()[0];
//! game.toggle_select(first);
//! assert!(game.category().is_some());
//!
//! let result = game.submit().expect("one card is selected");
//! assert_eq!(game.score(), result.score_delta);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod eval;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod scoring;

// Re-export main types
pub use card::{Card, Color, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::ActionError;
pub use eval::{HandCategory, evaluate};
pub use game::Game;
pub use hand::{Hand, SELECTION_CAP};
pub use options::GameOptions;
pub use result::{DiscardResult, PlayResult};
pub use scoring::{card_sum, hand_score};
