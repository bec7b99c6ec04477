//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals one player against the
//! dealer from a single 52-card deck and answers the three player actions
//! (deal, hit, stand) with a [`RoundResult`].
//!
//! # Example
//!
//! ```
//! use bjrules::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! let mut result = game.deal()?;
//! while result.is_in_progress() && result.player_score() < 17 {
//!     result = game.hit()?;
//! }
//! if result.is_in_progress() {
//!     result = game.stand()?;
//! }
//! assert!(result.is_resolved());
//! # Ok::<(), bjrules::ActionError>(())
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
pub mod game;
pub mod hand;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DeckError, DrawError};
pub use game::{Action, Game, GameState};
pub use hand::{BLACKJACK, Hand};
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
