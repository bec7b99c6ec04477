//! The shoe a round is dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// An ordered deck of cards with a draw cursor.
///
/// Cards are handed out front to back and never returned twice. A shuffled
/// deck holds the 52 standard cards; a stacked deck built with
/// [`Deck::from_cards`] holds whatever unique cards it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Builds the 52 standard cards and shuffles them with `rng`.
    ///
    /// Every permutation is equally likely for a uniform `rng`. Pass a seeded
    /// generator to get a reproducible order.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{DECK_SIZE, Deck};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let deck = Deck::shuffled(&mut rng);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        Self { cards, position: 0 }
    }

    /// Creates a stacked deck that deals `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns an error if the same card appears more than once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards, position: 0 })
    }

    /// Draws the next card.
    ///
    /// # Errors
    ///
    /// Returns an error if every card has already been drawn. The deck is
    /// left untouched in that case.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        let card = *self.cards.get(self.position).ok_or(DrawError::Empty)?;
        self.position += 1;
        Ok(card)
    }

    /// Returns the number of cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Returns the number of cards drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.position
    }

    /// Returns the total number of cards in the deck, drawn or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
