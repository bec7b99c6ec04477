//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::GameOptions;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::Action;
pub use state::GameState;

/// A single-player blackjack game.
///
/// The game owns the deck, the player's hand and the dealer's hand. Each
/// action returns a [`RoundResult`](crate::RoundResult) snapshot; a failed
/// action leaves the game exactly as it was.
///
/// One game belongs to one session. Create it when the session starts and
/// drop it when the session ends.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Current phase of the round.
    state: GameState,
    /// Deck the current round is dealt from.
    deck: Deck,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; the second card is the hole card.
    dealer: Hand,
    /// Random number generator used to shuffle new decks.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjrules::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Self {
            options,
            state: GameState::NotStarted,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            rng,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's face-up card, if a round has been dealt.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<Card> {
        self.dealer.first().copied()
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Checks that the player may act and returns the dealer's up card.
    fn ensure_player_turn(&self) -> Result<Card, ActionError> {
        if !self.state.accepts_player_action() {
            return Err(ActionError::InvalidState);
        }

        self.dealer_up_card().ok_or(ActionError::InvalidState)
    }
}
