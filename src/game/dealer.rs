use tracing::debug;

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::{BLACKJACK, Hand};
use crate::result::Outcome;

use super::Game;

/// Dealer stands once the hand reaches this total.
const DEALER_STANDS_ON: u8 = 17;

impl Game {
    /// Returns whether the dealer must take another card.
    ///
    /// The dealer draws below 17. On soft 17 the dealer draws only when the
    /// table hits soft 17.
    pub(super) fn dealer_must_draw(&self, dealer: &Hand) -> bool {
        let value = dealer.total();

        if value < DEALER_STANDS_ON {
            return true;
        }
        value == DEALER_STANDS_ON && dealer.is_soft() && !self.options.stand_on_soft_17
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// Works on copies of the dealer's hand and the deck and returns them
    /// played out, so a failure mid-draw leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty while the dealer must draw.
    pub(super) fn dealer_play(&self) -> Result<(Hand, Deck), ActionError> {
        let mut dealer = self.dealer.clone();
        let mut deck = self.deck.clone();

        debug!(dealer_total = dealer.total(), "dealer reveals hole card");

        while self.dealer_must_draw(&dealer) {
            let card = deck.draw()?;
            dealer.add_card(card);
            debug!(card = %card, dealer_total = dealer.total(), "dealer draws");
        }

        Ok((dealer, deck))
    }

    /// Compares the finished hands.
    pub(super) fn settle(&self) -> Outcome {
        let player_value = self.player.total();
        let dealer_value = self.dealer.total();

        if dealer_value > BLACKJACK {
            Outcome::DealerBust
        } else if player_value > dealer_value {
            Outcome::PlayerWin
        } else if player_value < dealer_value {
            Outcome::DealerWin
        } else {
            Outcome::Tie
        }
    }
}
