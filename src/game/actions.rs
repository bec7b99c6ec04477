use tracing::{debug, info};

use crate::error::ActionError;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a new round.
    Deal,
    /// Take another card.
    Hit,
    /// Keep the current hand and let the dealer play.
    Stand,
}

impl Game {
    /// Performs `action`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the underlying action returns.
    pub fn apply(&mut self, action: Action) -> Result<RoundResult, ActionError> {
        match action {
            Action::Deal => self.deal(),
            Action::Hit => self.hit(),
            Action::Stand => self.stand(),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 resolves the round as a player bust. Reaching exactly 21
    /// does not end the turn. The dealer's hole card stays hidden either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<RoundResult, ActionError> {
        let up_card = self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.add_card(card);
        debug!(card = %card, player_total = self.player.total(), "player hits");

        let outcome = if self.player.is_bust() {
            self.state = GameState::Resolved;
            info!(player_total = self.player.total(), "player busts");
            Outcome::PlayerBust
        } else {
            Outcome::InProgress
        };

        Ok(RoundResult::snapshot(outcome, &self.player, &self.dealer, up_card, false))
    }

    /// Player action: Stand (keep current hand).
    ///
    /// The dealer reveals the hole card and plays out the hand, then the
    /// totals are compared.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or the deck
    /// runs out while the dealer must draw. Nothing is drawn in that case.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        let up_card = self.ensure_player_turn()?;
        debug!(player_total = self.player.total(), "player stands");

        let (dealer, deck) = self.dealer_play()?;
        self.dealer = dealer;
        self.deck = deck;
        self.state = GameState::Resolved;

        let outcome = self.settle();
        info!(
            ?outcome,
            player_total = self.player.total(),
            dealer_total = self.dealer.total(),
            "round resolved"
        );

        Ok(RoundResult::snapshot(outcome, &self.player, &self.dealer, up_card, true))
    }
}
