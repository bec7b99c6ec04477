use tracing::{debug, info, warn};

use crate::deck::Deck;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};

use super::{Game, GameState};

/// Cards needed to deal two to the player and two to the dealer.
const INITIAL_CARDS: usize = 4;

impl Game {
    /// Picks the deck for the next round.
    ///
    /// An untouched deck is always usable. A used one is kept only when the
    /// options allow it and it can still cover the initial deal.
    fn next_deck(&mut self) -> Deck {
        let untouched = self.deck.drawn() == 0;
        let reusable = !self.options.fresh_shoe_each_round || untouched;

        if reusable && self.deck.remaining() >= INITIAL_CARDS {
            self.deck.clone()
        } else {
            debug!("shuffling a new deck");
            Deck::shuffled(&mut self.rng)
        }
    }

    /// Deals a new round.
    ///
    /// The player and dealer each receive two cards, alternating, starting
    /// with the player. Naturals are settled immediately: both hands at 21 is
    /// a tie, otherwise whoever holds 21 wins. Any other deal leaves the
    /// round in [`GameState::PlayerTurn`].
    ///
    /// The hole card is shown only when the dealer's natural decides the
    /// round.
    ///
    /// Dealing while a round is still in progress abandons that round.
    ///
    /// # Errors
    ///
    /// Never fails with the built-in decks; the signature matches
    /// [`Game::deal_from`].
    pub fn deal(&mut self) -> Result<RoundResult, ActionError> {
        let deck = self.next_deck();
        self.deal_from(deck)
    }

    /// Deals a new round from `deck` instead of a shuffled one.
    ///
    /// Use a deck built with [`Deck::from_cards`] for a fixed draw order.
    ///
    /// # Errors
    ///
    /// Returns an error if `deck` holds fewer than four undrawn cards. The
    /// game is left unchanged in that case.
    pub fn deal_from(&mut self, mut deck: Deck) -> Result<RoundResult, ActionError> {
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        player.add_card(deck.draw()?);
        let up_card = deck.draw()?;
        dealer.add_card(up_card);
        player.add_card(deck.draw()?);
        dealer.add_card(deck.draw()?);

        if self.state == GameState::PlayerTurn {
            warn!(
                player_total = self.player.total(),
                "abandoning round in progress"
            );
        }

        let outcome = match (player.is_blackjack(), dealer.is_blackjack()) {
            (true, true) => Outcome::Tie,
            (true, false) => Outcome::PlayerBlackjack,
            (false, true) => Outcome::DealerBlackjack,
            (false, false) => Outcome::InProgress,
        };

        self.deck = deck;
        self.player = player;
        self.dealer = dealer;
        self.state = if outcome.is_terminal() {
            GameState::Resolved
        } else {
            GameState::PlayerTurn
        };

        debug!(
            player_total = self.player.total(),
            soft = self.player.is_soft(),
            up_card = %up_card,
            "dealt"
        );
        if outcome.is_terminal() {
            info!(?outcome, "round resolved on the deal");
        }

        let reveal_dealer = matches!(outcome, Outcome::Tie | Outcome::DealerBlackjack);
        Ok(RoundResult::snapshot(outcome, &self.player, &self.dealer, up_card, reveal_dealer))
    }
}
