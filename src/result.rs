//! Round result snapshots.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Classification of the round after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The round continues; the player may hit or stand.
    InProgress,
    /// Player and dealer finished level, or both were dealt a natural.
    Tie,
    /// Player was dealt a natural and the dealer was not.
    PlayerBlackjack,
    /// Dealer was dealt a natural and the player was not.
    DealerBlackjack,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21 while playing out their hand.
    DealerBust,
    /// Player finished with the higher total.
    PlayerWin,
    /// Dealer finished with the higher total.
    DealerWin,
}

impl Outcome {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Returns whether the player came out ahead, by any route.
    #[must_use]
    pub const fn player_wins(self) -> bool {
        matches!(self, Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWin)
    }
}

/// Snapshot of the round taken right after `deal`, `hit` or `stand`.
///
/// The dealer's hole card stays out of the snapshot until the dealer's hand
/// is revealed, which happens on `stand` or when the dealer's natural
/// settles the deal. Until then [`RoundResult::dealer_cards`] holds only the
/// up card and [`RoundResult::dealer_final_score`] is `None`, even after a
/// player bust.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    outcome: Outcome,
    player_cards: Vec<Card>,
    player_score: u8,
    soft: bool,
    dealer_up_card: Card,
    dealer_cards: Vec<Card>,
    dealer_final_score: Option<u8>,
}

impl RoundResult {
    /// Copies the visible state of both hands.
    ///
    /// `dealer` must hold at least the up card. The rest of the dealer's hand
    /// is copied only when `reveal_dealer` is set.
    pub(crate) fn snapshot(
        outcome: Outcome,
        player: &Hand,
        dealer: &Hand,
        up_card: Card,
        reveal_dealer: bool,
    ) -> Self {
        let (dealer_cards, dealer_final_score) = if reveal_dealer {
            (dealer.cards().to_vec(), Some(dealer.total()))
        } else {
            (alloc::vec![up_card], None)
        };

        Self {
            outcome,
            player_cards: player.cards().to_vec(),
            player_score: player.total(),
            soft: player.is_soft(),
            dealer_up_card: up_card,
            dealer_cards,
            dealer_final_score,
        }
    }

    /// Returns the outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns whether the player can still act.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self.outcome, Outcome::InProgress)
    }

    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns whether the round ended level.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        matches!(self.outcome, Outcome::Tie)
    }

    /// Returns whether the player won with a natural.
    #[must_use]
    pub const fn is_player_blackjack(&self) -> bool {
        matches!(self.outcome, Outcome::PlayerBlackjack)
    }

    /// Returns whether the dealer won with a natural.
    #[must_use]
    pub const fn is_dealer_blackjack(&self) -> bool {
        matches!(self.outcome, Outcome::DealerBlackjack)
    }

    /// Returns whether the player busted.
    #[must_use]
    pub const fn is_player_bust(&self) -> bool {
        matches!(self.outcome, Outcome::PlayerBust)
    }

    /// Returns whether the dealer busted.
    #[must_use]
    pub const fn is_dealer_bust(&self) -> bool {
        matches!(self.outcome, Outcome::DealerBust)
    }

    /// Returns whether the player beat the dealer on totals.
    #[must_use]
    pub const fn is_player_win(&self) -> bool {
        matches!(self.outcome, Outcome::PlayerWin)
    }

    /// Returns whether the dealer beat the player on totals.
    #[must_use]
    pub const fn is_dealer_win(&self) -> bool {
        matches!(self.outcome, Outcome::DealerWin)
    }

    /// Returns whether the player's total counts an ace as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns the player's total.
    #[must_use]
    pub const fn player_score(&self) -> u8 {
        self.player_score
    }

    /// Returns the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub const fn dealer_up_card(&self) -> Card {
        self.dealer_up_card
    }

    /// Returns the value of the dealer's face-up card (Ace = 11).
    #[must_use]
    pub const fn dealer_showing(&self) -> u8 {
        self.dealer_up_card.value()
    }

    /// Returns the dealer cards the player is allowed to see.
    ///
    /// Only the up card until the dealer's hand is revealed.
    #[must_use]
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }

    /// Returns the dealer's total once the hole card has been revealed.
    #[must_use]
    pub const fn dealer_final_score(&self) -> Option<u8> {
        self.dealer_final_score
    }
}
