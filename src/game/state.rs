//! Game state types.

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No round has been dealt yet.
    NotStarted,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Round has ended; only a new deal is accepted.
    Resolved,
}

impl GameState {
    /// Returns whether the player may hit or stand.
    #[must_use]
    pub const fn accepts_player_action(self) -> bool {
        matches!(self, Self::PlayerTurn)
    }
}
