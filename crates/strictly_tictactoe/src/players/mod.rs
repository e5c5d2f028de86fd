//! Player trait and the advisor-backed implementation.

mod advisor;

pub use advisor::AdvisorPlayer;

use crate::{GameEvent, Grid, PlayerError, Position, Symbol};

/// Something that can choose moves.
///
/// The game loop calls [`Player::choose_move`] until the returned position
/// is accepted. Every player is told about game progress through
/// [`Player::observe`], whoever's turn it is.
pub trait Player {
    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Chooses a position for `symbol` on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError`] when no move can be produced, for example
    /// because the input source closed.
    fn choose_move(&mut self, grid: &Grid, symbol: Symbol) -> Result<Position, PlayerError>;

    /// Receives a game event. Ignored by default.
    fn observe(&mut self, event: &GameEvent<'_>) {
        let _ = event;
    }
}
