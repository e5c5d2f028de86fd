//! First-class move types.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and are validated by the game before they touch the grid.

use super::error::PlaceError;
use super::position::Position;
use super::types::Symbol;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A symbol placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The symbol being placed.
    pub symbol: Symbol,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Returns the symbol of this move.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.symbol, self.position)
    }
}

/// Error that can occur when applying a move to a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The grid refused the placement.
    #[display("{_0}")]
    Place(PlaceError),

    /// The game already has a result.
    #[display("Game is already over")]
    GameOver,

    /// The move's symbol is not the one to move.
    #[display("It's {expected}'s turn, not {got}'s")]
    WrongSymbol {
        /// Symbol whose turn it is.
        expected: Symbol,
        /// Symbol carried by the move.
        got: Symbol,
    },
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        Self::Place(err)
    }
}
