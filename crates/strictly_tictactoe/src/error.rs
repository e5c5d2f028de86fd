//! Error types for grid construction, placement, move selection and play.

use super::action::MoveError;
use super::position::Position;
use derive_more::Display;

/// Error constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridError {
    /// Requested side length is below the minimum.
    #[display("Grid size {size} is too small (minimum {min})")]
    TooSmall {
        /// Requested side length.
        size: usize,
        /// Smallest accepted side length.
        min: usize,
    },

    /// Rows handed to the grid do not form a square.
    #[display("Row {row} has {len} cells, expected {size}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Expected side length.
        size: usize,
    },
}

impl std::error::Error for GridError {}

/// Error placing a symbol on the grid.
///
/// A failed placement never changes the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceError {
    /// The target cell already holds a symbol.
    #[display("Cell {position} is already occupied")]
    Occupied {
        /// Target cell.
        position: Position,
    },

    /// The target cell lies outside the grid.
    #[display("Cell {position} is outside the {size}x{size} grid")]
    OutOfBounds {
        /// Target cell.
        position: Position,
        /// Grid side length.
        size: usize,
    },
}

impl std::error::Error for PlaceError {}

/// Error selecting a move for the advisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AdvisorError {
    /// Every cell is occupied; there is nothing to choose from.
    #[display("No empty cells remain")]
    NoEmptyCells,
}

impl std::error::Error for AdvisorError {}

/// Error raised by a [`Player`](crate::Player) while choosing a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PlayerError {
    /// The player's input source was closed.
    #[display("Input closed")]
    InputClosed,

    /// Reading or writing the player's console failed.
    #[display("I/O error: {message}")]
    Io {
        /// Underlying error message.
        message: String,
    },

    /// The advisor could not produce a move.
    #[display("Advisor failed: {_0}")]
    Advisor(AdvisorError),
}

impl std::error::Error for PlayerError {}

impl From<AdvisorError> for PlayerError {
    fn from(err: AdvisorError) -> Self {
        Self::Advisor(err)
    }
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

/// Error that stops a game before it reaches a terminal phase.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// A player failed to produce a move.
    #[display("Player failed: {_0}")]
    Player(PlayerError),

    /// A move was rejected outside of human input validation.
    #[display("Move rejected: {_0}")]
    Move(MoveError),

    /// More turns were played than the grid has cells.
    #[display("Turn limit of {limit} exceeded without a result")]
    TurnLimitExceeded {
        /// Number of cells on the grid.
        limit: usize,
    },
}

impl std::error::Error for GameError {}

impl From<PlayerError> for GameError {
    fn from(err: PlayerError) -> Self {
        Self::Player(err)
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}
