//! Pure N×N tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Grid**: square board of [`Cell`]s addressed by [`Position`]
//! - **Rules**: win and draw detection over a grid ([`rules`])
//! - **Advisor**: one-ply heuristic move selection ([`MoveAdvisor`])
//! - **Game loop**: turn sequencing between a human and the advisor
//!   ([`GameSetup`], [`Game`], [`GameFinished`])
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Grid, Position, Symbol, find_winning_move};
//!
//! let mut grid = Grid::new(3)?;
//! grid.place(Position::new(0, 0), Symbol::X)?;
//! grid.place(Position::new(0, 1), Symbol::X)?;
//! assert_eq!(find_winning_move(&grid, Symbol::X), Some(Position::new(0, 2)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod advisor;
mod error;
mod game;
mod outcome;
mod players;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use advisor::{
    Advice, AdviceReason, MoveAdvisor, choose_random_move, find_blocking_move, find_winning_move,
};
pub use error::{AdvisorError, GameError, GridError, PlaceError, PlayerError};
pub use game::{Game, GameEvent, GameFinished, GameSetup, MIN_PLAYABLE_SIZE, Phase, Role, Roles};
pub use outcome::GameOutcome;
pub use players::{AdvisorPlayer, Player};
pub use position::Position;
pub use rules::Line;
pub use types::{Cell, Grid, Symbol};
