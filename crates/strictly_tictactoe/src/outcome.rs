//! Derived game outcome.

use super::rules;
use super::types::{Grid, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a grid. Computed, never stored by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A symbol holds a complete line.
    Win(Symbol),
    /// The grid is full and nobody won.
    Draw,
    /// Play continues.
    Unfinished,
}

impl GameOutcome {
    /// Evaluates the grid: a winner first, then a full grid.
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn evaluate(grid: &Grid) -> Self {
        if let Some(winner) = rules::check_winner(grid) {
            GameOutcome::Win(winner)
        } else if rules::is_draw(grid) {
            GameOutcome::Draw
        } else {
            GameOutcome::Unfinished
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameOutcome::Win(symbol) => Some(*symbol),
            _ => None,
        }
    }

    /// Returns true once the game has a result.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Unfinished)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Win(symbol) => write!(f, "Player {symbol} wins"),
            GameOutcome::Draw => write!(f, "Draw"),
            GameOutcome::Unfinished => write!(f, "In progress"),
        }
    }
}
