//! Draw detection logic.

use crate::Grid;
use tracing::instrument;

/// Checks if every cell is occupied.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().iter().all(|cell| !cell.is_empty())
}

/// Checks for a draw: the grid is full.
///
/// Only meaningful once [`check_winner`](super::check_winner) has found no
/// winner. A full grid whose last move completed a line is a win.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid)
}
