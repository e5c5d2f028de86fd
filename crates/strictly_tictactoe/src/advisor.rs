//! Heuristic move selection.
//!
//! The advisor looks one ply ahead: take a win when one exists, otherwise
//! block the opponent's immediate win, otherwise play a random empty cell.
//! It never builds forks and can lose to correct play.

use super::error::AdvisorError;
use super::position::Position;
use super::rules::completes_line;
use super::types::{Grid, Symbol};
use derive_new::new;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Returns the first empty cell, in row-major order, where `symbol` wins.
///
/// Candidates are evaluated without touching the grid.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn find_winning_move(grid: &Grid, symbol: Symbol) -> Option<Position> {
    grid.empty_positions()
        .find(|&pos| completes_line(grid, pos, symbol))
}

/// Returns the cell `opponent` would win on next, so `own` can occupy it.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn find_blocking_move(grid: &Grid, own: Symbol, opponent: Symbol) -> Option<Position> {
    let block = find_winning_move(grid, opponent);
    if let Some(pos) = block {
        debug!(%own, %opponent, %pos, "Opponent threatens a line");
    }
    block
}

/// Picks an empty cell uniformly at random.
///
/// # Errors
///
/// Returns [`AdvisorError::NoEmptyCells`] on a full grid.
pub fn choose_random_move<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
) -> Result<Position, AdvisorError> {
    let empty: Vec<Position> = grid.empty_positions().collect();
    empty.choose(rng).copied().ok_or(AdvisorError::NoEmptyCells)
}

/// Why the advisor picked a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum AdviceReason {
    /// The cell completes the advisor's own line.
    Win,
    /// The cell stops the opponent completing a line.
    Block,
    /// No win or threat; picked at random.
    Random,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Advice {
    /// Cell to play.
    pub position: Position,
    /// Rule that selected it.
    pub reason: AdviceReason,
}

/// Move advisor owning its random source.
///
/// Pass a seeded generator for reproducible play.
#[derive(Debug, Clone)]
pub struct MoveAdvisor<R> {
    rng: R,
}

impl<R: Rng> MoveAdvisor<R> {
    /// Creates an advisor drawing random moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move for `symbol`: win, else block, else random.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::NoEmptyCells`] on a full grid.
    #[instrument(skip(self, grid), fields(size = grid.size()))]
    pub fn advise(&mut self, grid: &Grid, symbol: Symbol) -> Result<Advice, AdvisorError> {
        let advice = if let Some(pos) = find_winning_move(grid, symbol) {
            Advice::new(pos, AdviceReason::Win)
        } else if let Some(pos) = find_blocking_move(grid, symbol, symbol.opponent()) {
            Advice::new(pos, AdviceReason::Block)
        } else {
            Advice::new(choose_random_move(grid, &mut self.rng)?, AdviceReason::Random)
        };

        debug!(position = %advice.position, reason = %advice.reason, "Advisor chose move");
        Ok(advice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => grid.place(Position::new(row, col), Symbol::X).unwrap(),
                    'O' => grid.place(Position::new(row, col), Symbol::O).unwrap(),
                    _ => {}
                }
            }
        }
        grid
    }

    #[test]
    fn test_winning_move_completes_row() {
        let grid = grid_from(&["XX.", "...", "..."]);
        assert_eq!(find_winning_move(&grid, Symbol::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_no_winning_move() {
        let grid = grid_from(&["X..", "...", "..O"]);
        assert_eq!(find_winning_move(&grid, Symbol::X), None);
    }

    #[test]
    fn test_random_move_only_empty_cells() {
        let grid = grid_from(&["XOX", "XOO", "O.X"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(
                choose_random_move(&grid, &mut rng),
                Ok(Position::new(2, 1))
            );
        }
    }

    #[test]
    fn test_random_move_full_grid_fails() {
        let grid = grid_from(&["XOX", "XOO", "OXX"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose_random_move(&grid, &mut rng),
            Err(AdvisorError::NoEmptyCells)
        );
    }

    #[test]
    fn test_advise_prefers_win_over_block() {
        // O can win on (1, 2); X threatens (0, 2).
        let grid = grid_from(&["XX.", "OO.", "X.."]);
        let mut advisor = MoveAdvisor::new(StdRng::seed_from_u64(1));
        let advice = advisor.advise(&grid, Symbol::O).unwrap();
        assert_eq!(advice, Advice::new(Position::new(1, 2), AdviceReason::Win));
    }

    #[test]
    fn test_advise_blocks() {
        let grid = grid_from(&["X..", ".X.", "O.."]);
        let mut advisor = MoveAdvisor::new(StdRng::seed_from_u64(1));
        let advice = advisor.advise(&grid, Symbol::O).unwrap();
        assert_eq!(advice, Advice::new(Position::new(2, 2), AdviceReason::Block));
    }

    #[test]
    fn test_advise_random_when_quiet() {
        let grid = grid_from(&["X..", "...", "..."]);
        let mut advisor = MoveAdvisor::new(StdRng::seed_from_u64(3));
        let advice = advisor.advise(&grid, Symbol::O).unwrap();
        assert_eq!(advice.reason, AdviceReason::Random);
        assert!(grid.is_empty(advice.position));
    }
}
