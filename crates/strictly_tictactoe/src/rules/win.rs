//! Win detection logic.

use super::line::Line;
use crate::{Cell, Grid, Position, Symbol};
use strum::IntoEnumIterator;
use tracing::instrument;

fn line_held_by(grid: &Grid, line: Line, symbol: Symbol) -> bool {
    line.positions(grid.size())
        .all(|pos| grid.get(pos) == Some(Cell::Occupied(symbol)))
}

/// Returns true if any row, column or diagonal is entirely `symbol`.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_winner(grid: &Grid, symbol: Symbol) -> bool {
    winning_line(grid, symbol).is_some()
}

/// Returns the first complete line of `symbol`: rows, then columns, then
/// the diagonal and the anti-diagonal.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn winning_line(grid: &Grid, symbol: Symbol) -> Option<Line> {
    Line::all(grid.size()).find(|&line| line_held_by(grid, line, symbol))
}

/// Returns the symbol holding a complete line, if any.
///
/// Normal play stops at the first win, so at most one symbol can hold a
/// line. On grids built out of game order where both do, X is reported.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn check_winner(grid: &Grid) -> Option<Symbol> {
    Symbol::iter().find(|&symbol| is_winner(grid, symbol))
}

/// Returns true if placing `symbol` at `pos` would complete a line.
///
/// Only the lines through `pos` are inspected, and the grid is not touched.
/// Off-grid or occupied positions never complete a line.
pub fn completes_line(grid: &Grid, pos: Position, symbol: Symbol) -> bool {
    if !grid.is_empty(pos) {
        return false;
    }

    let size = grid.size();
    Line::through(pos, size).any(|line| {
        line.positions(size)
            .filter(|&other| other != pos)
            .all(|other| grid.get(other) == Some(Cell::Occupied(symbol)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, moves: &[(usize, usize, Symbol)]) -> Grid {
        let mut grid = Grid::new(size).unwrap();
        for &(row, col, symbol) in moves {
            grid.place(Position::new(row, col), symbol).unwrap();
        }
        grid
    }

    #[test]
    fn test_no_winner_empty_grid() {
        let grid = Grid::new(3).unwrap();
        assert!(!is_winner(&grid, Symbol::X));
        assert!(!is_winner(&grid, Symbol::O));
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_winner_row() {
        let grid = grid_with(3, &[(1, 0, Symbol::X), (1, 1, Symbol::X), (1, 2, Symbol::X)]);
        assert!(is_winner(&grid, Symbol::X));
        assert!(!is_winner(&grid, Symbol::O));
        assert_eq!(winning_line(&grid, Symbol::X), Some(Line::Row(1)));
    }

    #[test]
    fn test_winner_column() {
        let grid = grid_with(3, &[(0, 2, Symbol::O), (1, 2, Symbol::O), (2, 2, Symbol::O)]);
        assert_eq!(winning_line(&grid, Symbol::O), Some(Line::Column(2)));
        assert_eq!(check_winner(&grid), Some(Symbol::O));
    }

    #[test]
    fn test_winner_anti_diagonal_on_four_by_four() {
        let grid = grid_with(
            4,
            &[
                (0, 3, Symbol::O),
                (1, 2, Symbol::O),
                (2, 1, Symbol::O),
                (3, 0, Symbol::O),
            ],
        );
        assert_eq!(winning_line(&grid, Symbol::O), Some(Line::AntiDiagonal));
    }

    #[test]
    fn test_three_in_a_row_does_not_win_four_by_four() {
        let grid = grid_with(4, &[(0, 0, Symbol::X), (0, 1, Symbol::X), (0, 2, Symbol::X)]);
        assert!(!is_winner(&grid, Symbol::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let grid = grid_with(3, &[(0, 0, Symbol::X), (1, 1, Symbol::O), (2, 2, Symbol::X)]);
        assert_eq!(check_winner(&grid), None);
    }

    #[test]
    fn test_completes_line_matches_full_check() {
        let grid = grid_with(
            3,
            &[
                (0, 0, Symbol::X),
                (1, 1, Symbol::X),
                (0, 1, Symbol::O),
                (2, 0, Symbol::O),
            ],
        );

        for pos in grid.empty_positions() {
            for symbol in [Symbol::X, Symbol::O] {
                let placed = grid.with_placed(pos, symbol).unwrap();
                assert_eq!(
                    completes_line(&grid, pos, symbol),
                    is_winner(&placed, symbol),
                    "{symbol} at {pos}"
                );
            }
        }
    }

    #[test]
    fn test_completes_line_rejects_occupied_and_off_grid() {
        let grid = grid_with(3, &[(0, 0, Symbol::X), (0, 1, Symbol::X), (0, 2, Symbol::O)]);
        assert!(!completes_line(&grid, Position::new(0, 2), Symbol::X));
        assert!(!completes_line(&grid, Position::new(5, 5), Symbol::X));
    }

    #[test]
    fn test_repeated_checks_agree() {
        let grid = grid_with(3, &[(0, 0, Symbol::O), (1, 1, Symbol::O), (2, 2, Symbol::O)]);
        let first = is_winner(&grid, Symbol::O);
        for _ in 0..3 {
            assert_eq!(is_winner(&grid, Symbol::O), first);
        }
    }
}
