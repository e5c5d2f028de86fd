//! Core domain types for N×N tic-tac-toe.

use super::error::{GridError, PlaceError};
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two markers placed on the grid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Symbol {
    /// The X marker.
    X,
    /// The O marker.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// Occupancy of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No symbol yet.
    #[default]
    Empty,
    /// Holds a symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }

    /// Returns true if the cell holds no symbol.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square grid of cells, fixed side length.
///
/// Cells are stored in row-major order. Serializes as a list of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty `size`×`size` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is zero. Playable games
    /// additionally require [`MIN_PLAYABLE_SIZE`](crate::MIN_PLAYABLE_SIZE).
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::TooSmall { size, min: 1 });
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `pos` lies on the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.size + pos.col)
    }

    /// Gets the cell at `pos`, or `None` when off the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns true if `pos` is on the grid and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Places `symbol` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] for positions off the grid and
    /// [`PlaceError::Occupied`] when the cell already holds a symbol. The
    /// grid is unchanged on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, pos: Position, symbol: Symbol) -> Result<(), PlaceError> {
        let index = self.index(pos).ok_or(PlaceError::OutOfBounds {
            position: pos,
            size: self.size,
        })?;

        if !self.cells[index].is_empty() {
            return Err(PlaceError::Occupied { position: pos });
        }

        self.cells[index] = Cell::Occupied(symbol);
        Ok(())
    }

    /// Returns a copy of the grid with `symbol` placed at `pos`.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::place`].
    pub fn with_placed(&self, pos: Position, symbol: Symbol) -> Result<Self, PlaceError> {
        let mut next = self.clone();
        next.place(pos, symbol)?;
        Ok(next)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Iterates every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        Position::row_major(self.size)
    }

    /// Iterates empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&pos| self.is_empty(pos))
    }

    /// Counts non-empty cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the symbol holding a complete line, if any.
    pub fn winner(&self) -> Option<Symbol> {
        crate::rules::check_winner(self)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size < 1 {
            return Err(GridError::TooSmall { size, min: 1 });
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: line.len(),
                    size,
                });
            }
            cells.extend(line);
        }

        Ok(Self { size, cells })
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.rows().map(<[Cell]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert!(grid.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_winner_reports_completed_column() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.winner(), None);
        for row in 0..3 {
            grid.place(Position::new(row, 1), Symbol::O).unwrap();
        }
        grid.place(Position::new(0, 0), Symbol::X).unwrap();
        assert_eq!(grid.winner(), Some(Symbol::O));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(Grid::new(0), Err(GridError::TooSmall { size: 0, min: 1 }));
    }

    #[test]
    fn test_place_changes_only_target() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(Position::new(1, 2), Symbol::O).unwrap();

        for pos in grid.positions() {
            let expected = if pos == Position::new(1, 2) {
                Cell::Occupied(Symbol::O)
            } else {
                Cell::Empty
            };
            assert_eq!(grid.get(pos), Some(expected));
        }
    }

    #[test]
    fn test_place_occupied_leaves_grid_unchanged() {
        let mut grid = Grid::new(3).unwrap();
        grid.place(Position::new(0, 0), Symbol::X).unwrap();
        let before = grid.clone();

        let result = grid.place(Position::new(0, 0), Symbol::O);

        assert_eq!(
            result,
            Err(PlaceError::Occupied {
                position: Position::new(0, 0)
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut grid = Grid::new(3).unwrap();
        let result = grid.place(Position::new(3, 0), Symbol::X);
        assert_eq!(
            result,
            Err(PlaceError::OutOfBounds {
                position: Position::new(3, 0),
                size: 3
            })
        );
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_with_placed_leaves_original() {
        let grid = Grid::new(3).unwrap();
        let next = grid.with_placed(Position::new(1, 1), Symbol::X).unwrap();
        assert!(grid.is_empty(Position::new(1, 1)));
        assert_eq!(next.get(Position::new(1, 1)), Some(Cell::Occupied(Symbol::X)));
    }

    #[test]
    fn test_rows_from_non_square_rejected() {
        let rows = vec![vec![Cell::Empty; 3], vec![Cell::Empty; 2], vec![Cell::Empty; 3]];
        assert_eq!(
            Grid::try_from(rows),
            Err(GridError::NotSquare {
                row: 1,
                len: 2,
                size: 3
            })
        );
    }

    #[test]
    fn test_symbol_opponent() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }
}
