//! Lines of the grid: rows, columns and both diagonals.

use crate::Position;
use serde::{Deserialize, Serialize};

/// A complete line across a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Every line of a `size`×`size` grid: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Lines of a `size`×`size` grid passing through `pos`.
    pub fn through(pos: Position, size: usize) -> impl Iterator<Item = Line> {
        let diagonal = (pos.row == pos.col).then_some(Line::Diagonal);
        let anti = (pos.row + pos.col + 1 == size).then_some(Line::AntiDiagonal);
        [Some(Line::Row(pos.row)), Some(Line::Column(pos.col)), diagonal, anti]
            .into_iter()
            .flatten()
    }

    /// Positions on this line, in order.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row(row) => write!(f, "row {row}"),
            Line::Column(col) => write!(f, "column {col}"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}
