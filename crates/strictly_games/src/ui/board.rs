//! Box-drawing grid rendering.

use crossterm::style::Stylize;
use strictly_tictactoe::rules::{check_winner, winning_line};
use strictly_tictactoe::{Cell, Grid, Line, Position, Symbol};

fn glyph(cell: Cell, highlighted: bool, color: bool) -> String {
    let Some(symbol) = cell.symbol() else {
        return " ".to_string();
    };
    let text = symbol.to_string();

    if !color {
        return text;
    }

    match (symbol, highlighted) {
        (_, true) => text.green().bold().underlined().to_string(),
        (Symbol::X, false) => text.red().bold().to_string(),
        (Symbol::O, false) => text.cyan().bold().to_string(),
    }
}

fn border(size: usize, pad: usize, left: char, mid: char, right: char) -> String {
    let mid = mid.to_string();
    let segments = vec!["───"; size].join(mid.as_str());
    format!("{:pad$} {left}{segments}{right}", "")
}

/// Renders the grid as a framed table with row and column indices.
///
/// The winning line, if any, is highlighted when `color` is on.
pub fn render_grid(grid: &Grid, color: bool) -> String {
    let size = grid.size();
    let pad = size.saturating_sub(1).to_string().len();
    let highlight: Option<Line> = check_winner(grid).and_then(|winner| winning_line(grid, winner));
    let on_highlight =
        |pos: Position| highlight.is_some_and(|line| line.positions(size).any(|p| p == pos));

    let header: Vec<String> = (0..size).map(|col| format!("{col:^3}")).collect();
    let mut lines = vec![
        format!("{:pad$}  {}", "", header.join(" ")).trim_end().to_string(),
        border(size, pad, '┌', '┬', '┐'),
    ];

    for (row, cells) in grid.rows().enumerate() {
        let glyphs: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, &cell)| glyph(cell, on_highlight(Position::new(row, col)), color))
            .collect();
        lines.push(format!("{row:>pad$} │ {} │", glyphs.join(" │ ")));

        if row + 1 < size {
            lines.push(border(size, pad, '├', '┼', '┤'));
        }
    }

    lines.push(border(size, pad, '└', '┴', '┘'));
    lines.join("\n")
}
