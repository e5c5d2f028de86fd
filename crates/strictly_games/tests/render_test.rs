//! Tests for grid rendering.

use strictly_games::render_grid;
use strictly_tictactoe::{Grid, Position, Symbol};

#[test]
fn test_frame_scales_with_size() {
    let grid = Grid::new(5).unwrap();
    let rendered = render_grid(&grid, false);
    let lines: Vec<&str> = rendered.lines().collect();

    // Header, top border, five rows, four separators, bottom border.
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[1], "  ┌───┬───┬───┬───┬───┐");
    assert_eq!(lines[11], "  └───┴───┴───┴───┴───┘");
}

#[test]
fn test_two_digit_labels_stay_aligned() {
    let mut grid = Grid::new(11).unwrap();
    grid.place(Position::new(10, 10), Symbol::O).unwrap();
    let rendered = render_grid(&grid, false);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[2].starts_with(" 0 │"));
    let last_row = lines[lines.len() - 2];
    assert!(last_row.starts_with("10 │"));
    assert!(last_row.ends_with("│ O │"));
    assert!(lines[1].starts_with("   ┌"));
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let mut grid = Grid::new(3).unwrap();
    grid.place(Position::new(1, 1), Symbol::X).unwrap();
    assert!(!render_grid(&grid, false).contains('\u{1b}'));
}

#[test]
fn test_color_output_styles_symbols() {
    let mut grid = Grid::new(3).unwrap();
    grid.place(Position::new(1, 1), Symbol::X).unwrap();
    let rendered = render_grid(&grid, true);
    assert!(rendered.contains('\u{1b}'));
    assert!(rendered.contains('X'));
}

#[test]
fn test_winning_line_rendered_differently() {
    let mut won = Grid::new(3).unwrap();
    let mut open = Grid::new(3).unwrap();
    for col in 0..3 {
        won.place(Position::new(0, col), Symbol::O).unwrap();
    }
    for col in 0..2 {
        open.place(Position::new(0, col), Symbol::O).unwrap();
    }

    let won_row = render_grid(&won, true).lines().nth(2).map(str::to_string);
    let open_row = render_grid(&open, true).lines().nth(2).map(str::to_string);

    let first_cell = |row: Option<String>| {
        row.and_then(|r| r.split('│').nth(1).map(str::to_string))
    };
    assert_ne!(first_cell(won_row), first_cell(open_row));
}
