//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions evaluating a grid. Rules never mutate the grid and never
//! retain it across calls, so the advisor and the game loop can call them
//! freely on borrowed state.

pub mod draw;
pub mod line;
pub mod win;

pub use draw::{is_draw, is_full};
pub use line::Line;
pub use win::{check_winner, completes_line, is_winner, winning_line};
