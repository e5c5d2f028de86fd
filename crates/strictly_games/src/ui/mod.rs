//! Terminal presentation.

mod board;

pub use board::render_grid;
