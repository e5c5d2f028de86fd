//! Strictly Games - terminal tic-tac-toe on an N×N grid
//!
//! A human plays the heuristic advisor from [`strictly_tictactoe`] at the
//! console, game after game.
//!
//! # Architecture
//!
//! - **Cli / Config**: command-line flags and validated session settings
//! - **Console**: line-oriented prompts over any reader and writer
//! - **UI**: box-drawing grid rendering
//! - **Players**: the console-backed human
//! - **Session**: the play-again loop
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_games::{Console, Session, SessionConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SessionConfig::new(Some(3), Some(7), false)?;
//! let console = Console::new(Cursor::new(b"n\n".to_vec()), Vec::new());
//! let mut session = Session::new(console, config);
//! session.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod players;
mod session;
mod ui;

pub use cli::Cli;
pub use config::{ConfigError, SessionConfig};
pub use console::{Console, ConsoleError, parse_numbers};
pub use players::ConsoleHuman;
pub use session::{Session, SessionSummary};
pub use ui::render_grid;
