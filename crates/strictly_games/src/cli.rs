//! Command-line interface for strictly_games.

use clap::Parser;

/// Strictly Games - N×N tic-tac-toe against a heuristic advisor
#[derive(Parser, Debug, Clone)]
#[command(name = "strictly_games")]
#[command(about = "Play N×N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Grid size for every game; skips the size prompt (minimum 3)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Seed for first mover, symbol assignment and advisor moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print symbols without color
    #[arg(long)]
    pub no_color: bool,

    /// Log filter written to stderr (e.g. "debug" or "strictly_tictactoe=trace")
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
