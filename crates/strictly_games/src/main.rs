//! Strictly Games - terminal tic-tac-toe against the advisor.

use anyhow::Result;
use clap::Parser;
use strictly_games::{Cli, Console, Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::from_cli(&cli)?;
    info!(?config, "Starting Strictly Games");

    let console = Console::new(std::io::stdin().lock(), std::io::stdout().lock());
    let summary = Session::new(console, config).run()?;

    info!(games = summary.games(), "Goodbye");
    Ok(())
}
