//! Session configuration built from the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use strictly_tictactoe::MIN_PLAYABLE_SIZE;
use tracing::{debug, instrument};

/// Settings shared by every game of a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionConfig {
    /// Fixed grid size; `None` prompts before each game.
    size: Option<usize>,

    /// Seed for all randomness; `None` seeds from the OS.
    seed: Option<u64>,

    /// Whether symbols are colored.
    color: bool,
}

impl SessionConfig {
    /// Creates a configuration, validating the grid size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `size` is below the playable minimum.
    #[instrument]
    pub fn new(size: Option<usize>, seed: Option<u64>, color: bool) -> Result<Self, ConfigError> {
        if let Some(size) = size
            && size < MIN_PLAYABLE_SIZE
        {
            return Err(ConfigError::new(format!(
                "The grid size must be at least {MIN_PLAYABLE_SIZE}, got {size}"
            )));
        }

        Ok(Self { size, seed, color })
    }

    /// Builds the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Same as [`SessionConfig::new`].
    #[instrument(skip(cli))]
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self::new(cli.size, cli.seed, !cli.no_color)?;
        debug!(?config, "Session configured");
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: None,
            seed: None,
            color: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
