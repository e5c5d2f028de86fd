//! Play-again session loop.

use crate::config::SessionConfig;
use crate::console::{Console, ConsoleError};
use crate::players::ConsoleHuman;
use anyhow::{Context, Result};
use derive_getters::Getters;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use strictly_tictactoe::{
    AdvisorPlayer, GameError, GameFinished, GameOutcome, GameSetup, MIN_PLAYABLE_SIZE,
    PlayerError, Role, Roles,
};
use tracing::{info, instrument};

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Games played to a result.
    games: usize,
    /// Games the human won.
    human_wins: usize,
    /// Games the advisor won.
    advisor_wins: usize,
    /// Drawn games.
    draws: usize,
}

impl SessionSummary {
    fn record(&mut self, finished: &GameFinished) {
        self.games += 1;
        match (finished.outcome(), finished.winning_role()) {
            (GameOutcome::Draw, _) => self.draws += 1,
            (_, Some(Role::Human)) => self.human_wins += 1,
            (_, Some(Role::Advisor)) => self.advisor_wins += 1,
            _ => {}
        }
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games: {}, you won {}, the advisor won {}, draws {}.",
            self.games, self.human_wins, self.advisor_wins, self.draws
        )
    }
}

/// Sequence of games on one console until the player stops.
pub struct Session<R, W> {
    console: Console<R, W>,
    config: SessionConfig,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session; randomness is seeded from the config or the OS.
    pub fn new(console: Console<R, W>, config: SessionConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            console,
            config,
            rng,
        }
    }

    /// Returns the console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Plays games until the player declines another or input ends.
    ///
    /// # Errors
    ///
    /// Fails on console I/O errors and on game invariant violations.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let size = match *self.config.size() {
                Some(size) => size,
                None => match self.console.ask_grid_size(MIN_PLAYABLE_SIZE) {
                    Ok(size) => size,
                    Err(ConsoleError::Closed) => break,
                    Err(err) => return Err(err).context("Failed to read grid size"),
                },
            };

            match self.play_game(size)? {
                Some(finished) => summary.record(&finished),
                None => break,
            }

            match self.console.ask_yes_no("Do you want to play again? (Y/N): ") {
                Ok(true) => continue,
                Ok(false) | Err(ConsoleError::Closed) => break,
                Err(err) => return Err(err).context("Failed to read answer"),
            }
        }

        self.console.say(summary).context("Failed to write summary")?;
        info!(games = summary.games, "Session finished");
        Ok(summary)
    }

    /// Plays one game; `None` when the human's input closed mid-game.
    #[instrument(skip(self))]
    fn play_game(&mut self, size: usize) -> Result<Option<GameFinished>> {
        let roles = Roles::random(&mut self.rng);
        let game = GameSetup::new(size, roles)
            .context("Invalid grid size")?
            .start_random(&mut self.rng);

        let mut advisor = AdvisorPlayer::new("Advisor", StdRng::seed_from_u64(self.rng.random()));
        let mut human = ConsoleHuman::new("You", &mut self.console, *self.config.color());

        match game.play(&mut human, &mut advisor) {
            Ok(finished) => Ok(Some(finished)),
            Err(GameError::Player(PlayerError::InputClosed)) => {
                info!("Input closed during a game");
                Ok(None)
            }
            Err(err) => Err(err).context("Game aborted"),
        }
    }
}
