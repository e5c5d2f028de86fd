//! Human player reading coordinates from the console.

use crate::console::{Console, ConsoleError, parse_numbers};
use crate::ui::render_grid;
use std::io::{BufRead, Write};
use strictly_tictactoe::{
    GameEvent, GameOutcome, Grid, PlaceError, Player, PlayerError, Position, Role, Roles, Symbol,
};
use tracing::{debug, instrument, warn};

/// Human player at the terminal.
///
/// Also acts as the game's view: every event is printed to the console.
pub struct ConsoleHuman<'a, R, W> {
    name: String,
    console: &'a mut Console<R, W>,
    color: bool,
    roles: Option<Roles>,
}

impl<'a, R: BufRead, W: Write> ConsoleHuman<'a, R, W> {
    /// Creates a human player using `console` for input and output.
    pub fn new(name: impl Into<String>, console: &'a mut Console<R, W>, color: bool) -> Self {
        Self {
            name: name.into(),
            console,
            color,
            roles: None,
        }
    }

    /// Reads a row and a column, both in `[0, size)`.
    ///
    /// Both may be given on one line (`1 2`); otherwise the column is
    /// asked for separately.
    #[instrument(skip(self))]
    fn read_position(&mut self, size: usize) -> Result<Position, ConsoleError> {
        loop {
            let answer = self.console.ask("Enter the row number: ")?;
            let (row, col) = match parse_numbers(&answer).as_deref() {
                Some(&[row, col]) => (row, col),
                Some(&[row]) => (row, self.console.ask_number("Enter the column number: ")?),
                _ => {
                    self.console.say("Please enter a valid number.")?;
                    continue;
                }
            };

            if row < size && col < size {
                return Ok(Position::new(row, col));
            }

            debug!(row, col, size, "Coordinates off the grid");
            self.console
                .say("The coordinates entered are out of the grid, please try again.")?;
        }
    }

    fn describe(&self, symbol: Symbol) -> &'static str {
        match self.roles.map(|roles| roles.role_of(symbol)) {
            Some(Role::Human) => "you",
            Some(Role::Advisor) => "advisor",
            None => "player",
        }
    }

    fn show(&mut self, event: &GameEvent<'_>) -> Result<(), ConsoleError> {
        match *event {
            GameEvent::Started { roles, first, .. } => {
                self.roles = Some(roles);
                self.console.say(format!(
                    "You play {}, the advisor plays {}.",
                    roles.human(),
                    roles.advisor()
                ))?;
                self.console.say(format!("Player {first} starts."))?;
            }
            GameEvent::TurnStarted { symbol, grid, .. } => {
                let who = self.describe(symbol);
                self.console.say(render_grid(grid, self.color))?;
                self.console.say(format!("It's {symbol}'s turn ({who})."))?;
            }
            GameEvent::MoveRejected { error, .. } => match error {
                PlaceError::Occupied { .. } => self
                    .console
                    .say("This cell is already occupied, please choose another one.")?,
                PlaceError::OutOfBounds { .. } => self
                    .console
                    .say("The coordinates entered are out of the grid, please try again.")?,
            },
            GameEvent::MovePlayed { mv, role, .. } => {
                if role == Role::Advisor {
                    self.console
                        .say(format!("The advisor plays {} at {}.", mv.symbol, mv.position))?;
                }
            }
            GameEvent::Finished {
                outcome,
                moves,
                grid,
            } => {
                self.console.say(render_grid(grid, self.color))?;
                match outcome {
                    GameOutcome::Win(symbol) => {
                        let who = self.describe(symbol);
                        self.console.say(format!("Player {symbol} wins! ({who})"))?;
                    }
                    GameOutcome::Draw => self.console.say("Draw!")?,
                    GameOutcome::Unfinished => self.console.say("End of the game.")?,
                }
                self.console.say(format!("Game over after {moves} moves."))?;
            }
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for ConsoleHuman<'_, R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, grid: &Grid, symbol: Symbol) -> Result<Position, PlayerError> {
        debug!(player = %self.name, %symbol, "Waiting for console input");
        Ok(self.read_position(grid.size())?)
    }

    fn observe(&mut self, event: &GameEvent<'_>) {
        // Observers cannot fail the game; a dead console surfaces at the next prompt.
        if let Err(err) = self.show(event) {
            warn!(error = %err, "Failed to write game event");
        }
    }
}
