//! Game loop for a human against the advisor.
//!
//! A game moves through three types:
//! - [`GameSetup`] - empty grid, roles assigned, nobody to move yet
//! - [`Game`] - in play; reports its [`Phase`] fresh from the grid
//! - [`GameFinished`] - the outcome is always a win or a draw

use super::action::{Move, MoveError};
use super::error::{GameError, GridError, PlaceError};
use super::outcome::GameOutcome;
use super::players::Player;
use super::position::Position;
use super::types::{Grid, Symbol};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Smallest grid a game can be played on.
pub const MIN_PLAYABLE_SIZE: usize = 3;

/// Who controls a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Role {
    /// Moves come from a person.
    Human,
    /// Moves come from the advisor.
    Advisor,
}

/// Assignment of symbols to roles, fixed for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roles {
    human: Symbol,
}

impl Roles {
    /// The human plays `human`; the advisor plays the other symbol.
    pub fn new(human: Symbol) -> Self {
        Self { human }
    }

    /// Assigns the human a symbol at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let human = if rng.random_bool(0.5) {
            Symbol::X
        } else {
            Symbol::O
        };
        Self::new(human)
    }

    /// Symbol played by the human.
    pub fn human(&self) -> Symbol {
        self.human
    }

    /// Symbol played by the advisor.
    pub fn advisor(&self) -> Symbol {
        self.human.opponent()
    }

    /// Role controlling `symbol`.
    pub fn role_of(&self, symbol: Symbol) -> Role {
        if symbol == self.human {
            Role::Human
        } else {
            Role::Advisor
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The human is to move.
    AwaitingHumanMove,
    /// The advisor is to move.
    AwaitingAdvisorMove,
    /// A symbol completed a line.
    Won(Symbol),
    /// The grid filled without a winner.
    Draw,
}

impl Phase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won(_) | Phase::Draw)
    }
}

/// Progress reported to players.
#[derive(Debug, Clone, Copy)]
pub enum GameEvent<'a> {
    /// A game began.
    Started {
        /// Symbol assignment.
        roles: Roles,
        /// Symbol moving first.
        first: Symbol,
        /// The empty grid.
        grid: &'a Grid,
    },
    /// A turn began.
    TurnStarted {
        /// Symbol to move.
        symbol: Symbol,
        /// Role controlling it.
        role: Role,
        /// Grid before the move.
        grid: &'a Grid,
    },
    /// A proposed human move was refused; the turn continues.
    MoveRejected {
        /// Symbol to move.
        symbol: Symbol,
        /// Why the grid refused it.
        error: PlaceError,
    },
    /// A move was applied.
    MovePlayed {
        /// The move.
        mv: Move,
        /// Role that made it.
        role: Role,
        /// Grid after the move.
        grid: &'a Grid,
    },
    /// The game reached a result.
    Finished {
        /// Win or draw.
        outcome: GameOutcome,
        /// Number of moves played.
        moves: usize,
        /// Final grid.
        grid: &'a Grid,
    },
}

fn notify(human: &mut dyn Player, advisor: &mut dyn Player, event: &GameEvent<'_>) {
    human.observe(event);
    advisor.observe(event);
}

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Game ready to start: empty grid, roles assigned.
#[derive(Debug, Clone)]
pub struct GameSetup {
    grid: Grid,
    roles: Roles,
}

impl GameSetup {
    /// Creates an empty `size`×`size` game.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooSmall`] if `size` is below
    /// [`MIN_PLAYABLE_SIZE`].
    #[instrument]
    pub fn new(size: usize, roles: Roles) -> Result<Self, GridError> {
        if size < MIN_PLAYABLE_SIZE {
            return Err(GridError::TooSmall {
                size,
                min: MIN_PLAYABLE_SIZE,
            });
        }

        Ok(Self {
            grid: Grid::new(size)?,
            roles,
        })
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the role assignment.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Starts the game with `first` to move.
    #[instrument(skip(self))]
    pub fn start(self, first: Symbol) -> Game {
        Game {
            grid: self.grid,
            roles: self.roles,
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Starts the game with a randomly chosen first mover.
    pub fn start_random<R: Rng + ?Sized>(self, rng: &mut R) -> Game {
        let first = if rng.random_bool(0.5) {
            Symbol::X
        } else {
            Symbol::O
        };
        self.start(first)
    }
}

// ─────────────────────────────────────────────────────────────
//  In play
// ─────────────────────────────────────────────────────────────

/// Game in play.
///
/// Only [`Game::make_move`] mutates the grid, one empty cell per move.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    roles: Roles,
    to_move: Symbol,
    history: Vec<Move>,
}

impl Game {
    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the role assignment.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Returns the symbol to move.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Returns moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Evaluates the grid.
    pub fn outcome(&self) -> GameOutcome {
        GameOutcome::evaluate(&self.grid)
    }

    /// Current phase, derived from the grid and the symbol to move.
    pub fn phase(&self) -> Phase {
        match self.outcome() {
            GameOutcome::Win(symbol) => Phase::Won(symbol),
            GameOutcome::Draw => Phase::Draw,
            GameOutcome::Unfinished => match self.roles.role_of(self.to_move) {
                Role::Human => Phase::AwaitingHumanMove,
                Role::Advisor => Phase::AwaitingAdvisorMove,
            },
        }
    }

    /// Returns empty positions in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.grid.empty_positions().collect()
    }

    /// Applies a move and returns the resulting phase.
    ///
    /// The symbol to move alternates only while the game is unfinished.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has a result
    /// - [`MoveError::WrongSymbol`] if it is the other symbol's turn
    /// - [`MoveError::Place`] for occupied or off-grid positions
    ///
    /// The game is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn make_move(&mut self, mv: Move) -> Result<Phase, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        if mv.symbol != self.to_move {
            return Err(MoveError::WrongSymbol {
                expected: self.to_move,
                got: mv.symbol,
            });
        }

        self.grid.place(mv.position, mv.symbol)?;
        self.history.push(mv);

        if !self.outcome().is_over() {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.phase())
    }

    /// Plays one turn: asks the player in control until a move is accepted.
    ///
    /// Rejected human moves are reported back to the human and do not
    /// consume the turn. A rejected advisor move is an error. On a finished
    /// game this returns the terminal phase without asking anyone.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if a player fails or the advisor proposes an
    /// illegal move.
    #[instrument(skip_all, fields(symbol = %self.to_move, turn = self.history.len() + 1))]
    pub fn play_turn(
        &mut self,
        human: &mut dyn Player,
        advisor: &mut dyn Player,
    ) -> Result<Phase, GameError> {
        let role = match self.phase() {
            Phase::AwaitingHumanMove => Role::Human,
            Phase::AwaitingAdvisorMove => Role::Advisor,
            terminal => return Ok(terminal),
        };
        let symbol = self.to_move;

        notify(
            human,
            advisor,
            &GameEvent::TurnStarted {
                symbol,
                role,
                grid: &self.grid,
            },
        );

        let mover: &mut dyn Player = match role {
            Role::Human => &mut *human,
            Role::Advisor => &mut *advisor,
        };

        let (mv, phase) = loop {
            let position = mover.choose_move(&self.grid, symbol)?;
            let mv = Move::new(symbol, position);

            match self.make_move(mv) {
                Ok(phase) => break (mv, phase),
                Err(MoveError::Place(error)) if role == Role::Human => {
                    debug!(player = %mover.name(), %error, "Move rejected, asking again");
                    mover.observe(&GameEvent::MoveRejected { symbol, error });
                }
                Err(err) => return Err(err.into()),
            }
        };

        notify(
            human,
            advisor,
            &GameEvent::MovePlayed {
                mv,
                role,
                grid: &self.grid,
            },
        );

        Ok(phase)
    }

    /// Plays turns until the game is won or drawn.
    ///
    /// At most one turn per empty cell is played.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if a turn fails or the turn limit is exceeded.
    #[instrument(skip_all, fields(size = self.grid.size(), first = %self.to_move))]
    pub fn play(
        mut self,
        human: &mut dyn Player,
        advisor: &mut dyn Player,
    ) -> Result<GameFinished, GameError> {
        info!(
            human = %self.roles.human(),
            advisor = %self.roles.advisor(),
            "Game started"
        );
        notify(
            human,
            advisor,
            &GameEvent::Started {
                roles: self.roles,
                first: self.to_move,
                grid: &self.grid,
            },
        );

        let limit = self.grid.empty_positions().count();
        for _ in 0..=limit {
            if self.play_turn(human, advisor)?.is_terminal() {
                let finished = self.finish();
                info!(outcome = %finished.outcome, moves = finished.history.len(), "Game over");
                notify(
                    human,
                    advisor,
                    &GameEvent::Finished {
                        outcome: finished.outcome,
                        moves: finished.history.len(),
                        grid: &finished.grid,
                    },
                );
                return Ok(finished);
            }
        }

        Err(GameError::TurnLimitExceeded { limit })
    }

    fn finish(self) -> GameFinished {
        let outcome = self.outcome();
        GameFinished {
            grid: self.grid,
            roles: self.roles,
            history: self.history,
            outcome,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished
// ─────────────────────────────────────────────────────────────

/// Game with a result: a win or a draw, never unfinished.
#[derive(Debug, Clone)]
pub struct GameFinished {
    grid: Grid,
    roles: Roles,
    history: Vec<Move>,
    outcome: GameOutcome,
}

impl GameFinished {
    /// Returns the outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the role of the winner, if any.
    pub fn winning_role(&self) -> Option<Role> {
        self.outcome.winner().map(|symbol| self.roles.role_of(symbol))
    }

    /// Returns the final grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the role assignment.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Returns every move played, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}
