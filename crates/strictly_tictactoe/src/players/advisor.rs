//! Player backed by the heuristic move advisor.

use super::Player;
use crate::{Advice, Grid, MoveAdvisor, PlayerError, Position, Symbol};
use rand::Rng;
use tracing::{debug, info};

/// Computer player choosing moves with a [`MoveAdvisor`].
#[derive(Debug, Clone)]
pub struct AdvisorPlayer<R> {
    name: String,
    advisor: MoveAdvisor<R>,
    last_advice: Option<Advice>,
}

impl<R: Rng> AdvisorPlayer<R> {
    /// Creates an advisor player drawing random moves from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        let name = name.into();
        info!(player = %name, "Creating advisor player");
        Self {
            name,
            advisor: MoveAdvisor::new(rng),
            last_advice: None,
        }
    }

    /// Returns the advice behind the most recent move.
    pub fn last_advice(&self) -> Option<Advice> {
        self.last_advice
    }
}

impl<R: Rng> Player for AdvisorPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, grid: &Grid, symbol: Symbol) -> Result<Position, PlayerError> {
        debug!(player = %self.name, %symbol, "Advisor's turn");
        let advice = self.advisor.advise(grid, symbol)?;
        self.last_advice = Some(advice);
        Ok(advice.position)
    }
}
