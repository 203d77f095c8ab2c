//! Agent implementations

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::Agent,
    search::{self, FULL_DEPTH},
    tictactoe::{Board, Player, Position},
};

/// Plays the move returned by the alpha-beta search
pub struct OptimalAgent {
    name: String,
    depth: u32,
}

impl OptimalAgent {
    pub fn new(name: String, depth: u32) -> Self {
        Self { name, depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for OptimalAgent {
    fn default() -> Self {
        Self::new("Optimal".to_string(), FULL_DEPTH)
    }
}

impl Agent for OptimalAgent {
    fn select_move(&mut self, board: &Board, side: Player) -> Result<Position> {
        search::best_move(board, side, self.depth)?
            .best_move
            .ok_or(Error::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Random policy (baseline)
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _side: Player) -> Result<Position> {
        if board.is_terminal() {
            return Err(Error::NoLegalMove);
        }
        let moves = board.legal_moves();
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Agent selector for command-line and config use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Optimal,
    Random,
}

impl AgentKind {
    /// Build a boxed agent. `seed` only matters for [`AgentKind::Random`];
    /// without one the agent is seeded from entropy.
    pub fn build(self, depth: u32, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentKind::Optimal => Box::new(OptimalAgent::new("Optimal".to_string(), depth)),
            AgentKind::Random => {
                let name = "Random".to_string();
                match seed {
                    Some(seed) => Box::new(RandomAgent::with_seed(name, seed)),
                    None => Box::new(RandomAgent::new(name)),
                }
            }
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Optimal => write!(f, "optimal"),
            AgentKind::Random => write!(f, "random"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimal" | "minimax" => Ok(AgentKind::Optimal),
            "random" => Ok(AgentKind::Random),
            other => Err(Error::InvalidConfiguration {
                message: format!("unknown agent '{other}' (expected 'optimal' or 'random')"),
            }),
        }
    }
}
