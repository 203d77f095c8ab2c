//! Human-versus-machine game session

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{
    board::{Board, Outcome, Player},
    position::Position,
};
use crate::{Error, Result, app::GameConfig, search};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Where the turn cycle currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingHuman,
    AwaitingAi,
    GameOver(Outcome),
}

/// One game between a human and the search engine.
///
/// X always opens. The session owns the board and move history; callers
/// drive it with [`Game::play_human`] and [`Game::play_ai`] and leave
/// [`Phase::GameOver`] only through [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let phase = Self::opening_phase(&config);
        Game {
            config,
            board: Board::empty(),
            phase,
            history: Vec::new(),
        }
    }

    fn opening_phase(config: &GameConfig) -> Phase {
        if config.human == Player::X {
            Phase::AwaitingHuman
        } else {
            Phase::AwaitingAi
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn human(&self) -> Player {
        self.config.human
    }

    pub fn ai(&self) -> Player {
        self.config.human.opponent()
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Play the human's move and return the phase that follows.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has finished
    /// - [`Error::NotYourTurn`] while the machine is due to move
    /// - [`Error::InvalidMove`] for a taken or out-of-range cell; the board
    ///   is left as it was
    #[instrument(level = "debug", skip(self))]
    pub fn play_human(&mut self, position: Position) -> Result<Phase> {
        match self.phase {
            Phase::GameOver(_) => return Err(Error::GameOver),
            Phase::AwaitingAi => {
                return Err(Error::NotYourTurn {
                    expected: self.ai(),
                });
            }
            Phase::AwaitingHuman => {}
        }

        self.apply(position, self.human())?;
        self.phase = self.phase_after(Phase::AwaitingAi);
        Ok(self.phase)
    }

    /// Let the search engine pick and play its move.
    ///
    /// # Errors
    ///
    /// - [`Error::GameOver`] once the game has finished
    /// - [`Error::NotYourTurn`] while the human is due to move
    /// - [`Error::NoLegalMove`] if the search finds nothing to play
    #[instrument(level = "debug", skip(self))]
    pub fn play_ai(&mut self) -> Result<Position> {
        match self.phase {
            Phase::GameOver(_) => return Err(Error::GameOver),
            Phase::AwaitingHuman => {
                return Err(Error::NotYourTurn {
                    expected: self.human(),
                });
            }
            Phase::AwaitingAi => {}
        }

        let result = search::best_move(&self.board, self.ai(), self.config.depth)?;
        let position = result.best_move.ok_or(Error::NoLegalMove)?;
        debug!(%position, value = result.value, "machine move chosen");

        self.apply(position, self.ai())?;
        self.phase = self.phase_after(Phase::AwaitingHuman);
        Ok(position)
    }

    /// Start again from an empty board with the same configuration
    pub fn reset(&mut self) {
        info!("game reset");
        self.board = Board::empty();
        self.history.clear();
        self.phase = Self::opening_phase(&self.config);
    }

    fn apply(&mut self, position: Position, player: Player) -> Result<()> {
        self.board = self.board.apply_move(position, player)?;
        self.history.push(Move { position, player });
        debug!(%player, %position, "move applied");
        Ok(())
    }

    fn phase_after(&self, next: Phase) -> Phase {
        let outcome = self.board.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "game over");
            Phase::GameOver(outcome)
        } else {
            next
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
