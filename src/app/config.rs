//! Configuration types for game sessions.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    Error, Result,
    search::FULL_DEPTH,
    tictactoe::Player,
};

/// Configuration for a human-versus-machine [`Game`](crate::tictactoe::Game).
///
/// # Examples
///
/// ```
/// use noughts::app::GameConfig;
/// use noughts::tictactoe::Player;
///
/// let config = GameConfig::new().with_human(Player::O);
/// assert_eq!(config.depth, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side the human plays; the machine takes the other one
    pub human: Player,
    /// Search depth in plies for machine moves
    pub depth: u32,
}

impl GameConfig {
    /// Human plays X (and therefore opens), full-depth search.
    pub fn new() -> Self {
        Self {
            human: Player::X,
            depth: FULL_DEPTH,
        }
    }

    /// Set the human's side.
    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    /// Set the search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Reject settings the engine cannot play with.
    ///
    /// A depth below [`FULL_DEPTH`] is accepted, but the machine may then
    /// misjudge positions whose outcome lies beyond its horizon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when `depth` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(Error::InvalidConfiguration {
                message: "depth must be at least 1".to_string(),
            });
        }
        if self.depth < FULL_DEPTH {
            warn!(
                depth = self.depth,
                full_depth = FULL_DEPTH,
                "search depth is below full depth; play may be suboptimal"
            );
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
