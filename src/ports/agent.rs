//! Agent port - anything that can choose a move for one side

use crate::{
    Result,
    tictactoe::{Board, Player, Position},
};

/// A move chooser.
///
/// Implemented by the search-backed optimal agent and by baselines such as
/// the random agent, so matches can pit any two against each other.
///
/// # Examples
///
/// ```
/// use noughts::{
///     pipeline::OptimalAgent,
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// let mut agent = OptimalAgent::default();
/// let board = Board::from_string("XX.OO....")?;
/// let mv = agent.select_move(&board, Player::X)?;
/// assert_eq!((mv.row, mv.col), (0, 2));
/// # Ok::<(), noughts::Error>(())
/// ```
pub trait Agent {
    /// Pick a move for `side` on `board`.
    ///
    /// # Errors
    ///
    /// Returns an error if no legal move is available (terminal board).
    fn select_move(&mut self, board: &Board, side: Player) -> Result<Position>;

    /// Display name used in match reports
    fn name(&self) -> &str;
}
