//! Board state validation logic

use super::{
    board::{Board, Cell, Player},
    lines,
};
use crate::error::Error;

impl Board {
    /// Whose turn it is under X-first alternation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPieceCounts`] when the counts cannot come from
    /// alternating play starting with X.
    pub fn side_to_move(&self) -> Result<Player, Error> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if x_count == o_count {
            Ok(Player::X)
        } else if x_count == o_count + 1 {
            Ok(Player::O)
        } else {
            Err(Error::InvalidPieceCounts { x_count, o_count })
        }
    }

    /// Check if the board could arise from legal play starting with X
    pub fn is_valid(&self) -> bool {
        let Ok(to_move) = self.side_to_move() else {
            return false;
        };

        let x_lines = lines::completed_lines(self, Player::X);
        let o_lines = lines::completed_lines(self, Player::O);

        if !x_lines.is_empty() && !o_lines.is_empty() {
            return false;
        }

        // The winner must have made the last move, so it is now the loser's turn
        if !x_lines.is_empty() && to_move != Player::O {
            return false;
        }
        if !o_lines.is_empty() && to_move != Player::X {
            return false;
        }

        // Several winning lines can only appear together when one move
        // completed all of them
        let winning = if x_lines.is_empty() { o_lines } else { x_lines };
        if winning.len() >= 2 {
            let shared = winning[0]
                .iter()
                .any(|pos| winning.iter().all(|line| line.contains(pos)));
            if !shared {
                return false;
            }
        }

        true
    }
}
