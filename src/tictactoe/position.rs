//! Board coordinates

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, MoveRejection};

/// A `(row, col)` coordinate on the 3x3 board.
///
/// Both fields are public so callers can describe any pair they received
/// from outside; the board rejects anything outside `0..3` when a move is
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// All nine cells in row-major order
    pub const ALL: [Position; 9] = [
        Position { row: 0, col: 0 },
        Position { row: 0, col: 1 },
        Position { row: 0, col: 2 },
        Position { row: 1, col: 0 },
        Position { row: 1, col: 1 },
        Position { row: 1, col: 2 },
        Position { row: 2, col: 0 },
        Position { row: 2, col: 1 },
        Position { row: 2, col: 2 },
    ];

    /// Create a position, rejecting coordinates outside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] with [`MoveRejection::OutOfBounds`].
    pub fn new(row: usize, col: usize) -> Result<Self, Error> {
        let pos = Position { row, col };
        if pos.in_bounds() {
            Ok(pos)
        } else {
            Err(Error::InvalidMove {
                row,
                col,
                reason: MoveRejection::OutOfBounds,
            })
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// Row-major index (0-8)
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = Error;

    /// Accepts `"r,c"`, `"r c"` or `"(r, c)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidPosition {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')')
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let [row, col] = parts.as_slice() else {
            return Err(invalid());
        };
        let row: usize = row.parse().map_err(|_| invalid())?;
        let col: usize = col.parse().map_err(|_| invalid())?;

        Position::new(row, col).map_err(|_| invalid())
    }
}
