//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{lines, position::Position};
use crate::error::{Error, MoveRejection};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Numeric value used for line sums: X is +1, O is -1, Empty is 0
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::X => 1,
            Cell::O => -1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X moves first and maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// +1 for X, -1 for O
    pub fn value(self) -> i32 {
        self.to_cell().value()
    }

    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }

    /// The side that plays a node of the search tree
    pub fn from_maximizing(maximizing: bool) -> Player {
        if maximizing { Player::X } else { Player::O }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// Outcome of a board, always recomputed from the cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{player} wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::InProgress => write!(f, "in progress"),
        }
    }
}

/// A 3x3 grid of cells.
///
/// `Board` is `Copy` (nine bytes), so every operation that changes it hands
/// back a new value and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Create a board with every cell empty
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Build a board from raw rows. No consistency checks are made; see
    /// [`Board::is_valid`] for that.
    pub fn from_cells(cells: [[Cell; 3]; 3]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Parse a board from nine cell characters.
    ///
    /// Whitespace and `/` separators are ignored, so `"XO./.X./..O"` and
    /// `"XO. .X. ..O"` are both accepted. Empty cells may be written as `.`,
    /// `-` or `_`.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than nine cell characters are present, if more
    /// than nine are present, or if any character is not a cell.
    pub fn from_string(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::empty();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / 3][i % 3] = cell;
        }

        Ok(board)
    }

    /// Get the cell at a position, or `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn occupied_count(&self) -> usize {
        9 - self.count(Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// Every empty cell in row-major order.
    ///
    /// The order is part of the contract: the search walks moves in this order
    /// and keeps the first of several equally good moves.
    pub fn legal_moves(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty_at(pos))
            .collect()
    }

    /// Place `player` at `pos` and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] when `pos` is outside the grid or the
    /// cell is already taken. `self` is never modified.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, pos: Position, player: Player) -> Result<Board, Error> {
        let reason = match self.get(pos) {
            None => MoveRejection::OutOfBounds,
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[pos.row][pos.col] = player.to_cell();
                return Ok(next);
            }
            Some(_) => MoveRejection::Occupied,
        };

        Err(Error::InvalidMove {
            row: pos.row,
            col: pos.col,
            reason,
        })
    }

    /// Utility of the board from X's point of view: +1 when X owns a full
    /// line, -1 when O does, 0 otherwise. Draws and unfinished games both
    /// score 0, so use [`Board::is_terminal`] to tell them apart.
    pub fn evaluate(&self) -> i32 {
        lines::completed_line(self)
            .map(|line| lines::line_sum(self, &line).signum())
            .unwrap_or(0)
    }

    /// A board is terminal once a line is complete or no empty cell remains
    pub fn is_terminal(&self) -> bool {
        self.evaluate() != 0 || self.legal_moves().is_empty()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.evaluate() {
            1 => Some(Player::X),
            -1 => Some(Player::O),
            _ => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if let Some(player) = self.winner() {
            Outcome::Win(player)
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Compact nine-character encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if r < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.evaluate(), 0);
        assert!(!board.is_terminal());
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_returns_new_board() {
        let board = Board::empty();
        let next = board.apply_move(pos(1, 1), Player::X).unwrap();

        assert_eq!(next.get(pos(1, 1)), Some(Cell::X));
        assert_eq!(board.get(pos(1, 1)), Some(Cell::Empty));
        assert_eq!(next.legal_moves().len(), 8);
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = Board::from_string("X........").unwrap();
        let err = board.apply_move(pos(0, 0), Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
        assert_eq!(board.get(pos(0, 0)), Some(Cell::X));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let err = Board::empty()
            .apply_move(pos(0, 3), Player::X)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidMove {
                row: 0,
                col: 3,
                reason: MoveRejection::OutOfBounds
            }
        ));
    }

    #[test]
    fn test_legal_moves_row_major() {
        let board = Board::from_string("X.O.X....").unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![pos(0, 1), pos(1, 0), pos(1, 2), pos(2, 0), pos(2, 1), pos(2, 2)]
        );
    }

    #[test]
    fn test_win_detection_row_column_diagonal() {
        assert_eq!(Board::from_string("XXXOO....").unwrap().evaluate(), 1);
        assert_eq!(Board::from_string("XO.XO.X..").unwrap().evaluate(), 1);
        assert_eq!(Board::from_string("OXXXO...O").unwrap().evaluate(), -1);
        assert_eq!(Board::from_string("X.OXO.O.X").unwrap().evaluate(), -1);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // top row sums to 1
        let board = Board::from_string("XXO......").unwrap();
        assert_eq!(board.evaluate(), 0);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert_eq!(board.evaluate(), 0);
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Outcome::Draw);
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_full_and_won() {
        let board = Board::from_string("XXXOOXXOO").unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_from_string_errors() {
        assert!(matches!(
            Board::from_string("XO"),
            Err(Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
        assert!(Board::from_string("XO./.X./..O").is_ok());
    }

    #[test]
    fn test_display_and_encode() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_player_helpers() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::X.value(), 1);
        assert_eq!(Player::O.value(), -1);
        assert_eq!(Player::from_maximizing(false), Player::O);
        assert_eq!("o".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
    }
}
