//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod position;
pub mod validation;

pub use board::{Board, Cell, Outcome, Player};
pub use game::{Game, Move, Phase};
pub use game_tree::{format_board, reachable_positions};
pub use lines::LINES;
pub use position::Position;
