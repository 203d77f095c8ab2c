//! Exhaustive tic-tac-toe solver
//!
//! This crate provides:
//! - A 3x3 board model with move validation, win detection and outcomes
//! - Minimax search with alpha-beta pruning (plus an unpruned reference)
//! - A human-versus-machine game session driven by the search
//! - Agents and a match runner for self-play and baselines
//! - The `noughts` command-line front end
//!
//! ```
//! use noughts::{Board, Player, Position, search};
//!
//! let board = Board::empty()
//!     .apply_move(Position::new(0, 0)?, Player::X)?
//!     .apply_move(Position::new(1, 1)?, Player::O)?;
//! let result = search::search(&board, search::FULL_DEPTH, true, -search::INFINITY, search::INFINITY);
//! assert_eq!(result.value, 0);
//! assert!(result.best_move.is_some());
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, MoveRejection, Result};
pub use search::{FULL_DEPTH, INFINITY, SearchResult, SearchStats};
pub use tictactoe::{Board, Cell, Game, Move, Outcome, Phase, Player, Position};
