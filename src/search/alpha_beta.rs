//! Minimax with alpha-beta pruning

use super::result::{SearchResult, SearchStats};
use crate::tictactoe::{Board, Player};

/// Depth-first alpha-beta searcher.
///
/// Each recursive call works on its own copy of the board, so siblings never
/// share state. The searcher only keeps counters.
#[derive(Debug, Default)]
pub struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search `board` to `depth` plies.
    ///
    /// X plays when `maximizing` is true, O otherwise. Moves are tried in
    /// [`Board::legal_moves`] order and only a strictly better value replaces
    /// the current best, so the first of several equal moves is returned.
    ///
    /// If the board is not terminal but has no empty cell left (impossible for
    /// a real board, since a full board is terminal) the result carries no
    /// move and the value stays at the `-INFINITY`/`INFINITY` sentinel.
    pub fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(board.evaluate());
        }

        let player = Player::from_maximizing(maximizing);
        let mut best = SearchResult::leaf(if maximizing {
            -super::INFINITY
        } else {
            super::INFINITY
        });

        for pos in board.legal_moves() {
            let Ok(child) = board.apply_move(pos, player) else {
                continue;
            };
            let value = self.search(&child, depth - 1, !maximizing, alpha, beta).value;

            if maximizing {
                if value > best.value {
                    best = SearchResult {
                        value,
                        best_move: Some(pos),
                    };
                }
                alpha = alpha.max(value);
            } else {
                if value < best.value {
                    best = SearchResult {
                        value,
                        best_move: Some(pos),
                    };
                }
                beta = beta.min(value);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Alpha-beta search from `board`; see [`AlphaBeta::search`].
///
/// The usual root call is `search(board, FULL_DEPTH, maximizing, -INFINITY, INFINITY)`.
pub fn search(board: &Board, depth: u32, maximizing: bool, alpha: i32, beta: i32) -> SearchResult {
    AlphaBeta::new().search(board, depth, maximizing, alpha, beta)
}
