//! Plain minimax without pruning.
//!
//! Visits every node of the tree. It exists as the yardstick for
//! [`AlphaBeta`](super::AlphaBeta): both must agree on value and move.

use super::result::{INFINITY, SearchResult, SearchStats};
use crate::tictactoe::{Board, Player};

/// Unpruned minimax with the same move order and tie-break as the
/// alpha-beta search. Returns the result and the number of nodes visited.
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats::default();
    let result = visit(board, depth, maximizing, &mut stats);
    (result, stats)
}

fn visit(board: &Board, depth: u32, maximizing: bool, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || board.is_terminal() {
        return SearchResult::leaf(board.evaluate());
    }

    let player = Player::from_maximizing(maximizing);
    let mut best = SearchResult::leaf(if maximizing { -INFINITY } else { INFINITY });

    for pos in board.legal_moves() {
        let Ok(child) = board.apply_move(pos, player) else {
            continue;
        };
        let value = visit(&child, depth - 1, !maximizing, stats).value;
        let better = if maximizing {
            value > best.value
        } else {
            value < best.value
        };
        if better {
            best = SearchResult {
                value,
                best_move: Some(pos),
            };
        }
    }

    best
}
