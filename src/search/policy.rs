//! Caller-facing helpers built on the raw search

use tracing::{debug, instrument};

use super::{
    alpha_beta::AlphaBeta,
    result::{INFINITY, SearchResult},
};
use crate::{
    Error, Result,
    tictactoe::{Board, Move, Player, Position},
};

/// Optimal move for `player` on `board`.
///
/// Unlike [`search`](super::search), this refuses boards with nothing left to
/// play, so a returned result always carries a move.
///
/// # Errors
///
/// - [`Error::NoLegalMove`] if the board is terminal
/// - [`Error::InvalidConfiguration`] if `depth` is zero
#[instrument(level = "debug", skip(board), fields(board = %board.encode()))]
pub fn best_move(board: &Board, player: Player, depth: u32) -> Result<SearchResult> {
    if depth == 0 {
        return Err(Error::InvalidConfiguration {
            message: "search depth must be at least 1".to_string(),
        });
    }
    if board.is_terminal() {
        return Err(Error::NoLegalMove);
    }

    let mut searcher = AlphaBeta::new();
    let result = searcher.search(board, depth, player.is_maximizing(), -INFINITY, INFINITY);
    let stats = searcher.stats();
    debug!(
        value = result.value,
        best_move = ?result.best_move,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        "search finished"
    );

    match result.best_move {
        Some(_) => Ok(result),
        None => Err(Error::NoLegalMove),
    }
}

/// Exact value of every legal move for `player`, in row-major order.
///
/// Each child is searched with a full window, so values are comparable
/// across moves (the pruned root search only guarantees the best one).
pub fn evaluate_moves(board: &Board, player: Player, depth: u32) -> Vec<(Position, i32)> {
    if board.is_terminal() {
        return Vec::new();
    }

    let mut searcher = AlphaBeta::new();
    board
        .legal_moves()
        .into_iter()
        .filter_map(|pos| {
            let child = board.apply_move(pos, player).ok()?;
            let value = searcher
                .search(
                    &child,
                    depth.saturating_sub(1),
                    !player.is_maximizing(),
                    -INFINITY,
                    INFINITY,
                )
                .value;
            Some((pos, value))
        })
        .collect()
}

/// The game that follows when both sides keep playing [`best_move`],
/// starting with `player`.
///
/// # Errors
///
/// Propagates [`best_move`] errors other than reaching the end of the game.
pub fn principal_variation(board: &Board, player: Player, depth: u32) -> Result<Vec<Move>> {
    let mut line = Vec::new();
    let mut current = *board;
    let mut side = player;

    while !current.is_terminal() {
        let result = best_move(&current, side, depth)?;
        let Some(position) = result.best_move else {
            break;
        };
        current = current.apply_move(position, side)?;
        line.push(Move {
            position,
            player: side,
        });
        side = side.opponent();
    }

    Ok(line)
}
