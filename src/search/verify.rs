//! Cross-check of the pruned search against plain minimax

use serde::{Deserialize, Serialize};

use super::{
    alpha_beta::AlphaBeta,
    minimax::minimax,
    result::{INFINITY, SearchResult, SearchStats},
};
use crate::tictactoe::{Board, Player};

/// A board where the two searches disagreed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mismatch {
    pub board: Board,
    pub side: Player,
    pub pruned: SearchResult,
    pub unpruned: SearchResult,
}

/// Totals from comparing both searches over a set of boards
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquivalenceReport {
    pub depth: u32,
    pub positions: usize,
    pub pruned: SearchStats,
    pub unpruned: SearchStats,
    pub mismatches: Vec<Mismatch>,
}

impl EquivalenceReport {
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Share of unpruned nodes the pruned search skipped
    pub fn node_savings(&self) -> f64 {
        if self.unpruned.nodes == 0 {
            return 0.0;
        }
        1.0 - self.pruned.nodes as f64 / self.unpruned.nodes as f64
    }
}

/// Run both searches from every non-terminal board in `boards` and record
/// any disagreement in value or chosen move.
///
/// The side to move comes from the piece counts; boards without a
/// consistent side are skipped. `on_position` is called once per board
/// examined, for progress reporting.
pub fn compare_with_minimax<'a>(
    boards: impl IntoIterator<Item = &'a Board>,
    depth: u32,
    mut on_position: impl FnMut(),
) -> EquivalenceReport {
    let mut report = EquivalenceReport {
        depth,
        ..EquivalenceReport::default()
    };

    for board in boards {
        if board.is_terminal() {
            continue;
        }
        let Ok(side) = board.side_to_move() else {
            continue;
        };
        let maximizing = side.is_maximizing();

        let mut searcher = AlphaBeta::new();
        let pruned = searcher.search(board, depth, maximizing, -INFINITY, INFINITY);
        let (unpruned, unpruned_stats) = minimax(board, depth, maximizing);

        report.positions += 1;
        report.pruned.merge(searcher.stats());
        report.unpruned.merge(unpruned_stats);

        if pruned != unpruned {
            report.mismatches.push(Mismatch {
                board: *board,
                side,
                pruned,
                unpruned,
            });
        }
        on_position();
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_comparison_on_a_few_boards() {
        let boards: Vec<Board> = [".........", "X........", "XO.......", "X...O...X"]
            .iter()
            .map(|s| Board::from_string(s).unwrap())
            .collect();

        let mut seen = 0;
        let report = compare_with_minimax(&boards, 3, || seen += 1);
        assert_eq!(report.positions, 4);
        assert_eq!(seen, 4);
        assert!(report.is_consistent());
        assert!(report.pruned.nodes <= report.unpruned.nodes);
    }

    #[test]
    fn terminal_and_inconsistent_boards_are_skipped() {
        let boards: Vec<Board> = ["XXXOO....", "XX......."]
            .iter()
            .map(|s| Board::from_string(s).unwrap())
            .collect();
        let report = compare_with_minimax(&boards, 9, || {});
        assert_eq!(report.positions, 0);
        assert_eq!(report.node_savings(), 0.0);
    }
}
