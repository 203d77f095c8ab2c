//! Enumeration of the positions reachable by legal play

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Every distinct board reachable from the empty board when X moves first
/// and play stops at terminal boards. The empty board is included.
///
/// Boards are returned in breadth-first order, so boards with fewer pieces
/// come first and the order is stable between runs.
pub fn reachable_positions() -> Vec<Board> {
    let root = Board::empty();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut positions = Vec::new();

    while let Some(board) = queue.pop_front() {
        positions.push(board);

        if board.is_terminal() {
            continue;
        }
        let Ok(player) = board.side_to_move() else {
            continue;
        };

        for pos in board.legal_moves() {
            let Ok(next) = board.apply_move(pos, player) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    positions
}

/// Render a board as `"XO. / .X. / ..O"` on a single line
pub fn format_board(board: &Board) -> String {
    board
        .cells()
        .iter()
        .map(|row| row.iter().map(|c| c.to_char()).collect::<String>())
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_counts_match_known_totals() {
        let positions = reachable_positions();
        assert_eq!(positions.len(), 5478);
        assert_eq!(positions.iter().filter(|b| b.is_terminal()).count(), 958);
        assert!(positions.iter().all(Board::is_valid));
    }

    #[test]
    fn format_board_single_line() {
        let board = Board::from_string("XO..X...O").unwrap();
        assert_eq!(format_board(&board), "XO. / .X. / ..O");
    }
}
