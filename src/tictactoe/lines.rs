//! Winning line analysis for Tic-Tac-Toe

use super::{Board, Player, Position};

const fn p(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// The eight lines of the board, in the order they are checked: row `i`
/// then column `i` for each index, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    [p(0, 0), p(0, 1), p(0, 2)],
    [p(0, 0), p(1, 0), p(2, 0)],
    [p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1)],
    [p(2, 0), p(2, 1), p(2, 2)],
    [p(0, 2), p(1, 2), p(2, 2)],
    [p(0, 0), p(1, 1), p(2, 2)],
    [p(0, 2), p(1, 1), p(2, 0)],
];

/// Sum of the cell values along a line (X = +1, O = -1)
pub fn line_sum(board: &Board, line: &[Position; 3]) -> i32 {
    line.iter()
        .map(|&pos| board.get(pos).map_or(0, |cell| cell.value()))
        .sum()
}

/// First line whose three cells belong to the same player.
///
/// A line is complete exactly when `|sum| == 3`; mixed lines such as
/// `X X O` sum to 1 and are skipped.
pub fn completed_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .iter()
        .copied()
        .find(|line| line_sum(board, line).abs() == 3)
}

/// Every line `player` has completed
pub fn completed_lines(board: &Board, player: Player) -> Vec<[Position; 3]> {
    let target = 3 * player.value();
    LINES
        .iter()
        .copied()
        .filter(|line| line_sum(board, line) == target)
        .collect()
}

/// Empty cells that would complete a line for `player` immediately,
/// in row-major order without duplicates.
pub fn winning_moves(board: &Board, player: Player) -> Vec<Position> {
    board
        .legal_moves()
        .into_iter()
        .filter(|&pos| {
            LINES.iter().any(|line| {
                line.contains(&pos) && line_sum(board, line) == 2 * player.value()
            })
        })
        .collect()
}
