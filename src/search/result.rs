//! Search outputs

use serde::{Deserialize, Serialize};

use crate::tictactoe::Position;

/// Stands in for an unbounded score. Real scores are always in `-1..=1`.
///
/// `i32::MAX` is used rather than `i32::MIN` on the low side so that
/// `-INFINITY` is representable.
pub const INFINITY: i32 = i32::MAX;

/// Depth that reaches every leaf of a 3x3 game
pub const FULL_DEPTH: u32 = 9;

/// Value of a position from X's point of view and the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub value: i32,
    pub best_move: Option<Position>,
}

impl SearchResult {
    pub fn leaf(value: i32) -> Self {
        Self {
            value,
            best_move: None,
        }
    }
}

/// Counters collected during a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to the recursive search, the root included
    pub nodes: u64,
    /// Times the remaining siblings were skipped because `beta <= alpha`
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}
