//! Adversarial search over tic-tac-toe positions
//!
//! - [`search`]: minimax with alpha-beta pruning, the engine behind every
//!   machine move
//! - [`minimax`]: the same search without pruning, used to check the first
//! - [`best_move`], [`evaluate_moves`], [`principal_variation`]: helpers for
//!   callers that want errors instead of sentinels
//! - [`compare_with_minimax`]: checks that pruning never changes a result

pub mod alpha_beta;
pub mod minimax;
pub mod policy;
pub mod result;
pub mod verify;

pub use alpha_beta::{AlphaBeta, search};
pub use minimax::minimax;
pub use policy::{best_move, evaluate_moves, principal_variation};
pub use result::{FULL_DEPTH, INFINITY, SearchResult, SearchStats};
pub use verify::{EquivalenceReport, Mismatch, compare_with_minimax};
