//! Match pipeline: agent implementations and the loop that plays them
//!
//! - [`OptimalAgent`]: plays the alpha-beta search result
//! - [`RandomAgent`]: uniform over legal moves, seeded for reproducibility
//! - [`play_match`] / [`play_series`]: alternate two agents until the game ends

pub mod agents;
pub mod arena;

pub use agents::{AgentKind, OptimalAgent, RandomAgent};
pub use arena::{MatchRecord, SeriesSummary, play_match, play_series};

pub use crate::ports::Agent;
