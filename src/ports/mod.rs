//! Ports (trait boundaries) between the game core and whatever picks moves.

pub mod agent;

pub use agent::Agent;
