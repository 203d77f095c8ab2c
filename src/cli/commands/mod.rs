//! Subcommands of the `noughts` binary

pub mod play;
pub mod selfplay;
pub mod solve;
pub mod verify;
