//! CLI infrastructure for the noughts binary
//!
//! This module provides the command-line interface for solving positions,
//! playing against the engine, running self-play matches and verifying the
//! search.

pub mod commands;
pub mod output;
