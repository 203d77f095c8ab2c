//! Application-level configuration.
//!
//! ```
//! use noughts::app::GameConfig;
//! use noughts::tictactoe::Player;
//!
//! let config = GameConfig::new().with_human(Player::O).with_depth(9);
//! config.validate()?;
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;

pub use config::GameConfig;
