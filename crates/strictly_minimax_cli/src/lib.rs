//! Terminal driver for the strictly_minimax engine.
//!
//! Seats human and engine players around a board and runs games to the
//! end. The binary in `main.rs` wires these pieces to the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod players;
mod runner;

pub use cli::{Cli, Command, Side};
pub use config::{ConfigError, PlayConfig};
pub use players::{EnginePlayer, HumanPlayer, Player};
pub use runner::MatchRunner;
