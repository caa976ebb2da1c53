//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_minimax::Mark;

/// Strictly Minimax - perfect tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Perfect tic-tac-toe play by exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move and its value for a board
    Best {
        /// Board as nine cells in row-major order, e.g. "XX.OO...." or "XX./OO./..."
        #[arg(short, long)]
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine in the terminal
    Play {
        /// Path to a TOML play configuration
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Side the human plays (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<Side>,

        /// Show the engine's suggestion before each human move
        #[arg(long)]
        hints: bool,
    },

    /// Let the engine play both sides
    Selfplay,
}

/// A side as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// Play X (moves first)
    X,
    /// Play O
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}
