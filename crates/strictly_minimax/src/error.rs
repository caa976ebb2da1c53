//! Error types for the tic-tac-toe engine.

use crate::position::Position;
use derive_more::{Display, Error};

/// Attempted to place a mark on an occupied square.
///
/// This is the only error the engine itself produces. Callers that pick
/// moves from [`crate::legal_moves`] never see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid move: square {} is already occupied", position)]
pub struct InvalidMove {
    /// The occupied position.
    pub position: Position,
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Wrong number of cell symbols.
    #[display("Board needs 9 cells, found {}", found)]
    Length {
        /// Number of cells read.
        found: usize,
    },

    /// A character that is not a mark or an empty-cell symbol.
    #[display("Unexpected board symbol {:?}", symbol)]
    Symbol {
        /// The offending character.
        symbol: char,
    },

    /// The board could not arise from alternating play.
    #[display("Unreachable board: {}", violations)]
    Invariant {
        /// Descriptions of the violated invariants.
        violations: String,
    },
}
