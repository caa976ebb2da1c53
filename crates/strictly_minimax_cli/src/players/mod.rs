//! Player trait and implementations.

mod engine;
mod human;

pub use engine::EnginePlayer;
pub use human::HumanPlayer;

use anyhow::Result;
use strictly_minimax::{Board, Position};

/// Anything that can choose a move for the side to move.
pub trait Player {
    /// Chooses a move on `board`, which is not terminal.
    fn get_move(&mut self, board: &Board) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
