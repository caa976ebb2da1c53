//! Player backed by the minimax search.

use super::Player;
use anyhow::Result;
use strictly_minimax::{Board, Position, search};
use tracing::{debug, instrument};

/// Plays the move the exhaustive search picks.
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for EnginePlayer {
    #[instrument(skip(self, board), fields(engine = %self.name, board = %board.compact()))]
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let result = search(board);
        debug!(best_move = ?result.best_move, value = result.value, "Engine chose move");
        result
            .best_move
            .ok_or_else(|| anyhow::anyhow!("No move available on a finished board"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
