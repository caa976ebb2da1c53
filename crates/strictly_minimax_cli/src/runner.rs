//! Game loop between two players.

use crate::players::Player;
use anyhow::Result;
use std::io::Write;
use strictly_minimax::{Board, Mark, Outcome, apply_move, current_player, initial_state, outcome};
use tracing::{debug, info, instrument};

/// Runs one game from the empty board, alternating between two players.
pub struct MatchRunner {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl MatchRunner {
    /// Creates a runner with X and O seated.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: initial_state(),
            player_x,
            player_o,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn seat(&mut self, mark: Mark) -> &mut dyn Player {
        match mark {
            Mark::X => self.player_x.as_mut(),
            Mark::O => self.player_o.as_mut(),
        }
    }

    /// Plays until the board is terminal, writing each ply to `out`.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move, picks an occupied square,
    /// or `out` cannot be written.
    #[instrument(skip_all)]
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        info!("Starting game");
        writeln!(out, "{}\n", self.board)?;

        loop {
            let status = outcome(&self.board);
            if status.is_over() {
                match status.winner() {
                    Some(mark) => {
                        let name = self.seat(mark).name().to_string();
                        writeln!(out, "{} ({}) wins!", name, mark)?;
                    }
                    None => writeln!(out, "Draw.")?,
                }
                info!(%status, "Game over");
                return Ok(status);
            }

            let mark = current_player(&self.board);
            let board = self.board;
            let player = self.seat(mark);
            debug!(player = %player.name(), %mark, "Waiting for move");
            let pos = player.get_move(&board)?;
            let name = player.name().to_string();

            self.board = apply_move(&board, pos)?;
            writeln!(out, "{} ({}) plays {}", name, mark, pos)?;
            writeln!(out, "{}\n", self.board)?;
        }
    }
}
