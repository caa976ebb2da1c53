//! Human player reading moves from a line-oriented input.

use super::Player;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_minimax::{Board, Position, legal_moves, minimax};
use tracing::{debug, instrument};

/// Human player typing square numbers (1-9) or labels such as "center".
///
/// Input and prompts are generic so games can be scripted in tests.
pub struct HumanPlayer<R, W> {
    name: String,
    hints: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, hints: bool, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            hints,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(player = %self.name))]
    fn get_move(&mut self, board: &Board) -> Result<Position> {
        let open = legal_moves(board);
        if self.hints
            && let Some(hint) = minimax(board)
        {
            writeln!(self.output, "Hint: {} ({})", hint, hint.to_index() + 1)?;
        }

        loop {
            write!(self.output, "{}, your move [1-9]: ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match Position::from_label_or_number(&line) {
                Some(pos) if open.contains(&pos) => {
                    debug!(%pos, "Human chose position");
                    return Ok(pos);
                }
                Some(pos) => writeln!(self.output, "{} is already taken.", pos)?,
                None => writeln!(self.output, "Unrecognized square {:?}.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
