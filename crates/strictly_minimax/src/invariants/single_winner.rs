//! Single winner invariant: the game stops at the first completed line.

use super::Invariant;
use crate::rules::win::has_line;
use crate::{Board, Mark};

/// Invariant: at most one mark owns a winning line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_line(board, Mark::X) && has_line(board, Mark::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
