//! Draw and end-of-game detection for tic-tac-toe.

use super::win::winner;
use crate::{Board, Outcome, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Returns true once the game is over: someone won or no square is left.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Classifies the board as won, drawn or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(mark) => Outcome::Won(mark),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
