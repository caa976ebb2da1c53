//! Utility of finished boards.

use crate::rules::winner;
use crate::{Board, Mark};

/// Utility of a board X wins.
pub const X_WINS: i32 = 1;
/// Utility of a board O wins.
pub const O_WINS: i32 = -1;
/// Utility of a drawn board.
pub const DRAW: i32 = 0;

/// Scores a board from X's point of view: 1 if X won, -1 if O won, else 0.
///
/// Only meaningful on terminal boards; an unfinished board without a
/// winner scores like a draw.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => X_WINS,
        Some(Mark::O) => O_WINS,
        None => DRAW,
    }
}
