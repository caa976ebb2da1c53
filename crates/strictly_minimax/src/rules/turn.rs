//! Turn order, move generation and move application.

use crate::error::InvalidMove;
use crate::{Board, Mark, Position, Square};
use tracing::{instrument, trace};

/// Returns the starting board: every square empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark whose turn it is.
///
/// X moves first, so X is to move whenever the X and O counts have the
/// same parity (an even number of squares is filled), and O otherwise.
/// The answer assumes alternating play and is given even for full or won
/// boards, where it has no meaning.
pub fn current_player(board: &Board) -> Mark {
    if board.occupied_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty position in row-major order.
///
/// The order is fixed so that searches are reproducible, but callers
/// should treat the result as a set.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::ALL
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Places the current player's mark at `pos`, returning the new board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidMove`] if the square at `pos` is already occupied.
#[instrument(level = "trace", skip(board), fields(board = %board.compact()))]
pub fn apply_move(board: &Board, pos: Position) -> Result<Board, InvalidMove> {
    if !board.is_empty(pos) {
        trace!(%pos, "Rejected move onto occupied square");
        return Err(InvalidMove { position: pos });
    }

    let mark = current_player(board);
    Ok(board.with(pos, Square::Occupied(mark)))
}
