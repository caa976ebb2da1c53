//! Exhaustive minimax search.
//!
//! X maximizes the utility and O minimizes it. [`max_value`] and
//! [`min_value`] recurse into each other until every line of play reaches
//! a terminal board. Each ply fills one square, so the recursion is at
//! most nine deep and never revisits a board along a path; no depth limit
//! or pruning is needed.

use crate::evaluator::{DRAW, utility};
use crate::rules::{current_player, initial_state, is_terminal, legal_moves};
use crate::{Board, Mark, Position, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Game-theoretic value of the empty board: perfect play draws.
const OPENING_VALUE: i32 = DRAW;

/// Best move for the side to move and the value it guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SearchResult {
    /// Move to play, absent when the board is already terminal.
    pub best_move: Option<Position>,
    /// Utility reached under optimal play by both sides (-1, 0 or 1).
    pub value: i32,
}

/// Every board reachable in one ply, paired with the move that reaches it.
fn children(board: &Board) -> impl Iterator<Item = (Position, Board)> + '_ {
    let mark = Square::Occupied(current_player(board));
    legal_moves(board)
        .into_iter()
        .map(move |pos| (pos, board.with(pos, mark)))
}

/// Value of `board` when X is to move and both sides play perfectly.
pub fn max_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    children(board)
        .map(|(_, child)| min_value(&child))
        .max()
        .unwrap_or_else(|| utility(board))
}

/// Value of `board` when O is to move and both sides play perfectly.
pub fn min_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    children(board)
        .map(|(_, child)| max_value(&child))
        .min()
        .unwrap_or_else(|| utility(board))
}

/// Searches the full game tree below `board` for the side to move.
///
/// Moves are tried in row-major order and a later move replaces the
/// current best only if it is strictly better, so ties go to the first
/// square. The empty board is answered with the center square without
/// searching.
///
/// Assumes `board` came from alternating play; for other boards the
/// result is unspecified but the search still terminates.
#[instrument(level = "debug", skip(board), fields(board = %board.compact()))]
pub fn search(board: &Board) -> SearchResult {
    if is_terminal(board) {
        debug!("Board is terminal, no move to make");
        return SearchResult::new(None, utility(board));
    }

    if *board == initial_state() {
        debug!("Empty board, playing the center");
        return SearchResult::new(Some(Position::Center), OPENING_VALUE);
    }

    let to_move = current_player(board);
    let mut best: Option<SearchResult> = None;

    for (pos, child) in children(board) {
        let value = match to_move {
            Mark::X => min_value(&child),
            Mark::O => max_value(&child),
        };
        trace!(%pos, value, "Evaluated move");

        let improves = best.is_none_or(|b| match to_move {
            Mark::X => value > b.value,
            Mark::O => value < b.value,
        });
        if improves {
            best = Some(SearchResult::new(Some(pos), value));
        }
    }

    let result = best.unwrap_or_else(|| SearchResult::new(None, utility(board)));
    debug!(player = %to_move, best_move = ?result.best_move, value = result.value, "Search complete");
    result
}

/// Returns the optimal move for the side to move, or `None` on a terminal board.
pub fn minimax(board: &Board) -> Option<Position> {
    search(board).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;

    #[test]
    fn test_opening_is_center() {
        assert_eq!(minimax(&initial_state()), Some(Position::Center));
        assert_eq!(search(&initial_state()).value, OPENING_VALUE);
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(search(&board), SearchResult::new(None, 1));
    }

    #[test]
    fn test_x_completes_row() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let result = search(&board);
        assert_eq!(result.best_move, Position::from_coords(0, 2));
        assert_eq!(result.value, 1);
        assert_eq!(max_value(&board), 1);
    }

    #[test]
    fn test_o_completes_row() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        let result = search(&board);
        assert_eq!(result.best_move, Some(Position::MiddleRight));
        assert_eq!(result.value, -1);
        assert_eq!(min_value(&board), -1);
    }

    #[test]
    fn test_o_blocks_immediate_threat() {
        // X threatens the top row; O must take the top-right corner.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(minimax(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_ties_go_to_first_square() {
        // Against a center opening every corner draws and every edge loses.
        let board = apply_move(&initial_state(), Position::Center).unwrap();
        let result = search(&board);
        assert_eq!(result.value, 0);
        assert_eq!(result.best_move, Some(Position::TopLeft));
    }

    #[test]
    fn test_value_matches_max_min() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let result = search(&board);
        assert_eq!(result.value, min_value(&board));
        let child = apply_move(&board, result.best_move.unwrap()).unwrap();
        assert_eq!(max_value(&child), result.value);
    }
}
