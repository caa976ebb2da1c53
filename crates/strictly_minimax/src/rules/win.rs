//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns true if `mark` has three in a row on any line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let owned = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == owned))
}

/// Returns the winner of the board, if there is exactly one.
///
/// A board on which both marks own a line cannot come from legal play;
/// it reports no winner rather than picking one.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    match (has_line(board, Mark::X), has_line(board, Mark::O)) {
        (true, false) => Some(Mark::X),
        (false, true) => Some(Mark::O),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Mark::X))
            .with(Position::TopCenter, Square::Occupied(Mark::X))
            .with(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::new()
            .with(Position::TopCenter, Square::Occupied(Mark::O))
            .with(Position::Center, Square::Occupied(Mark::O))
            .with(Position::BottomCenter, Square::Occupied(Mark::O));
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with(Position::TopRight, Square::Occupied(Mark::O))
            .with(Position::Center, Square::Occupied(Mark::O))
            .with(Position::BottomLeft, Square::Occupied(Mark::O));
        assert_eq!(winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Mark::X))
            .with(Position::TopCenter, Square::Occupied(Mark::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_both_marks_winning_reports_none() {
        let x = Square::Occupied(Mark::X);
        let o = Square::Occupied(Mark::O);
        let e = Square::Empty;
        let board = Board::from_rows([[x, x, x], [o, o, o], [e, e, e]]);
        assert!(has_line(&board, Mark::X));
        assert!(has_line(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }
}
