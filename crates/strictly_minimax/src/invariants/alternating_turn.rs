//! Alternating turn invariant: X moves first, then players alternate.

use super::Invariant;
use crate::{Board, Mark};

/// Invariant: mark counts are consistent with alternating play.
///
/// X moves first, so X has either as many marks as O or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Mark::X);
        let o_count = board.count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X moves first and players alternate (X count equals O count or exceeds it by one)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_empty_board_holds() {
        assert!(AlternatingTurnInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_x_one_ahead_holds() {
        let board = Board::new().with(Position::Center, Square::Occupied(Mark::X));
        assert!(AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_o_first_violates() {
        let board = Board::new().with(Position::Center, Square::Occupied(Mark::O));
        assert!(!AlternatingTurnInvariant::holds(&board));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let board = Board::new()
            .with(Position::Center, Square::Occupied(Mark::X))
            .with(Position::TopLeft, Square::Occupied(Mark::X));
        assert!(!AlternatingTurnInvariant::holds(&board));
    }
}
