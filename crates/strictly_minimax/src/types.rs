//! Core domain types for tic-tac-toe.

use crate::error::BoardError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Mark {
    /// Returns the opponent mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// Alias for clarity where a board cell is meant.
pub type Cell = Square;

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(mark) => mark.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transition builds a new board, so a
/// board handed to the engine is never modified behind the caller's back.
///
/// The engine assumes X moved first and turns alternated, i.e. the
/// X count equals the O count or exceeds it by one. [`Board::from_rows`]
/// trusts its input; parsing with [`str::parse`] checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from three rows of squares, top to bottom.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            squares[r * 3..r * 3 + 3].copy_from_slice(row);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `square`.
    ///
    /// No legality checks; see [`crate::apply_move`] for the checked transition.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Nine-character row-major form using `X`, `O` and `.`.
    pub fn compact(&self) -> String {
        self.squares.iter().map(|s| s.symbol()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.chunks(3).enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            write!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses nine cell symbols in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `-` and `_` are empty squares.
    /// Whitespace and the `|`, `/` separators are skipped, so both
    /// `"XX.OO...."` and `"XX./OO./..."` describe the same board. The result
    /// must satisfy [`BoardInvariants`].
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for symbol in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' | '_' => Square::Empty,
                other => return Err(BoardError::Symbol { symbol: other }),
            };
            squares.push(square);
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|found: Vec<Square>| BoardError::Length { found: found.len() })?;
        let board = Board { squares };

        BoardInvariants::check_all(&board).map_err(|violations| BoardError::Invariant {
            violations: violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        })?;

        Ok(board)
    }
}

/// Result of a board, derived purely from its squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
