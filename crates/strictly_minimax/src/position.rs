//! Board positions, the moves of tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the nine cells of the board, in row-major order.
///
/// A move is fully described by the cell it fills, so the engine
/// uses `Position` directly as its move type (see [`Move`]). Rows and
/// columns are numbered 0-2 from the top-left corner; coordinates
/// outside that range cannot be represented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

/// A move is the position a mark is placed on.
pub type Move = Position;

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display and for parsing human input.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates a position from `(row, col)` coordinates.
    ///
    /// Returns `None` when either coordinate is outside 0-2.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row > 2 || col > 2 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Parses a 1-based cell number (1-9) or an exact label, case-insensitive.
    ///
    /// Labels accept spaces or underscores in place of the hyphen, so
    /// "top left" and "TOP_LEFT" both resolve to [`Position::TopLeft`].
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        Position::iter().find(|pos| pos.label().to_lowercase() == wanted)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
