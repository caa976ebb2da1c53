//! Strictly Minimax - perfect tic-tac-toe play by exhaustive search
//!
//! Boards are immutable values; the rules are pure functions over them,
//! and the search walks the complete game tree below a board to find the
//! move that guarantees the best reachable outcome.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Position, apply_move, initial_state, is_terminal, minimax};
//!
//! let mut board = initial_state();
//! assert_eq!(minimax(&board), Some(Position::Center));
//!
//! while let Some(mv) = minimax(&board) {
//!     board = apply_move(&board, mv)?;
//! }
//! assert!(is_terminal(&board));
//! # Ok::<(), strictly_minimax::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod evaluator;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::{BoardError, InvalidMove};
pub use evaluator::{DRAW, O_WINS, X_WINS, utility};
pub use position::{Move, Position};
pub use rules::{
    apply_move, current_player, initial_state, is_full, is_terminal, legal_moves, outcome, winner,
};
pub use search::{SearchResult, max_value, min_value, minimax, search};
pub use types::{Board, Cell, Mark, Outcome, Square};
