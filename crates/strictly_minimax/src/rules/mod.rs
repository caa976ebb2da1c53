//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board) values. Nothing here keeps
//! state between calls; every transition returns a fresh board.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_full, is_terminal, outcome};
pub use turn::{apply_move, current_player, initial_state, legal_moves};
pub use win::winner;
