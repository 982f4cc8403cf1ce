//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a board according to the rules. Rules
//! are separated from board storage and from the game controller so the
//! minimax search and the tests can call them on arbitrary boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_win, WinningLine};
