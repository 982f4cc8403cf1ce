//! Draw detection logic.

use super::win::check_win;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a draw: full with no completed line.
///
/// A full board that contains a winning line is a win, not a draw, so
/// the win check comes first.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    check_win(board).is_none() && is_full(board)
}
