//! Perfect-play move selection for the computer player.
//!
//! Exhaustive minimax over the full game tree, no pruning or depth
//! limiting: with at most nine plies the whole tree is small enough to
//! search on every turn. The search never mutates its input - each
//! candidate is scored on a copied board, so evaluation is free of side
//! effects on the controller's state.

use crate::position::Position;
use crate::rules::{check_win, is_full};
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Returns the best cell for O on the given board.
///
/// Scans empty cells in index order and keeps the first strictly better
/// score, so ties between equally good moves always go to the lowest
/// index. All wins score alike regardless of distance; the engine does
/// not prefer a faster win over a slower one.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Option<Position> {
    let mut best_score = i32::MIN;
    let mut best = None;

    for pos in Position::iter() {
        if !board.is_empty(pos) {
            continue;
        }
        let mut child = *board;
        child.set(pos, Square::Occupied(Player::O));
        let score = score(&child, 1, false);
        trace!(position = %pos, score, "scored candidate");
        if score > best_score {
            best_score = score;
            best = Some(pos);
        }
    }

    best
}

/// Scores a position for O, the maximizing player.
///
/// Terminal scores are from O's perspective: +1 when the mover who just
/// completed a line was O, -1 when it was X, 0 for a full board. Since
/// the mover alternates with `maximizing`, a completed line seen while
/// maximizing means X just won. `depth` is carried for trace output
/// only; it never shifts the score.
fn score(board: &Board, depth: u32, maximizing: bool) -> i32 {
    if check_win(board).is_some() {
        let value = if maximizing { -1 } else { 1 };
        trace!(depth, value, "terminal: completed line");
        return value;
    }
    if is_full(board) {
        trace!(depth, "terminal: draw");
        return 0;
    }

    let mark = if maximizing { Player::O } else { Player::X };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::iter() {
        if !board.is_empty(pos) {
            continue;
        }
        let mut child = *board;
        child.set(pos, Square::Occupied(mark));
        let value = score(&child, depth + 1, !maximizing);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
