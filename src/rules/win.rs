//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in fixed declaration order: rows, then columns,
/// then diagonals. `check_win` scans them in this order, so the line it
/// reports is stable for any board, including unreachable ones that
/// contain several complete lines at once.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed three-in-a-row.
///
/// Carries the winner and the line's cells so a presentation layer can
/// draw its strike-through between the two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    player: Player,
    positions: [Position; 3],
}

impl WinningLine {
    /// Returns the player who completed the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the three cells of the line in board order.
    pub fn positions(&self) -> [Position; 3] {
        self.positions
    }

    /// Returns the first and last cell of the line.
    pub fn endpoints(&self) -> (Position, Position) {
        (self.positions[0], self.positions[2])
    }
}

/// Checks if there is a completed line on the board.
///
/// Returns the first winning line in `LINES` order, or `None` if no
/// line is complete.
#[instrument]
pub fn check_win(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some(WinningLine {
                    player,
                    positions: line,
                });
            }
        }
    }

    None
}
