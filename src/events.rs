//! State-change events consumed by a presentation layer.

use crate::position::Position;
use crate::rules::WinningLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A state change produced by the game controller.
///
/// The controller returns the events raised by each accepted request in
/// order, so a presentation layer can re-render without polling. In
/// player-vs-computer mode a single request may raise several events:
/// the human's move followed by the engine's reply and any terminal
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed on the board.
    Moved {
        /// The player who moved.
        player: Player,
        /// The cell that was filled.
        position: Position,
    },
    /// The game ended with three in a row.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line, with endpoints for strike-through drawing.
        line: WinningLine,
    },
    /// The game ended with a full board and no winner.
    Drawn,
}
