//! First-class action types.
//!
//! Moves are domain events, not side effects. They can be serialized
//! for replay, logged for debugging, and inspected by invariants.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error returned for malformed move requests.
///
/// An occupied square or a finished game is not an error: those requests
/// are ignored without touching the board. Only an index outside the
/// board is a caller mistake worth reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested cell index is not on the board.
    #[display("index {_0} is out of range (valid cells are 0-8)")]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
