//! Tic-tac-toe engine with a perfect-play minimax opponent.
//!
//! The crate is the game core behind a presentation layer: it owns the
//! board, validates moves, detects terminal states, and - in
//! player-vs-computer mode - answers O's turns with an exhaustive
//! minimax search. Rendering is out of scope; the engine reports state
//! changes as [`GameEvent`] values and exposes read accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameEvent, Mode};
//!
//! let mut game = Game::with_mode(Mode::PlayerVsComputer);
//! let events = game.play(4)?; // X takes the center
//!
//! // The engine already answered for O.
//! assert_eq!(events.len(), 2);
//! assert!(matches!(events[0], GameEvent::Moved { .. }));
//! assert!(matches!(events[1], GameEvent::Moved { .. }));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod events;
mod game;
pub mod invariants;
pub mod minimax;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use events::GameEvent;
pub use game::Game;
pub use position::Position;
pub use rules::WinningLine;
pub use types::{Board, GameStatus, Mode, Player, Square};
