//! Game controller: owns the board and drives the move pipeline.

use crate::action::{Move, MoveError};
use crate::events::GameEvent;
use crate::minimax;
use crate::position::Position;
use crate::rules::{check_win, is_full};
use crate::types::{Board, GameStatus, Mode, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game controller.
///
/// All state lives in this one value: board, player to move, status,
/// mode, and move history. Requests enter through [`Game::play`] (raw
/// cell index) or [`Game::place`] (typed position); each accepted move
/// runs the same pipeline - write the mark, check win then draw, toggle
/// the turn, and in player-vs-computer mode answer O's turn with the
/// minimax engine through that same pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    mode: Mode,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new player-vs-player game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(Mode::PlayerVsPlayer)
    }

    /// Creates a new game in the given mode with X to move.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Requests a move at the given cell index (0-8).
    ///
    /// The raw-index edge for presentation layers. An occupied cell or a
    /// finished game is ignored and returns no events; see [`Game::place`].
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] when the index is not a board
    /// cell. The game state is untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<Vec<GameEvent>, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        Ok(self.place(pos))
    }

    /// Requests a move at the given position.
    ///
    /// Guarded no-ops, not errors: a request for an occupied cell or
    /// against a finished game returns an empty event list and mutates
    /// nothing. An accepted move returns the events it raised, in order;
    /// in player-vs-computer mode these include the engine's reply.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if self.status != GameStatus::InProgress {
            debug!("ignoring move: game is over");
            return events;
        }
        if !self.board.is_empty(pos) {
            debug!("ignoring move: square occupied");
            return events;
        }

        self.apply(pos, &mut events);

        if self.status == GameStatus::InProgress
            && self.mode == Mode::PlayerVsComputer
            && self.to_move == Player::O
            && let Some(reply) = minimax::best_move(&self.board)
        {
            debug!(reply = %reply, "engine reply");
            self.apply(reply, &mut events);
        }

        events
    }

    /// Applies a validated move and runs the terminal checks.
    ///
    /// Win is checked before draw: a full board containing a completed
    /// line is a win. The turn toggles only when the game continues.
    fn apply(&mut self, pos: Position, events: &mut Vec<GameEvent>) {
        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));
        events.push(GameEvent::Moved {
            player,
            position: pos,
        });

        if let Some(line) = check_win(&self.board) {
            self.status = GameStatus::Won(line.player());
            events.push(GameEvent::Won {
                winner: line.player(),
                line,
            });
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
            events.push(GameEvent::Drawn);
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            crate::invariants::check_all(self).is_ok(),
            "engine invariant violated after move"
        );
    }

    /// Resets to the initial state: empty board, X to move, in progress.
    ///
    /// The mode is retained. Idempotent.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Switches the mode and performs an implicit full reset.
    ///
    /// The reset is unconditional, matching a mode selector that resets
    /// on every change notification - even one that re-selects the
    /// current mode.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
