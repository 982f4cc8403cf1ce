//! First-class invariants for the game controller.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are testable independently and serve as documentation of
//! the engine's guarantees; the controller checks them in debug builds.

use crate::game::Game;
use crate::types::{GameStatus, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariant: mark counts stay balanced.
///
/// X moves first and turns alternate, so on every reachable board the
/// number of X marks equals the number of O marks or exceeds it by
/// exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X-count equals O-count or exceeds it by exactly one"
    }
}

/// Invariant: players alternate turns.
///
/// The move history must read X, O, X, O, ... and while the game is in
/// progress the player to move must match the history's parity.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if *game.status() == GameStatus::InProgress {
            let expected = if history.len() % 2 == 0 {
                Player::X
            } else {
                Player::O
            };
            return game.current_player() == expected;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Checks every engine invariant against the given game.
///
/// Returns `Ok(())` if all hold, or the list of violations.
pub fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = Vec::new();

    if !MarkBalanceInvariant::holds(game) {
        violations.push(InvariantViolation::new(MarkBalanceInvariant::description()));
    }
    if !AlternatingTurnInvariant::holds(game) {
        violations.push(InvariantViolation::new(
            AlternatingTurnInvariant::description(),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
