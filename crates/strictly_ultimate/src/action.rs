//! First-class move and error types.
//!
//! Moves are domain events, not side effects. They are recorded in the game
//! history and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player marking a cell inside a micro board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The micro board played in.
    pub micro: Position,
    /// The cell inside that micro board.
    pub cell: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> board {} cell {}",
            self.player,
            self.micro.to_index() + 1,
            self.cell.to_index() + 1
        )
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InvalidMoveKind {
    /// The macro game is already decided.
    #[display("Game is already over")]
    GameOver,

    /// A board or cell index was not in 0-8.
    #[display("Board {} / cell {} is out of bounds (must be 0-8)", micro, cell)]
    OutOfBounds {
        /// Requested micro board index.
        micro: usize,
        /// Requested cell index.
        cell: usize,
    },

    /// The target micro board already has an outcome.
    #[display("Board {:?} is already decided", _0)]
    BoardDecided(Position),

    /// The target cell is already marked.
    #[display("Cell {:?} of board {:?} is already occupied", cell, micro)]
    CellOccupied {
        /// Micro board.
        micro: Position,
        /// Cell inside the micro board.
        cell: Position,
    },

    /// The move belongs to the player not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The constraint forces play in a different board.
    #[display("Must play in board {:?}, not {:?}", forced, requested)]
    WrongBoard {
        /// Board the current player is forced into.
        forced: Position,
        /// Board the move targeted.
        requested: Position,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

/// Error returned when a move is not legal in the current state.
///
/// The state is never mutated when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move: {} at {}:{}", kind, file, line)]
pub struct InvalidMove {
    /// Reason the move was rejected.
    pub kind: InvalidMoveKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl InvalidMove {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidMoveKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the rejection reason.
    pub fn kind(&self) -> &InvalidMoveKind {
        &self.kind
    }
}
