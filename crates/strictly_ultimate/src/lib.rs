//! Strictly Ultimate - type-safe ultimate tic-tac-toe rules
//!
//! The board is a 3x3 grid of 3x3 micro boards. Winning a micro board claims
//! its square on the macro grid, and the cell you play in decides which micro
//! board your opponent must play in next.
//!
//! # Architecture
//!
//! - **Engine**: [`UltimateBoardEngine`] owns the [`GameState`] and applies moves
//! - **Rules**: line and fill checks shared by micro boards and the macro grid
//! - **Contracts**: move preconditions and postconditions
//! - **Invariants**: properties every reachable state satisfies
//! - **Snapshot**: read-only projection for renderers
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{Position, UltimateBoardEngine};
//!
//! let mut engine = UltimateBoardEngine::new(true);
//! let result = engine.apply_move(0, 4)?;
//! assert_eq!(*result.forced_board(), Some(Position::Center));
//! assert!(!engine.legal_move(0, 0));
//! # Ok::<(), strictly_ultimate::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod engine;
mod position;
mod score;
mod snapshot;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use action::{InvalidMove, InvalidMoveKind, Move};
pub use board::MicroBoard;
pub use position::{LINES, Position, WinLine};
pub use types::{Mark, Outcome, Player};

// Crate-level exports - Engine
pub use engine::UltimateBoardEngine;
pub use snapshot::{MoveResult, Snapshot};
pub use state::GameState;

// Crate-level exports - Presentation support
pub use score::Scoreboard;
