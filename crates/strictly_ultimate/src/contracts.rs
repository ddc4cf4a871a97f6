//! Contract-based validation for ultimate moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::{InvalidMove, InvalidMoveKind, Move};
use crate::invariants::{InvariantSet, UltimateInvariants};
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the macro game is still undecided.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any move once the macro outcome is decided.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), InvalidMove> {
        if state.is_over() {
            Err(InvalidMove::new(InvalidMoveKind::GameOver))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not on turn.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), InvalidMove> {
        if mov.player != state.current_player() {
            Err(InvalidMove::new(InvalidMoveKind::WrongPlayer(mov.player)))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target micro board is undecided.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Rejects moves into won or drawn boards.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), InvalidMove> {
        if state.micro_outcome(mov.micro).is_decided() {
            Err(InvalidMove::new(InvalidMoveKind::BoardDecided(mov.micro)))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move respects the forced board.
pub struct ForcedBoardRespected;

impl ForcedBoardRespected {
    /// Rejects moves outside the forced board while the constraint applies.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), InvalidMove> {
        match state.forced_board() {
            Some(forced) if forced != mov.micro => Err(InvalidMove::new(InvalidMoveKind::WrongBoard {
                forced,
                requested: mov.micro,
            })),
            _ => Ok(()),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto marked cells.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), InvalidMove> {
        if !state.board(mov.micro).is_empty(mov.cell) {
            Err(InvalidMove::new(InvalidMoveKind::CellOccupied {
                micro: mov.micro,
                cell: mov.cell,
            }))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every rule a legal move must satisfy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), InvalidMove> {
        GameInProgress::check(state)?;
        PlayersTurn::check(mov, state)?;
        BoardUndecided::check(mov, state)?;
        ForcedBoardRespected::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - All [`UltimateInvariants`] hold on the new state
/// - No micro or macro outcome regressed or flipped
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), InvalidMove> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), InvalidMove> {
        let mut problems = Vec::new();

        if let Err(violations) = UltimateInvariants::check_all(after) {
            problems.extend(violations.into_iter().map(|v| v.description));
        }

        let micro_monotonic = before
            .micro_outcomes()
            .iter()
            .zip(after.micro_outcomes())
            .all(|(old, new)| old.can_become(*new));
        if !micro_monotonic {
            problems.push("Micro outcomes are monotonic".to_string());
        }
        if !before.macro_outcome().can_become(after.macro_outcome()) {
            problems.push("Macro outcome is monotonic".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            warn!(?problems, "Move postcondition failed");
            Err(InvalidMove::new(InvalidMoveKind::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            ))))
        }
    }
}
