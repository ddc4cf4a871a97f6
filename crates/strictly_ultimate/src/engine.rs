//! Rule engine for ultimate tic-tac-toe.
//!
//! [`UltimateBoardEngine`] owns the [`GameState`] and is the only thing that
//! mutates it. A move is processed in a fixed order: mark the cell, decide
//! the micro board, decide the macro grid, then (if the game goes on)
//! compute the next forced board and hand the turn over.

use crate::action::{InvalidMove, Move};
use crate::contracts::{Contract, MoveContract};
use crate::position::Position;
use crate::rules::{self, winning_line};
use crate::snapshot::{MoveResult, Snapshot};
use crate::state::GameState;
use crate::types::{Mark, Outcome};
use tracing::{debug, info, instrument, warn};

/// Ultimate tic-tac-toe engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UltimateBoardEngine {
    state: GameState,
}

impl UltimateBoardEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new(constraint_enabled: bool) -> Self {
        Self {
            state: GameState::new(constraint_enabled),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true iff the current player may mark `cell` of board `micro`.
    #[instrument(skip(self))]
    pub fn legal_move(&self, micro: usize, cell: usize) -> bool {
        self.state.legal_move(micro, cell)
    }

    /// Applies a move for the current player.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the move is not legal; the state is left
    /// untouched. Finishing the game is not an error: check
    /// [`MoveResult::ended_game`] or [`status`](Self::status).
    #[instrument(skip(self), fields(player = ?self.state.current_player))]
    pub fn apply_move(&mut self, micro: usize, cell: usize) -> Result<MoveResult, InvalidMove> {
        let mov = match self.state.check_move(micro, cell) {
            Ok(mov) => mov,
            Err(err) => {
                warn!(micro, cell, error = %err.kind, "Rejected move");
                return Err(err);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let result = self.play(mov);

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, &self.state) {
            self.state = before;
            return Err(err);
        }

        Ok(result)
    }

    /// Applies a pre-validated move.
    fn play(&mut self, mov: Move) -> MoveResult {
        let player = mov.player;
        let micro = mov.micro.to_index();
        let state = &mut self.state;

        state.boards[micro].set(mov.cell, Mark::Occupied(player));
        state.history.push(mov);
        debug!(%mov, "Mark placed");

        // Micro before macro: the macro check reads the updated micro outcome.
        let board = &state.boards[micro];
        let micro_outcome = if winning_line(board.cells(), player).is_some() {
            Some(Outcome::WonBy(player))
        } else if board.is_full() {
            Some(Outcome::Drawn)
        } else {
            None
        };

        let mut macro_outcome = None;
        if let Some(outcome) = micro_outcome {
            state.micro_outcomes[micro] = outcome;
            info!(board = micro + 1, %outcome, "Micro board decided");

            // The macro grid can only change when a micro board does.
            if let Some(line) = winning_line(&state.micro_outcomes, player) {
                state.macro_outcome = Outcome::WonBy(player);
                state.winning_line = Some(line);
                macro_outcome = Some(state.macro_outcome);
            } else if rules::is_full(&state.micro_outcomes) {
                state.macro_outcome = Outcome::Drawn;
                macro_outcome = Some(state.macro_outcome);
            }
        }

        if let Some(outcome) = macro_outcome {
            state.forced_board = None;
            info!(%outcome, line = ?state.winning_line, moves = state.history.len(), "Game over");
        } else {
            let forced = Self::next_forced_board(state, mov.cell);
            state.forced_board = forced;
            state.current_player = player.opponent();
        }

        MoveResult::new(
            mov,
            micro_outcome,
            macro_outcome,
            state.winning_line,
            state.forced_board(),
            state.current_player,
        )
    }

    /// The cell just played names the next board, unless that board is closed.
    fn next_forced_board(state: &GameState, cell: Position) -> Option<Position> {
        if !state.constraint_enabled || !state.is_open(cell) {
            return None;
        }
        Some(cell)
    }

    /// Returns a read-only projection of the game.
    #[instrument(skip(self))]
    pub fn status(&self) -> Snapshot {
        let state = &self.state;
        Snapshot::new(
            state.current_player(),
            state.forced_board(),
            state.constraint_enabled(),
            *state.boards(),
            *state.micro_outcomes(),
            state.macro_outcome(),
            state.winning_line(),
            state.selectable_boards(),
            state.history().len(),
        )
    }

    /// Starts a fresh game, keeping the constraint setting.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(constraint_enabled = self.state.constraint_enabled, "Resetting game");
        self.state = GameState::new(self.state.constraint_enabled);
    }

    /// Turns the forced-board rule on or off.
    ///
    /// Turning it off clears any forced board at once. Turning it on takes
    /// effect from the next move.
    #[instrument(skip(self))]
    pub fn set_constraint_enabled(&mut self, enabled: bool) {
        self.state.constraint_enabled = enabled;
        if !enabled {
            self.state.forced_board = None;
        }
    }

    /// Replays moves from an initial state.
    ///
    /// # Errors
    ///
    /// Fails on the first move that is illegal at its point in the sequence,
    /// including a move by the player not on turn.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(constraint_enabled: bool, moves: &[Move]) -> Result<Self, InvalidMove> {
        let mut engine = Self::new(constraint_enabled);
        for mov in moves {
            MoveContract::pre(&engine.state, mov)?;
            engine.apply_move(mov.micro.to_index(), mov.cell.to_index())?;
        }
        Ok(engine)
    }
}

impl Default for UltimateBoardEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::InvalidMoveKind;
    use crate::types::Player;

    #[test]
    fn test_first_move_forces_board() {
        let mut engine = UltimateBoardEngine::default();
        let result = engine.apply_move(0, 4).unwrap();
        assert_eq!(*result.forced_board(), Some(Position::Center));
        assert_eq!(*result.current_player(), Player::Second);
        assert_eq!(*result.micro_outcome(), None);
        assert!(!result.ended_game());
    }

    #[test]
    fn test_self_referential_forcing() {
        let mut engine = UltimateBoardEngine::default();
        engine.apply_move(4, 4).unwrap();
        assert_eq!(engine.state().forced_board(), Some(Position::Center));
        assert!(engine.legal_move(4, 0));
        assert!(!engine.legal_move(3, 0));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut engine = UltimateBoardEngine::default();
        engine.apply_move(0, 4).unwrap();
        let before = engine.clone();
        let err = engine.apply_move(0, 0).unwrap_err();
        assert!(matches!(err.kind, InvalidMoveKind::WrongBoard { .. }));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_reset_preserves_constraint() {
        let mut engine = UltimateBoardEngine::new(false);
        engine.apply_move(3, 3).unwrap();
        engine.reset();
        assert_eq!(engine.state(), &GameState::new(false));
    }

    #[test]
    fn test_disabling_constraint_clears_forced_board() {
        let mut engine = UltimateBoardEngine::default();
        engine.apply_move(0, 4).unwrap();
        engine.set_constraint_enabled(false);
        assert_eq!(engine.status().forced_board(), &None);
        assert!(engine.legal_move(0, 0));

        engine.set_constraint_enabled(true);
        assert_eq!(engine.state().forced_board(), None);
        engine.apply_move(0, 0).unwrap();
        assert_eq!(engine.state().forced_board(), Some(Position::TopLeft));
    }

    #[test]
    fn test_forced_target_full_gives_free_choice() {
        // Fill board 0 to a draw, then send a player there.
        let mut engine = UltimateBoardEngine::new(false);
        let draw_order = [(0, 0), (0, 1), (0, 2), (0, 4), (0, 3), (0, 5), (0, 7), (0, 6), (0, 8)];
        for (micro, cell) in draw_order {
            engine.apply_move(micro, cell).unwrap();
        }
        assert_eq!(engine.state().micro_outcomes()[0], Outcome::Drawn);

        engine.set_constraint_enabled(true);
        let result = engine.apply_move(5, 0).unwrap();
        assert_eq!(*result.forced_board(), None);
    }

    #[test]
    fn test_replay_rejects_wrong_player() {
        let moves = [
            Move::new(Player::First, Position::TopLeft, Position::TopLeft),
            Move::new(Player::First, Position::TopLeft, Position::Center),
        ];
        let err = UltimateBoardEngine::replay(false, &moves).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::WrongPlayer(Player::First));
    }
}
