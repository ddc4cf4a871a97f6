//! Complete ultimate game state.

use crate::action::{InvalidMove, InvalidMoveKind, Move};
use crate::board::MicroBoard;
use crate::contracts::{Contract, MoveContract};
use crate::position::{Position, WinLine};
use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Complete game state: 9 micro boards plus the macro bookkeeping.
///
/// Fields are only mutated by [`UltimateBoardEngine`](crate::UltimateBoardEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Micro boards in row-major macro order.
    pub(crate) boards: [MicroBoard; 9],
    /// Outcome of each micro board.
    pub(crate) micro_outcomes: [Outcome; 9],
    /// Player to move (or the winner, once the game is over).
    pub(crate) current_player: Player,
    /// Board the current player must play in.
    pub(crate) forced_board: Option<Position>,
    /// Whether the forced-board rule applies.
    pub(crate) constraint_enabled: bool,
    /// Outcome of the macro grid.
    pub(crate) macro_outcome: Outcome,
    /// Macro line that decided the game.
    pub(crate) winning_line: Option<WinLine>,
    /// Moves in the order they were applied.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a fresh game; First moves first and any board may be chosen.
    #[instrument]
    pub fn new(constraint_enabled: bool) -> Self {
        Self {
            boards: [MicroBoard::new(); 9],
            micro_outcomes: [Outcome::Undecided; 9],
            current_player: Player::First,
            forced_board: None,
            constraint_enabled,
            macro_outcome: Outcome::Undecided,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Returns all micro boards.
    pub fn boards(&self) -> &[MicroBoard; 9] {
        &self.boards
    }

    /// Returns one micro board.
    pub fn board(&self, micro: Position) -> &MicroBoard {
        &self.boards[micro.to_index()]
    }

    /// Returns the outcome of every micro board.
    pub fn micro_outcomes(&self) -> &[Outcome; 9] {
        &self.micro_outcomes
    }

    /// Returns the outcome of one micro board.
    pub fn micro_outcome(&self, micro: Position) -> Outcome {
        self.micro_outcomes[micro.to_index()]
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the forced board, always `None` when the constraint is off.
    pub fn forced_board(&self) -> Option<Position> {
        if self.constraint_enabled {
            self.forced_board
        } else {
            None
        }
    }

    /// Returns whether the forced-board rule is active.
    pub fn constraint_enabled(&self) -> bool {
        self.constraint_enabled
    }

    /// Returns the macro outcome.
    pub fn macro_outcome(&self) -> Outcome {
        self.macro_outcome
    }

    /// Returns the macro winning line, if the game was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if the macro game is decided.
    pub fn is_over(&self) -> bool {
        self.macro_outcome.is_decided()
    }

    /// Checks if a micro board can still receive marks at all.
    pub fn is_open(&self, micro: Position) -> bool {
        !self.micro_outcome(micro).is_decided() && !self.board(micro).is_full()
    }

    /// Boards the current player may play in right now.
    #[instrument(skip(self))]
    pub fn selectable_boards(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::ALL
            .iter()
            .copied()
            .filter(|&micro| self.is_open(micro))
            .filter(|&micro| self.forced_board().is_none_or(|forced| forced == micro))
            .collect()
    }

    /// Validates a move for the current player without applying it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] with the first rule the move breaks.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn check_move(&self, micro: usize, cell: usize) -> Result<Move, InvalidMove> {
        let (Some(micro_pos), Some(cell_pos)) =
            (Position::from_index(micro), Position::from_index(cell))
        else {
            return Err(InvalidMove::new(InvalidMoveKind::OutOfBounds { micro, cell }));
        };

        let mov = Move::new(self.current_player, micro_pos, cell_pos);
        MoveContract::pre(self, &mov)?;
        Ok(mov)
    }

    /// Returns true iff the current player may mark `cell` of board `micro`.
    #[instrument(skip(self))]
    pub fn legal_move(&self, micro: usize, cell: usize) -> bool {
        self.check_move(micro, cell).is_ok()
    }

    /// Formats the full 9x9 grid.
    ///
    /// Won boards collapse to the winner's symbol; drawn and open boards
    /// show their cells.
    pub fn display(&self) -> String {
        let mut lines = Vec::with_capacity(11);
        for macro_row in 0..3 {
            for row in 0..3 {
                let segments: Vec<String> = (0..3)
                    .map(|macro_col| {
                        let idx = macro_row * 3 + macro_col;
                        match self.micro_outcomes[idx] {
                            Outcome::WonBy(player) if row == 1 => format!(" {} ", player),
                            Outcome::WonBy(_) => "   ".to_string(),
                            Outcome::Undecided | Outcome::Drawn => {
                                self.boards[idx].display_row(row)
                            }
                        }
                    })
                    .collect();
                lines.push(segments.join(" │ "));
            }
            if macro_row < 2 {
                lines.push("────┼─────┼────".to_string());
            }
        }
        lines.join("\n")
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(true);
        assert_eq!(state.current_player(), Player::First);
        assert_eq!(state.forced_board(), None);
        assert_eq!(state.macro_outcome(), Outcome::Undecided);
        assert_eq!(state.selectable_boards(), Position::ALL.to_vec());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let state = GameState::default();
        let err = state.check_move(9, 0).unwrap_err();
        assert_eq!(err.kind, InvalidMoveKind::OutOfBounds { micro: 9, cell: 0 });
        assert!(!state.legal_move(0, 42));
    }

    #[test]
    fn test_forced_board_hidden_when_constraint_off() {
        let mut state = GameState::new(false);
        state.forced_board = Some(Position::Center);
        assert_eq!(state.forced_board(), None);
        assert!(state.legal_move(0, 0));
    }

    #[test]
    fn test_display_empty_grid() {
        let state = GameState::default();
        let text = state.display();
        assert_eq!(text.lines().count(), 11);
        assert_eq!(text.lines().next(), Some("··· │ ··· │ ···"));
    }
}
