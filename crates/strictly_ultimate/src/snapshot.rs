//! Read-only projections handed to the presentation layer.

use crate::action::Move;
use crate::board::MicroBoard;
use crate::position::{Position, WinLine};
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the current game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Player to move, or the final mover once the game is over.
    current_player: Player,
    /// Board the current player must play in.
    forced_board: Option<Position>,
    /// Whether the forced-board rule is active.
    constraint_enabled: bool,
    /// Cells of every micro board.
    boards: [MicroBoard; 9],
    /// Outcome of every micro board.
    micro_outcomes: [Outcome; 9],
    /// Macro outcome.
    macro_outcome: Outcome,
    /// Macro winning line, if any.
    winning_line: Option<WinLine>,
    /// Boards the current player may choose; empty once the game is over.
    selectable_boards: Vec<Position>,
    /// Number of moves applied so far.
    move_count: usize,
}

impl Snapshot {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        current_player: Player,
        forced_board: Option<Position>,
        constraint_enabled: bool,
        boards: [MicroBoard; 9],
        micro_outcomes: [Outcome; 9],
        macro_outcome: Outcome,
        winning_line: Option<WinLine>,
        selectable_boards: Vec<Position>,
        move_count: usize,
    ) -> Self {
        Self {
            current_player,
            forced_board,
            constraint_enabled,
            boards,
            micro_outcomes,
            macro_outcome,
            winning_line,
            selectable_boards,
            move_count,
        }
    }

    /// Checks if the macro game is decided.
    pub fn is_over(&self) -> bool {
        self.macro_outcome.is_decided()
    }

    /// Checks if a board should be highlighted as playable.
    pub fn is_selectable(&self, micro: Position) -> bool {
        self.selectable_boards.contains(&micro)
    }

    /// One-line summary of whose turn it is, or how the game ended.
    ///
    /// Boards are numbered 1-9 for players.
    pub fn status_line(&self) -> String {
        match (self.macro_outcome, self.forced_board) {
            (Outcome::WonBy(player), _) => format!("{} wins the game!", player),
            (Outcome::Drawn, _) => "The game is a draw.".to_string(),
            (Outcome::Undecided, Some(forced)) => format!(
                "{} to move, must play in board {}",
                self.current_player,
                forced.to_index() + 1
            ),
            (Outcome::Undecided, None) => {
                format!("{} to move, any undecided board", self.current_player)
            }
        }
    }
}

/// What a single applied move changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveResult {
    /// The move that was applied.
    played: Move,
    /// New outcome of the played board, if this move decided it.
    micro_outcome: Option<Outcome>,
    /// New macro outcome, if this move decided the game.
    macro_outcome: Option<Outcome>,
    /// Macro winning line, if this move won the game.
    winning_line: Option<WinLine>,
    /// Board the next player is forced into.
    forced_board: Option<Position>,
    /// Player to move next (unchanged once the game is over).
    current_player: Player,
}

impl MoveResult {
    pub(crate) fn new(
        played: Move,
        micro_outcome: Option<Outcome>,
        macro_outcome: Option<Outcome>,
        winning_line: Option<WinLine>,
        forced_board: Option<Position>,
        current_player: Player,
    ) -> Self {
        Self {
            played,
            micro_outcome,
            macro_outcome,
            winning_line,
            forced_board,
            current_player,
        }
    }

    /// Checks if this move ended the game.
    pub fn ended_game(&self) -> bool {
        self.macro_outcome.is_some()
    }
}
