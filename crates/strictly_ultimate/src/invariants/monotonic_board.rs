//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::MicroBoard;
use crate::state::GameState;
use crate::types::Mark;

/// Invariant: cells are monotonic (never overwritten).
///
/// Verified by replaying the move history onto empty boards: every replayed
/// cell must be empty before placement and the result must match the
/// current boards. This also ties the number of marked cells to the number
/// of moves applied.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = [MicroBoard::new(); 9];

        for mov in state.history() {
            let board = &mut reconstructed[mov.micro.to_index()];
            if !board.is_empty(mov.cell) {
                return false;
            }
            board.set(mov.cell, Mark::Occupied(mov.player));
        }

        reconstructed == *state.boards()
    }

    fn description() -> &'static str {
        "Cells are monotonic (never overwritten)"
    }
}
