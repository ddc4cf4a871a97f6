//! Alternating turn invariant: players alternate First, Second, First, ...

use super::Invariant;
use crate::state::GameState;
use crate::types::Player;

/// Invariant: players alternate turns.
///
/// Move history must show First, Second, First, ... The current player is
/// the one due next, except once the game is over, where it stays the
/// player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let alternates = state
            .history()
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == expected_mover(i));
        if !alternates {
            return false;
        }

        let expected_current = match state.history().last() {
            Some(last) if state.is_over() => last.player,
            _ => expected_mover(state.history().len()),
        };
        state.current_player() == expected_current
    }

    fn description() -> &'static str {
        "Players alternate turns (First, Second, First, ...)"
    }
}

fn expected_mover(ply: usize) -> Player {
    if ply % 2 == 0 {
        Player::First
    } else {
        Player::Second
    }
}
