//! Forced board invariant: the constraint never points at a closed board.

use super::Invariant;
use crate::state::GameState;

/// Invariant: a forced board is undecided and still has an empty cell.
///
/// It is also absent while the constraint is disabled and after the game
/// is over.
pub struct ForcedBoardInvariant;

impl Invariant<GameState> for ForcedBoardInvariant {
    fn holds(state: &GameState) -> bool {
        match state.forced_board {
            None => true,
            Some(_) if !state.constraint_enabled() || state.is_over() => false,
            Some(forced) => state.is_open(forced),
        }
    }

    fn description() -> &'static str {
        "Forced board is absent or an undecided board with an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Outcome;

    #[test]
    fn test_absent_holds() {
        assert!(ForcedBoardInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_open_board_holds() {
        let mut state = GameState::default();
        state.forced_board = Some(Position::Center);
        assert!(ForcedBoardInvariant::holds(&state));
    }

    #[test]
    fn test_decided_board_violates() {
        let mut state = GameState::default();
        state.micro_outcomes[4] = Outcome::Drawn;
        state.forced_board = Some(Position::Center);
        assert!(!ForcedBoardInvariant::holds(&state));
    }

    #[test]
    fn test_present_without_constraint_violates() {
        let mut state = GameState::new(false);
        state.forced_board = Some(Position::Center);
        assert!(!ForcedBoardInvariant::holds(&state));
    }
}
