//! Outcome consistency invariant: stored outcomes match the cells.

use super::Invariant;
use crate::rules::{self, check_winner, winning_line};
use crate::state::GameState;
use crate::types::{Outcome, Player};

/// Invariant: every stored outcome equals a fresh evaluation.
///
/// Micro outcomes are re-derived from cells and the macro outcome from micro
/// outcomes. A board with lines for both players can never match, so this
/// also rules out double wins.
pub struct OutcomesConsistentInvariant;

impl Invariant<GameState> for OutcomesConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let micro_ok = state
            .boards()
            .iter()
            .zip(state.micro_outcomes())
            .all(|(board, stored)| {
                let cells = board.cells();
                let owners = [Player::First, Player::Second]
                    .into_iter()
                    .filter(|&p| winning_line(cells, p).is_some())
                    .count();
                let expected = match check_winner(cells) {
                    Some((player, _)) => Outcome::WonBy(player),
                    None if board.is_full() => Outcome::Drawn,
                    None => Outcome::Undecided,
                };
                owners <= 1 && *stored == expected
            });

        let outcomes = state.micro_outcomes();
        let expected_macro = match check_winner(outcomes) {
            Some((player, _)) => Outcome::WonBy(player),
            None if rules::is_full(outcomes) => Outcome::Drawn,
            None => Outcome::Undecided,
        };
        let line_ok = match state.macro_outcome() {
            Outcome::WonBy(player) => state.winning_line() == winning_line(outcomes, player),
            Outcome::Undecided | Outcome::Drawn => state.winning_line().is_none(),
        };

        micro_ok && state.macro_outcome() == expected_macro && line_ok
    }

    fn description() -> &'static str {
        "Micro and macro outcomes match the board contents"
    }
}
