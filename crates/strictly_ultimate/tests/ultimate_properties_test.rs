//! Property-based tests for the ultimate engine.
//!
//! Positions are generated by random legal playouts from the empty board,
//! so every checked state is reachable.

use proptest::prelude::*;
use strictly_ultimate::invariants::{InvariantSet, UltimateInvariants};
use strictly_ultimate::{MicroBoard, Outcome, Player, UltimateBoardEngine};

/// Every `(micro, cell)` pair the current player may play.
fn legal_moves(engine: &UltimateBoardEngine) -> Vec<(usize, usize)> {
    let state = engine.state();
    state
        .selectable_boards()
        .into_iter()
        .flat_map(|micro| {
            state
                .board(micro)
                .empty_positions()
                .into_iter()
                .map(move |cell| (micro.to_index(), cell.to_index()))
        })
        .collect()
}

fn marked_cells(engine: &UltimateBoardEngine) -> usize {
    engine.state().boards().iter().map(MicroBoard::filled).sum()
}

/// A constraint setting plus move choices for a random playout.
fn arb_playout() -> impl Strategy<Value = (bool, Vec<usize>)> {
    (any::<bool>(), proptest::collection::vec(0usize..81, 0..81))
}

proptest! {
    #[test]
    fn prop_playout_preserves_invariants((constraint, choices) in arb_playout()) {
        let mut engine = UltimateBoardEngine::new(constraint);

        for choice in choices {
            let moves = legal_moves(&engine);
            if moves.is_empty() {
                prop_assert!(engine.state().is_over());
                break;
            }
            let (micro, cell) = moves[choice % moves.len()];
            let before = engine.state().clone();

            engine.apply_move(micro, cell).expect("Enumerated move is legal");
            let after = engine.state();

            prop_assert!(UltimateInvariants::check_all(after).is_ok());
            prop_assert_eq!(marked_cells(&engine), after.history().len());

            for (old, new) in before.micro_outcomes().iter().zip(after.micro_outcomes()) {
                prop_assert!(old.can_become(*new));
            }
            prop_assert!(before.macro_outcome().can_become(after.macro_outcome()));

            if let Some(forced) = after.forced_board() {
                prop_assert_eq!(after.micro_outcome(forced), Outcome::Undecided);
                prop_assert!(!after.board(forced).empty_positions().is_empty());
            }
            if !constraint {
                prop_assert_eq!(after.forced_board(), None);
            }
        }
    }

    #[test]
    fn prop_no_board_won_by_both((constraint, choices) in arb_playout()) {
        let mut engine = UltimateBoardEngine::new(constraint);
        for choice in choices {
            let moves = legal_moves(&engine);
            if moves.is_empty() {
                break;
            }
            let (micro, cell) = moves[choice % moves.len()];
            engine.apply_move(micro, cell).expect("Enumerated move is legal");
        }

        for board in engine.state().boards() {
            let winners = [Player::First, Player::Second]
                .into_iter()
                .filter(|&p| strictly_ultimate::rules::winning_line(board.cells(), p).is_some())
                .count();
            prop_assert!(winners <= 1);
        }
    }

    #[test]
    fn prop_legal_move_matches_enumeration((constraint, choices) in arb_playout()) {
        let mut engine = UltimateBoardEngine::new(constraint);
        for choice in choices {
            let moves = legal_moves(&engine);
            if moves.is_empty() {
                break;
            }
            let (micro, cell) = moves[choice % moves.len()];
            engine.apply_move(micro, cell).expect("Enumerated move is legal");
        }

        let moves = legal_moves(&engine);
        for micro in 0..9 {
            for cell in 0..9 {
                prop_assert_eq!(engine.legal_move(micro, cell), moves.contains(&(micro, cell)));
            }
        }
    }

    #[test]
    fn prop_illegal_move_leaves_state_unchanged(
        (constraint, choices) in arb_playout(),
        micro in 0usize..10,
        cell in 0usize..10,
    ) {
        let mut engine = UltimateBoardEngine::new(constraint);
        for choice in choices {
            let moves = legal_moves(&engine);
            if moves.is_empty() {
                break;
            }
            let (m, c) = moves[choice % moves.len()];
            engine.apply_move(m, c).expect("Enumerated move is legal");
        }

        if !engine.legal_move(micro, cell) {
            let before = engine.clone();
            prop_assert!(engine.apply_move(micro, cell).is_err());
            prop_assert_eq!(engine, before);
        }
    }
}
