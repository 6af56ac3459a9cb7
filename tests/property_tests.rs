//! Property-based tests for the game engine.
//!
//! These tests use proptest to drive the engine with random sequences
//! of moves and jumps and check that its invariants hold throughout.

use proptest::prelude::*;
use tictactoe_engine::core::{detect_winner, Board, Mark, WINNING_LINES};
use tictactoe_engine::engine::{GameEngine, MoveOutcome, Snapshot, Status};

#[derive(Clone, Debug)]
enum Action {
    Move(usize),
    /// Jump to a step chosen as a fraction of the current history length
    Jump(u8),
}

prop_compose! {
    fn arbitrary_cell()(cell in 0..9usize) -> usize {
        cell
    }
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => arbitrary_cell().prop_map(Action::Move),
        1 => any::<u8>().prop_map(Action::Jump),
    ]
}

fn run(engine: &mut GameEngine, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Move(cell) => {
                engine.apply_move(*cell).unwrap();
            }
            Action::Jump(pick) => {
                let step = *pick as usize % engine.history().len();
                engine.jump_to(step).unwrap();
            }
        }
    }
}

fn assert_parity(engine: &GameEngine) -> Result<(), TestCaseError> {
    for (step, board) in engine.history().boards().enumerate() {
        let diff = board.count(Mark::X) as isize - board.count(Mark::O) as isize;
        prop_assert_eq!(diff, (step % 2) as isize, "step {}:\n{}", step, board);
        prop_assert_eq!(board.count(Mark::X) + board.count(Mark::O), step);
    }
    Ok(())
}

proptest! {
    #[test]
    fn parity_invariant_holds(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        assert_parity(&engine)?;
        prop_assert!(engine.step() < engine.history().len());
        prop_assert_eq!(engine.current_turn(), Mark::for_step(engine.step()));
    }

    #[test]
    fn queries_are_idempotent(actions in prop::collection::vec(arbitrary_action(), 0..30)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        let board1 = *engine.current_board();
        let board2 = *engine.current_board();
        prop_assert_eq!(board1, board2);

        prop_assert_eq!(engine.status(), engine.status());

        let list1: Vec<_> = engine.move_list().collect();
        let list2: Vec<_> = engine.move_list().collect();
        prop_assert_eq!(list1, list2);
    }

    #[test]
    fn occupied_cell_is_a_no_op(actions in prop::collection::vec(arbitrary_action(), 1..30)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        let occupied: Vec<usize> = engine
            .current_board()
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(index, _)| index)
            .collect();

        for cell in occupied {
            let history = engine.history().clone();
            let step = engine.step();

            let outcome = engine.apply_move(cell).unwrap();

            prop_assert!(matches!(outcome, MoveOutcome::Ignored(_)));
            prop_assert_eq!(engine.history(), &history);
            prop_assert_eq!(engine.step(), step);
        }
    }

    #[test]
    fn decided_game_is_a_no_op(actions in prop::collection::vec(arbitrary_action(), 0..60)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        if engine.is_decided() {
            let empty: Vec<usize> = engine.current_board().empty_cells().collect();
            for cell in empty {
                let history = engine.history().clone();
                let step = engine.step();

                let outcome = engine.apply_move(cell).unwrap();

                prop_assert!(!outcome.is_applied());
                prop_assert_eq!(engine.history(), &history);
                prop_assert_eq!(engine.step(), step);
            }
        }
    }

    #[test]
    fn move_from_past_step_truncates(
        actions in prop::collection::vec(arbitrary_action(), 1..30),
        pick in any::<u8>(),
    ) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        let target = pick as usize % engine.history().len();
        engine.jump_to(target).unwrap();

        let legal = engine.current_board().empty_cells().next();
        if let (Some(cell), false) = (legal, engine.is_decided()) {
            let outcome = engine.apply_move(cell).unwrap();

            prop_assert!(outcome.is_applied());
            prop_assert_eq!(engine.history().len(), target + 2);
            prop_assert_eq!(engine.step(), target + 1);
        }
    }

    #[test]
    fn jump_never_changes_history(
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        pick in any::<u8>(),
    ) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);
        let history = engine.history().clone();

        let target = pick as usize % history.len();
        engine.jump_to(target).unwrap();

        prop_assert_eq!(engine.history(), &history);
        prop_assert_eq!(engine.current_board(), history.board(target).unwrap());
    }

    #[test]
    fn out_of_range_arguments_are_errors(cell in 9..usize::MAX, extra in 0..100usize) {
        let mut engine = GameEngine::new();

        let move_err = engine.apply_move(cell).unwrap_err();
        prop_assert!(move_err.is_invalid_argument());

        let step = engine.history().len() + extra;
        let jump_err = engine.jump_to(step).unwrap_err();
        prop_assert!(jump_err.is_invalid_argument());

        prop_assert_eq!(engine.history().len(), 1);
        prop_assert_eq!(engine.step(), 0);
    }

    #[test]
    fn single_line_is_detected(line_index in 0..8usize, mark_o in any::<bool>()) {
        let mark = if mark_o { Mark::O } else { Mark::X };
        let line = WINNING_LINES[line_index];
        let board = line
            .iter()
            .fold(Board::new(), |board, &index| board.with_mark(index, mark));

        prop_assert_eq!(detect_winner(&board), Some(mark));
    }

    #[test]
    fn status_matches_detector(actions in prop::collection::vec(arbitrary_action(), 0..40)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        match engine.status() {
            Status::Winner(mark) => {
                prop_assert_eq!(detect_winner(engine.current_board()), Some(mark));
            }
            Status::NextTurn(mark) => {
                prop_assert_eq!(detect_winner(engine.current_board()), None);
                prop_assert_eq!(mark, engine.current_turn());
            }
        }
    }

    #[test]
    fn snapshot_roundtrip_serialization(actions in prop::collection::vec(arbitrary_action(), 0..20)) {
        let mut engine = GameEngine::new();
        run(&mut engine, &actions);

        let snapshot = engine.snapshot();
        let json = snapshot.to_json().unwrap();
        let deserialized: Snapshot = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(deserialized.moves.len(), engine.history().len());
        prop_assert_eq!(&deserialized, &snapshot);
    }
}
