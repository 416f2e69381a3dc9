//! Tests for the round state machine.

use proptest::prelude::*;
use tictactoe_match::{
    Cell, Mark, MoveOutcome, RoundController, RoundPhase, RoundResult, RoundRng, Team, Variant,
};

fn started(variant: Variant, seed: u64) -> RoundController {
    let mut round = RoundController::new(variant, RoundRng::new(seed));
    assert_eq!(round.new_round(), RoundResult::reset());
    round
}

fn play(round: &mut RoundController, moves: &[usize]) -> Vec<MoveOutcome> {
    moves.iter().map(|&index| round.make_move(index)).collect()
}

#[test]
fn test_beginner_top_row_goes_to_x_team() {
    for seed in 0..8 {
        let mut round = started(Variant::Beginner, seed);
        let x_team = round.team_for(Mark::X);

        let outcomes = play(&mut round, &[0, 6, 1, 7, 2]);

        match outcomes.last() {
            Some(MoveOutcome::Decided { result, .. }) => {
                assert_eq!(result.winning_team, Some(x_team));
                assert_eq!(result.win_line.unwrap().cells(), &[0, 1, 2]);
            }
            other => panic!("Expected decided round, got {other:?}"),
        }
    }
}

#[test]
fn test_o_win_goes_to_other_team() {
    let mut round = started(Variant::Beginner, 21);
    let o_team = round.team_for(Mark::O);
    assert_eq!(o_team, round.team_for(Mark::X).opponent());

    let outcomes = play(&mut round, &[0, 2, 1, 4, 8, 6]);
    match outcomes.last() {
        Some(MoveOutcome::Decided { result, .. }) => {
            assert_eq!(result.winning_team, Some(o_team));
            assert_eq!(result.win_line.unwrap().cells(), &[2, 4, 6]);
        }
        other => panic!("Expected decided round, got {other:?}"),
    }
}

#[test]
fn test_pro_column_win() {
    let mut round = started(Variant::Pro, 4);
    let outcomes = play(&mut round, &[0, 1, 4, 2, 8, 3, 12]);
    match outcomes.last() {
        Some(MoveOutcome::Decided { result, .. }) => {
            let line = result.win_line.unwrap();
            assert_eq!(line.cells(), &[0, 4, 8, 12]);
            assert_eq!(line.len(), 4);
        }
        other => panic!("Expected decided round, got {other:?}"),
    }
}

#[test]
fn test_hybrid_short_diagonal_ends_round() {
    let mut round = started(Variant::Hybrid, 4);
    let outcomes = play(&mut round, &[2, 0, 5, 1, 8]);
    match outcomes.last() {
        Some(MoveOutcome::Decided { result, .. }) => {
            assert_eq!(result.win_line.unwrap().cells(), &[2, 5, 8]);
        }
        other => panic!("Expected decided round, got {other:?}"),
    }
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut round = started(Variant::Beginner, 2);
    play(&mut round, &[0, 6, 1, 7, 2]);
    assert_eq!(round.phase(), RoundPhase::Ended);

    let board = round.board().clone();
    assert_eq!(round.make_move(8), MoveOutcome::Ignored);
    assert_eq!(round.board(), &board);
    assert_eq!(round.move_count(), 5);
}

#[test]
fn test_new_round_resets_everything() {
    let mut round = started(Variant::Pro, 5);
    play(&mut round, &[0, 1, 2, 3, 4]);

    round.new_round();

    assert!(round.board().cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(round.move_count(), 0);
    assert!(round.history().is_empty());
    assert_eq!(round.current_mark(), Mark::X);
    assert_eq!(round.phase(), RoundPhase::InProgress);
}

#[test]
fn test_new_round_after_win_reopens_play() {
    let mut round = started(Variant::Beginner, 6);
    play(&mut round, &[0, 6, 1, 7, 2]);
    round.new_round();
    assert!(matches!(round.make_move(2), MoveOutcome::Accepted { .. }));
}

#[test]
fn test_team_draw_varies_between_rounds() {
    let mut round = started(Variant::Beginner, 99);
    let mut x_teams = vec![round.team_for(Mark::X)];
    for _ in 0..32 {
        round.new_round();
        x_teams.push(round.team_for(Mark::X));
    }
    assert!(x_teams.contains(&Team::Home));
    assert!(x_teams.contains(&Team::Visitor));
}

#[test]
fn test_full_board_without_line_stays_in_progress() {
    let mut round = started(Variant::Beginner, 8);
    // X O X / X O O / O X X
    let outcomes = play(&mut round, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(outcomes.iter().all(|o| matches!(o, MoveOutcome::Accepted { .. })));
    assert_eq!(round.phase(), RoundPhase::InProgress);
    assert!(round.is_stalemate());
    for index in 0..9 {
        assert_eq!(round.make_move(index), MoveOutcome::Ignored);
    }
}

proptest! {
    #[test]
    fn prop_repeated_move_is_idempotent(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..16, 1..12),
    ) {
        let mut round = started(Variant::Pro, seed);
        for index in moves {
            let first = round.make_move(index);
            let board = round.board().clone();
            let count = round.move_count();
            let phase = round.phase();

            prop_assert_eq!(round.make_move(index), MoveOutcome::Ignored);
            prop_assert_eq!(round.board(), &board);
            prop_assert_eq!(round.move_count(), count);
            prop_assert_eq!(round.phase(), phase);

            if matches!(first, MoveOutcome::Decided { .. }) {
                break;
            }
        }
    }

    #[test]
    fn prop_move_count_matches_marked_cells(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..20, 0..30),
    ) {
        let mut round = started(Variant::Hybrid, seed);
        for index in moves {
            round.make_move(index);
        }
        prop_assert_eq!(round.move_count(), round.board().occupied_count());
    }
}
