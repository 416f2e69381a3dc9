//! Tests for match scoring across formats.

use proptest::prelude::*;
use tictactoe_match::rules::line_tables;
use tictactoe_match::{MatchFormat, MatchOutcome, MatchScore, MatchScorer, RoundResult, Team, Variant};
use Team::{Home, Visitor};

fn win(team: Team) -> RoundResult {
    RoundResult::decided(team, line_tables(Variant::Beginner)[0][0])
}

/// Feeds the sequence and returns the scorer plus every emitted outcome.
fn score(format: MatchFormat, teams: &[Team]) -> (MatchScorer, Vec<MatchOutcome>) {
    let mut scorer = MatchScorer::new(format);
    let emitted = teams
        .iter()
        .filter_map(|&team| scorer.record(&win(team)))
        .collect();
    (scorer, emitted)
}

#[test]
fn test_bo1_first_decisive_round_wins() {
    let (scorer, emitted) = score(MatchFormat::Bo1, &[Home]);
    assert_eq!(emitted, vec![MatchOutcome::Home]);
    assert_eq!(scorer.evaluate(), MatchOutcome::Home);
}

#[test]
fn test_bo2_split_and_sweep() {
    let (_, emitted) = score(MatchFormat::Bo2, &[Home, Visitor]);
    assert_eq!(emitted, vec![MatchOutcome::Draw]);

    let (_, emitted) = score(MatchFormat::Bo2, &[Home, Home]);
    assert_eq!(emitted, vec![MatchOutcome::Home]);
}

#[test]
fn test_bo3_comeback_and_early_finish() {
    let (_, emitted) = score(MatchFormat::Bo3, &[Home, Visitor, Visitor]);
    assert_eq!(emitted, vec![MatchOutcome::Visitor]);

    let (scorer, emitted) = score(MatchFormat::Bo3, &[Home, Home]);
    assert_eq!(emitted, vec![MatchOutcome::Home]);
    assert_eq!(scorer.score().rounds_played(), 2);
}

#[test]
fn test_bo5_needs_three() {
    let (scorer, emitted) = score(MatchFormat::Bo5, &[Visitor, Visitor, Home, Home]);
    assert!(emitted.is_empty());
    assert_eq!(scorer.evaluate(), MatchOutcome::Undecided);

    let (_, emitted) = score(MatchFormat::Bo5, &[Visitor, Visitor, Home, Home, Visitor]);
    assert_eq!(emitted, vec![MatchOutcome::Visitor]);
}

#[test]
fn test_bo7_needs_four() {
    let (scorer, emitted) = score(MatchFormat::Bo7, &[Home, Home, Home, Visitor]);
    assert!(emitted.is_empty());
    assert_eq!(scorer.evaluate(), MatchOutcome::Undecided);
    assert_eq!(scorer.score(), MatchScore { home_wins: 3, visitor_wins: 1 });

    let (_, emitted) = score(MatchFormat::Bo7, &[Home, Home, Home, Home]);
    assert_eq!(emitted, vec![MatchOutcome::Home]);
}

#[test]
fn test_post_termination_freeze() {
    let (mut scorer, emitted) = score(MatchFormat::Bo3, &[Visitor, Visitor]);
    assert_eq!(emitted, vec![MatchOutcome::Visitor]);

    for team in [Home, Home, Home, Visitor] {
        assert_eq!(scorer.record(&win(team)), None);
    }
    assert_eq!(scorer.score(), MatchScore { home_wins: 0, visitor_wins: 2 });
    assert_eq!(scorer.outcome(), MatchOutcome::Visitor);
}

#[test]
fn test_unknown_format_label_never_decides() {
    let format = MatchFormat::from_label("best-of-nine");
    let (scorer, emitted) = score(format, &[Home; 10]);
    assert!(emitted.is_empty());
    assert_eq!(scorer.score().home_wins, 10);
}

fn teams() -> impl Strategy<Value = Vec<Team>> {
    prop::collection::vec(prop_oneof![Just(Home), Just(Visitor)], 0..64)
}

fn formats() -> impl Strategy<Value = MatchFormat> {
    prop_oneof![
        Just(MatchFormat::Bo1),
        Just(MatchFormat::Bo2),
        Just(MatchFormat::Bo3),
        Just(MatchFormat::Bo5),
        Just(MatchFormat::Bo7),
        Just(MatchFormat::Evergreen),
    ]
}

proptest! {
    #[test]
    fn prop_evergreen_never_terminates(sequence in teams()) {
        let (scorer, emitted) = score(MatchFormat::Evergreen, &sequence);
        prop_assert!(emitted.is_empty());
        prop_assert_eq!(scorer.outcome(), MatchOutcome::Undecided);
        prop_assert_eq!(scorer.score().rounds_played() as usize, sequence.len());
    }

    #[test]
    fn prop_outcome_emitted_at_most_once(format in formats(), sequence in teams()) {
        let (scorer, emitted) = score(format, &sequence);
        prop_assert!(emitted.len() <= 1);
        if let Some(outcome) = emitted.first() {
            prop_assert_eq!(scorer.outcome(), *outcome);
        }
    }

    #[test]
    fn prop_score_frozen_after_decision(format in formats(), sequence in teams(), extra in teams()) {
        let (mut scorer, _) = score(format, &sequence);
        if scorer.is_decided() {
            let frozen = scorer.score();
            let outcome = scorer.outcome();
            for team in extra {
                prop_assert_eq!(scorer.record(&win(team)), None);
            }
            prop_assert_eq!(scorer.score(), frozen);
            prop_assert_eq!(scorer.outcome(), outcome);
        }
    }
}
