//! Score consistency invariant: the stored outcome agrees with the score.

use super::Invariant;
use crate::score::{MatchScorer, evaluate};

/// Invariant: an undecided scorer has a score that evaluates to
/// `Undecided`, and a decided scorer's score still names its outcome.
///
/// A decided scorer never records further wins, so the score that
/// produced the outcome is the score it keeps.
pub struct ScoreConsistentInvariant;

impl Invariant<MatchScorer> for ScoreConsistentInvariant {
    fn holds(scorer: &MatchScorer) -> bool {
        evaluate(scorer.format(), scorer.score()) == scorer.outcome()
    }

    fn description() -> &'static str {
        "Match outcome matches the recorded score"
    }
}
