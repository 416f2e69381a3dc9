//! Match scoring across best-of-N and evergreen formats.

use crate::invariants::{InvariantSet, ScoreInvariants};
use crate::{RoundResult, Team};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Number of rounds a match is played over.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MatchFormat {
    /// Single decisive round.
    #[default]
    Bo1,
    /// Two rounds; a 1-1 split is a draw.
    Bo2,
    /// First to two wins.
    Bo3,
    /// First to three wins.
    Bo5,
    /// First to four wins.
    Bo7,
    /// Open-ended; never decided by score.
    Evergreen,
}

impl MatchFormat {
    /// Parses a format label, degrading unknown labels to [`MatchFormat::Evergreen`].
    ///
    /// An unrecognized format has no reachable target, which is exactly
    /// how an evergreen match behaves.
    #[instrument]
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or_else(|_| {
            warn!(label, "Unrecognized match format, match will never be decided by score");
            MatchFormat::Evergreen
        })
    }

    /// Rounds in the format, `None` for evergreen.
    pub fn round_count(self) -> Option<u32> {
        match self {
            MatchFormat::Bo1 => Some(1),
            MatchFormat::Bo2 => Some(2),
            MatchFormat::Bo3 => Some(3),
            MatchFormat::Bo5 => Some(5),
            MatchFormat::Bo7 => Some(7),
            MatchFormat::Evergreen => None,
        }
    }

    /// Wins needed to take the match, `None` when unreachable.
    pub fn target_wins(self) -> Option<u32> {
        match self {
            MatchFormat::Bo1 => Some(1),
            MatchFormat::Bo2 => Some(2),
            MatchFormat::Bo3 => Some(2),
            MatchFormat::Bo5 => Some(3),
            MatchFormat::Bo7 => Some(4),
            MatchFormat::Evergreen => None,
        }
    }

    /// Whether an even split at the target total ends the match as a draw.
    pub fn allows_draw(self) -> bool {
        matches!(self, MatchFormat::Bo2)
    }

    /// Human-readable label ("Best of 3", "Evergreen").
    pub fn label(self) -> String {
        match self.round_count() {
            Some(rounds) => format!("Best of {rounds}"),
            None => "Evergreen".to_string(),
        }
    }
}

/// Running round wins per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    /// Rounds won by the home team.
    pub home_wins: u32,
    /// Rounds won by the visiting team.
    pub visitor_wins: u32,
}

impl MatchScore {
    /// Wins for the given team.
    pub fn wins(&self, team: Team) -> u32 {
        match team {
            Team::Home => self.home_wins,
            Team::Visitor => self.visitor_wins,
        }
    }

    /// Number of decisive rounds recorded.
    pub fn rounds_played(&self) -> u32 {
        self.home_wins + self.visitor_wins
    }

    fn increment(&mut self, team: Team) {
        match team {
            Team::Home => self.home_wins += 1,
            Team::Visitor => self.visitor_wins += 1,
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.home_wins, self.visitor_wins)
    }
}

/// State of a match as computed from its score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchOutcome {
    /// Not decided yet.
    #[default]
    Undecided,
    /// Home team took the match.
    Home,
    /// Visiting team took the match.
    Visitor,
    /// Even split in a format that allows draws.
    Draw,
}

impl MatchOutcome {
    /// Returns true for home, visitor and draw.
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchOutcome::Undecided)
    }

    /// Winning team, if the outcome names one.
    pub fn winner(self) -> Option<Team> {
        match self {
            MatchOutcome::Home => Some(Team::Home),
            MatchOutcome::Visitor => Some(Team::Visitor),
            MatchOutcome::Undecided | MatchOutcome::Draw => None,
        }
    }
}

/// Computes the outcome for a score under a format.
#[instrument]
pub fn evaluate(format: MatchFormat, score: MatchScore) -> MatchOutcome {
    let Some(target) = format.target_wins() else {
        return MatchOutcome::Undecided;
    };

    if score.home_wins == target {
        MatchOutcome::Home
    } else if score.visitor_wins == target {
        MatchOutcome::Visitor
    } else if score.home_wins == score.visitor_wins
        && score.rounds_played() == target
        && format.allows_draw()
    {
        MatchOutcome::Draw
    } else {
        MatchOutcome::Undecided
    }
}

/// Aggregates round results into a score and decides the match.
///
/// Once a terminal outcome is reached the scorer is frozen: later
/// results are ignored and the outcome is never reported again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScorer {
    format: MatchFormat,
    score: MatchScore,
    outcome: MatchOutcome,
}

impl MatchScorer {
    /// Creates a scorer with a 0-0 score.
    #[instrument]
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            score: MatchScore::default(),
            outcome: MatchOutcome::Undecided,
        }
    }

    /// Format being scored.
    pub fn format(&self) -> MatchFormat {
        self.format
    }

    /// Current score.
    pub fn score(&self) -> MatchScore {
        self.score
    }

    /// Current outcome; `Undecided` until the match ends.
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    /// Returns true once a terminal outcome was reached.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Re-evaluates the current score.
    ///
    /// After the match is decided this keeps returning the frozen outcome.
    pub fn evaluate(&self) -> MatchOutcome {
        if self.is_decided() {
            self.outcome
        } else {
            evaluate(self.format, self.score)
        }
    }

    /// Records a round result.
    ///
    /// Reset sentinels are skipped. Returns the outcome exactly once, on
    /// the result that ends the match; every other call returns `None`.
    #[instrument(skip(self), fields(format = %self.format, score = %self.score))]
    pub fn record(&mut self, result: &RoundResult) -> Option<MatchOutcome> {
        let Some(team) = result.winning_team else {
            debug!("Ignoring reset sentinel");
            return None;
        };

        if self.is_decided() {
            debug!(%team, outcome = %self.outcome, "Match already decided, ignoring round result");
            return None;
        }

        self.score.increment(team);
        info!(%team, score = %self.score, "Round recorded");

        let outcome = evaluate(self.format, self.score);
        if outcome.is_terminal() {
            self.outcome = outcome;
        }

        debug_assert!(
            ScoreInvariants::check_all(self).is_ok(),
            "Score invariants violated at {}",
            self.score
        );

        if !outcome.is_terminal() {
            return None;
        }

        info!(%outcome, score = %self.score, "Match decided");
        Some(outcome)
    }
}
