//! Static match configuration.
//!
//! The engine reads its parameters once, at match setup, through
//! [`ConfigSource`]. Where the values come from is up to the caller.

use crate::{MatchFormat, Variant};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Read-only access to match parameters.
pub trait ConfigSource {
    /// Format the match is scored under.
    fn match_format(&self) -> MatchFormat;

    /// Display name of the home team.
    fn home_team(&self) -> &str;

    /// Display name of the visiting team.
    fn visitor_team(&self) -> &str;

    /// Board variant played each round.
    fn variant(&self) -> Variant;
}

/// Immutable match parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MatchDetails {
    /// Scoring format.
    match_format: MatchFormat,

    /// Home team display name.
    #[new(into)]
    home_team: String,

    /// Visiting team display name.
    #[new(into)]
    #[serde(alias = "away_team")]
    visitor_team: String,

    /// Board variant.
    #[serde(default)]
    variant: Variant,
}

impl MatchDetails {
    /// Builds details from label strings.
    ///
    /// Unknown format labels degrade to evergreen scoring; unknown variant
    /// labels fall back to the beginner board.
    #[instrument(skip(home_team, visitor_team))]
    pub fn from_labels(
        match_format: &str,
        home_team: impl Into<String>,
        visitor_team: impl Into<String>,
        variant: &str,
    ) -> Self {
        let variant = variant.parse().unwrap_or_else(|_| {
            warn!(variant, "Unrecognized variant, using beginner board");
            Variant::Beginner
        });
        Self::new(
            MatchFormat::from_label(match_format),
            home_team,
            visitor_team,
            variant,
        )
    }
}

impl ConfigSource for MatchDetails {
    fn match_format(&self) -> MatchFormat {
        self.match_format
    }

    fn home_team(&self) -> &str {
        &self.home_team
    }

    fn visitor_team(&self) -> &str {
        &self.visitor_team
    }

    fn variant(&self) -> Variant {
        self.variant
    }
}

impl Default for MatchDetails {
    fn default() -> Self {
        Self::new(MatchFormat::default(), "Home", "Visitor", Variant::default())
    }
}
