//! Round lifecycle phases.

use serde::{Deserialize, Serialize};

/// Phase of the round controller.
///
/// `NotStarted → InProgress → Ended`; starting a new round from any phase
/// returns to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
pub enum RoundPhase {
    /// No round has been started yet.
    #[default]
    NotStarted,
    /// Moves are accepted.
    InProgress,
    /// A winning line was found; moves are ignored until the next round.
    Ended,
}

impl RoundPhase {
    /// Returns true if moves are currently accepted.
    pub fn accepts_moves(self) -> bool {
        matches!(self, RoundPhase::InProgress)
    }
}
