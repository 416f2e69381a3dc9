//! First-class move values.
//!
//! A move is a domain event: the cell a team chose and the mark that
//! parity assigned to it. Accepted moves are kept in round history so
//! they can be replayed by the invariants.

use super::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An accepted move: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Board index of the marked cell.
    pub index: usize,
    /// Mark placed by this move.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(index: usize, mark: Mark) -> Self {
        Self { index, mark }
    }

    /// Returns the board index of this move.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the mark placed by this move.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Reason a board refused a placement.
///
/// The round controller treats every variant as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The index is not on the board.
    #[display("Cell {} is out of bounds for a board of {} cells", index, size)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        size: usize,
    },
}
