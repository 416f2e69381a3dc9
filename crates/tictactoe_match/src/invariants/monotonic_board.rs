//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, RoundController};

/// Invariant: the board is exactly the replay of the round's history.
///
/// Replaying onto an empty board fails if any move lands on a marked
/// cell, so a match also proves no cell was ever overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<RoundController> for MonotonicBoardInvariant {
    fn holds(round: &RoundController) -> bool {
        let mut replayed = Board::new(round.variant());

        for mov in round.history() {
            if replayed.place(mov.index, mov.mark).is_err() {
                return false;
            }
        }

        replayed == *round.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
