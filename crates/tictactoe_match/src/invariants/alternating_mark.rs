//! Alternating mark invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Mark, RoundController};

/// Invariant: marks follow move parity.
///
/// The first move is always `X`, consecutive moves never repeat a mark
/// and the next mark matches the history length.
pub struct AlternatingMarkInvariant;

impl Invariant<RoundController> for AlternatingMarkInvariant {
    fn holds(round: &RoundController) -> bool {
        let history = round.history();

        let parity_ok = history
            .iter()
            .enumerate()
            .all(|(count, mov)| mov.mark == Mark::for_move(count));

        parity_ok
            && round.move_count() == history.len()
            && round.current_mark() == Mark::for_move(history.len())
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
