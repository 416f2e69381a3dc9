//! Full-board detection.

use super::win::find_winning_line;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}

/// A full board with no winning line: no further move can be accepted
/// and no round result will ever be produced.
#[instrument(skip(board))]
pub fn is_stalemate(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}
