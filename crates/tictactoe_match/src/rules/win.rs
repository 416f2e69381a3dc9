//! Win-line detection.
//!
//! Each variant owns a constant, ordered table of lines. Detection scans
//! the tables in declared order and reports the first uniformly marked
//! line, so the table order is the tie-break when several lines are
//! complete at once.

use crate::{Board, Cell, Mark, Variant};
use serde::Serialize;
use tracing::{debug, instrument};

/// Rows, columns and diagonals of the 3×3 grid.
pub const BEGINNER_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Rows, columns and full diagonals of the 4×4 grid.
pub const PRO_LINES: [[usize; 4]; 10] = [
    // Rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // Columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // Diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Three-cell diagonals of the 4×4 grid that cut off a corner.
///
/// Checked before [`PRO_LINES`] on a hybrid board.
pub const HYBRID_SHORT_LINES: [[usize; 3]; 4] = [
    [1, 6, 11],
    [4, 9, 14],
    [2, 5, 8],
    [7, 10, 13],
];

/// A winning line: the ordered cell indices that were uniformly marked.
///
/// Lines always borrow from the static tables above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Line(&'static [usize]);

impl Line {
    /// Cell indices of the line in table order.
    pub fn cells(&self) -> &'static [usize] {
        self.0
    }

    /// Number of cells in the line (3 or 4).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Lines are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First cell of the line; its mark identifies the winner.
    pub fn first(&self) -> usize {
        self.0[0]
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Returns the ordered line tables a variant checks, highest precedence first.
pub fn line_tables(variant: Variant) -> Vec<Vec<Line>> {
    fn table<const N: usize>(lines: &'static [[usize; N]]) -> Vec<Line> {
        lines.iter().map(|line| Line(line.as_slice())).collect()
    }

    match variant {
        Variant::Beginner => vec![table(&BEGINNER_LINES)],
        Variant::Pro => vec![table(&PRO_LINES)],
        Variant::Hybrid => vec![table(&HYBRID_SHORT_LINES), table(&PRO_LINES)],
    }
}

/// Finds the first uniformly marked line on the board.
///
/// Returns `None` if no line of the board's variant is complete.
#[instrument(skip(board), fields(variant = %board.variant()))]
pub fn find_winning_line(board: &Board) -> Option<Line> {
    let found = line_tables(board.variant())
        .into_iter()
        .flatten()
        .find(|line| line_mark(board, *line).is_some());

    if let Some(line) = found {
        debug!(%line, "Winning line found");
    }
    found
}

/// Returns the mark that owns the winning line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).and_then(|line| line_mark(board, line))
}

fn line_mark(board: &Board, line: Line) -> Option<Mark> {
    let first = board.get(line.first())?.mark()?;
    line.cells()
        .iter()
        .all(|&index| board.get(index) == Some(Cell::Occupied(first)))
        .then_some(first)
}
