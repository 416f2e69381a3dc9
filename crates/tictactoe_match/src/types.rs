//! Core domain types for the match engine.

use crate::action::PlaceError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed on a cell.
///
/// Marks are owned by the move parity, not by a team: even move counts
/// place `X`, odd move counts place `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark placed on even move counts (moves first).
    X,
    /// Mark placed on odd move counts.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark placed by the move with the given zero-based count.
    pub fn for_move(move_count: usize) -> Self {
        if move_count % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unmarked cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the two sides of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Team {
    /// Home team.
    Home,
    /// Visiting team.
    Visitor,
}

impl Team {
    /// Returns the opposing team.
    pub fn opponent(self) -> Self {
        match self {
            Team::Home => Team::Visitor,
            Team::Visitor => Team::Home,
        }
    }
}

/// Board ruleset: size of the grid and the set of winning lines.
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
pub enum Variant {
    /// 3×3 board, three in a row.
    #[default]
    Beginner,
    /// 4×4 board, four in a row.
    Pro,
    /// 4×4 board, short three-cell diagonals take precedence over four in a row.
    Hybrid,
}

impl Variant {
    /// Number of cells on the board for this variant.
    pub fn size(self) -> usize {
        self.side() * self.side()
    }

    /// Length of one side of the square grid.
    pub fn side(self) -> usize {
        match self {
            Variant::Beginner => 3,
            Variant::Pro | Variant::Hybrid => 4,
        }
    }

    /// Upper-case title used by score displays ("BEGINNER", "PRO", "HYBRID").
    pub fn title(self) -> String {
        self.to_string().to_uppercase()
    }
}

/// Board for a single round, sized by its variant.
///
/// Cells are stored in row-major order. A cell, once marked, is never
/// unmarked; the board is replaced wholesale when a new round starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    variant: Variant,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board for the given variant.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            cells: vec![Cell::Empty; variant.size()],
        }
    }

    /// Returns the variant this board was created for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of cells on the board.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] when `index` is not on the board
    /// and [`PlaceError::Occupied`] when the cell already holds a mark.
    /// The board is unchanged in both cases.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), PlaceError> {
        let size = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(PlaceError::OutOfBounds { index, size })?;
        if *cell != Cell::Empty {
            return Err(PlaceError::Occupied(index));
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of marked cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.len() - self.empty_cells().len()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their one-based position.
    pub fn display(&self) -> String {
        let side = self.variant.side();
        let width = self.cells.len().to_string().len();
        let rows: Vec<String> = self
            .cells
            .chunks(side)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        let symbol = match cell {
                            Cell::Empty => (row * side + col + 1).to_string(),
                            Cell::Occupied(mark) => mark.to_string(),
                        };
                        format!("{symbol:>width$}")
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        let separator = vec!["-".repeat(width); side].join("+");
        rows.join(&format!("\n{separator}\n"))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
