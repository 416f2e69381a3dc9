//! Game rules for the match engine.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated
//! from board storage so the round controller and the invariants can
//! share them.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_stalemate};
pub use win::{BEGINNER_LINES, HYBRID_SHORT_LINES, Line, PRO_LINES, check_winner, find_winning_line, line_tables};
