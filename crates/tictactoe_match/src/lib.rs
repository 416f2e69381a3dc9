//! Tic-tac-toe match engine.
//!
//! Plays multi-round tic-tac-toe matches between a home and a visiting
//! team across several board variants, and scores them under best-of-N
//! or open-ended formats.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid; win lines come from static per-variant tables
//! - **Round**: turn alternation, move validation and round termination
//! - **Scorer**: aggregates round results and decides the match
//! - **Session**: wires configuration, rounds, scoring and observers together
//!
//! # Example
//!
//! ```
//! use tictactoe_match::{Match, MatchDetails, MatchEvent, MatchFormat, RoundRng, Variant};
//!
//! let details = MatchDetails::new(MatchFormat::Bo3, "Lions", "Tigers", Variant::Beginner);
//! let mut game = Match::new(&details, RoundRng::new(7));
//! game.subscribe(|event| {
//!     if let MatchEvent::MatchDecided(outcome) = event {
//!         println!("Match over: {outcome}");
//!     }
//! });
//!
//! game.new_round();
//! for index in [0, 3, 1, 4, 2] {
//!     game.make_move(index);
//! }
//! assert_eq!(game.score().rounds_played(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod events;
mod phases;
mod rng;
mod round;
mod score;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, PlaceError};
pub use config::{ConfigSource, MatchDetails};
pub use events::{EventBus, MatchEvent, RoundResult, SubscriptionId};
pub use phases::RoundPhase;
pub use rng::RoundRng;
pub use round::{MoveOutcome, RoundController};
pub use rules::{Line, find_winning_line};
pub use score::{MatchFormat, MatchOutcome, MatchScore, MatchScorer, evaluate};
pub use session::Match;
pub use types::{Board, Cell, Mark, Team, Variant};
