//! Round controller.
//!
//! Drives one round at a time: resets the board, assigns marks to teams,
//! alternates turns and ends the round when a line is completed.

use crate::action::Move;
use crate::invariants::{InvariantSet, RoundInvariants};
use crate::phases::RoundPhase;
use crate::rng::RoundRng;
use crate::rules;
use crate::{Board, Cell, Mark, RoundResult, Team, Variant};
use tracing::{debug, info, instrument};

/// What a call to [`RoundController::make_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: occupied or out-of-range cell, or no round in progress.
    Ignored,
    /// The mark was placed and the round continues.
    Accepted {
        /// The placed move.
        placed: Move,
        /// Team owning the next mark.
        next_team: Team,
    },
    /// The mark was placed and completed a line.
    Decided {
        /// The placed move.
        placed: Move,
        /// Winner and line.
        result: RoundResult,
    },
}

/// State machine for a single round.
///
/// The board, move counter and team-to-mark mapping are owned here and
/// replaced by [`RoundController::new_round`].
#[derive(Debug, Clone)]
pub struct RoundController {
    variant: Variant,
    board: Board,
    history: Vec<Move>,
    x_team: Team,
    phase: RoundPhase,
    winner_acknowledged: bool,
    rng: RoundRng,
}

impl RoundController {
    /// Creates a controller for the given variant. No round is started.
    #[instrument(skip(rng))]
    pub fn new(variant: Variant, rng: RoundRng) -> Self {
        Self {
            variant,
            board: Board::new(variant),
            history: Vec::new(),
            x_team: Team::Home,
            phase: RoundPhase::NotStarted,
            winner_acknowledged: false,
            rng,
        }
    }

    /// Starts a new round.
    ///
    /// Replaces the board, zeroes the move counter and redraws which team
    /// plays `X`. Returns the reset sentinel for observers.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn new_round(&mut self) -> RoundResult {
        self.board = Board::new(self.variant);
        self.history.clear();
        self.x_team = self.rng.draw_x_team();
        self.phase = RoundPhase::InProgress;
        info!(x_team = %self.x_team, "Round started");
        RoundResult::reset()
    }

    /// Plays the next mark at `index`.
    ///
    /// Calls outside an in-progress round and placements on occupied or
    /// out-of-range cells are ignored without any state change.
    #[instrument(skip(self), fields(phase = %self.phase, move_count = self.history.len()))]
    pub fn make_move(&mut self, index: usize) -> MoveOutcome {
        if !self.phase.accepts_moves() {
            debug!("No round in progress, ignoring move");
            return MoveOutcome::Ignored;
        }

        let mark = self.current_mark();
        if let Err(err) = self.board.place(index, mark) {
            debug!(%err, "Placement refused");
            return MoveOutcome::Ignored;
        }

        let placed = Move::new(index, mark);
        self.history.push(placed);

        debug_assert!(
            RoundInvariants::check_all(self).is_ok(),
            "Round invariants violated after {placed}"
        );

        if let Some(line) = rules::find_winning_line(&self.board) {
            self.phase = RoundPhase::Ended;
            // The line's first cell names the winner; it always holds a mark.
            let winning_mark = self
                .board
                .get(line.first())
                .and_then(Cell::mark)
                .unwrap_or(mark);
            let winner = self.team_for(winning_mark);
            info!(%winner, %line, "Round decided");
            return MoveOutcome::Decided {
                placed,
                result: RoundResult::decided(winner, line),
            };
        }

        if rules::is_stalemate(&self.board) {
            info!("Board full with no winning line");
        }

        MoveOutcome::Accepted {
            placed,
            next_team: self.team_for(self.current_mark()),
        }
    }

    /// Records that the UI acknowledged the round winner.
    ///
    /// Only sets a flag for collaborators; play is unaffected.
    #[instrument(skip(self))]
    pub fn acknowledge_winner(&mut self) {
        self.winner_acknowledged = true;
    }

    /// Returns true once [`RoundController::acknowledge_winner`] was called.
    pub fn winner_acknowledged(&self) -> bool {
        self.winner_acknowledged
    }

    /// Team playing the given mark this round.
    pub fn team_for(&self, mark: Mark) -> Team {
        match mark {
            Mark::X => self.x_team,
            Mark::O => self.x_team.opponent(),
        }
    }

    /// Mark the next accepted move will place.
    pub fn current_mark(&self) -> Mark {
        Mark::for_move(self.history.len())
    }

    /// Team to move, or `None` when no round is in progress.
    pub fn team_to_move(&self) -> Option<Team> {
        self.phase
            .accepts_moves()
            .then(|| self.team_for(self.current_mark()))
    }

    /// True when the board is full and nobody completed a line.
    pub fn is_stalemate(&self) -> bool {
        self.phase.accepts_moves() && rules::is_stalemate(&self.board)
    }

    /// Number of accepted moves this round.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Accepted moves this round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Variant played by this controller.
    pub fn variant(&self) -> Variant {
        self.variant
    }
}
