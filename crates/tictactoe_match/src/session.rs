//! Match sessions.
//!
//! A [`Match`] wires the pieces together: configuration feeds the round
//! controller, round results feed the scorer, and everything observers
//! need is published on the event bus.

use crate::config::ConfigSource;
use crate::events::{EventBus, MatchEvent, SubscriptionId};
use crate::round::{MoveOutcome, RoundController};
use crate::{Board, MatchFormat, MatchOutcome, MatchScore, MatchScorer, RoundRng, Team, Variant};
use tracing::{debug, info, instrument};

/// One match between a home and a visiting team.
#[derive(Debug)]
pub struct Match {
    home_team: String,
    visitor_team: String,
    round: RoundController,
    scorer: MatchScorer,
    rounds_started: u32,
    bus: EventBus,
}

impl Match {
    /// Creates a match from configuration. No round is started.
    #[instrument(skip_all, fields(format = %config.match_format(), variant = %config.variant()))]
    pub fn new(config: &impl ConfigSource, rng: RoundRng) -> Self {
        info!(
            home = config.home_team(),
            visitor = config.visitor_team(),
            "Creating match"
        );
        Self {
            home_team: config.home_team().to_string(),
            visitor_team: config.visitor_team().to_string(),
            round: RoundController::new(config.variant(), rng),
            scorer: MatchScorer::new(config.match_format()),
            rounds_started: 0,
            bus: EventBus::new(),
        }
    }

    /// Registers an observer for every subsequent event.
    pub fn subscribe(&mut self, handler: impl FnMut(&MatchEvent) + 'static) -> SubscriptionId {
        self.bus.subscribe(handler)
    }

    /// Removes an observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    /// Starts a new round and announces the team playing `X`.
    #[instrument(skip(self), fields(round = self.rounds_started + 1))]
    pub fn new_round(&mut self) {
        let reset = self.round.new_round();
        self.rounds_started += 1;
        self.scorer.record(&reset);
        self.bus.publish(MatchEvent::RoundReset(reset));
        self.bus.publish(MatchEvent::TurnChanged(self.round.team_to_move()));
    }

    /// Plays the next mark at `index`.
    ///
    /// Ignored moves publish nothing. A move that decides the round also
    /// feeds the scorer, which may end the match.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.round.make_move(index);
        match outcome {
            MoveOutcome::Ignored => {}
            MoveOutcome::Accepted { placed, next_team } => {
                self.bus.publish(MatchEvent::MoveAccepted {
                    index: placed.index,
                    mark: placed.mark,
                });
                self.bus.publish(MatchEvent::TurnChanged(Some(next_team)));
            }
            MoveOutcome::Decided { placed, result } => {
                self.bus.publish(MatchEvent::MoveAccepted {
                    index: placed.index,
                    mark: placed.mark,
                });
                self.bus.publish(MatchEvent::TurnChanged(None));
                self.bus.publish(MatchEvent::RoundDecided(result));
                if let Some(match_outcome) = self.scorer.record(&result) {
                    self.bus.publish(MatchEvent::MatchDecided(match_outcome));
                } else if self.scorer.is_decided() {
                    debug!("Round played after match end, score unchanged");
                }
            }
        }
        outcome
    }

    /// Marks the round winner as acknowledged by the UI.
    pub fn acknowledge_winner(&mut self) {
        self.round.acknowledge_winner();
    }

    /// Returns true once the round winner was acknowledged.
    pub fn winner_acknowledged(&self) -> bool {
        self.round.winner_acknowledged()
    }

    /// Display name for a team.
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::Home => &self.home_team,
            Team::Visitor => &self.visitor_team,
        }
    }

    /// Current score.
    pub fn score(&self) -> MatchScore {
        self.scorer.score()
    }

    /// Terminal outcome, or `None` while the match is undecided.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.scorer.is_decided().then(|| self.scorer.outcome())
    }

    /// Scoring format.
    pub fn format(&self) -> MatchFormat {
        self.scorer.format()
    }

    /// Board variant.
    pub fn variant(&self) -> Variant {
        self.round.variant()
    }

    /// Team to move in the current round.
    pub fn team_to_move(&self) -> Option<Team> {
        self.round.team_to_move()
    }

    /// Board of the current round.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Number of rounds started so far.
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// The underlying round controller.
    pub fn round(&self) -> &RoundController {
        &self.round
    }

    /// The underlying scorer.
    pub fn scorer(&self) -> &MatchScorer {
        &self.scorer
    }
}
