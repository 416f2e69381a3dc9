//! Notifications emitted to rendering collaborators.
//!
//! The engine never reads anything back from its observers. Handlers are
//! called synchronously, in subscription order, at the point the event
//! happens.

use crate::rules::Line;
use crate::{Mark, MatchOutcome, Team};
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// Result of a round, as seen by observers.
///
/// A result with no winning team is the reset sentinel published at
/// round start so observers can clear prior win highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    /// Team that completed the line, `None` for the reset sentinel.
    pub winning_team: Option<Team>,
    /// Completed line, `None` for the reset sentinel.
    pub win_line: Option<Line>,
}

impl RoundResult {
    /// Reset sentinel: no winner yet.
    pub fn reset() -> Self {
        Self {
            winning_team: None,
            win_line: None,
        }
    }

    /// A decided round.
    pub fn decided(team: Team, line: Line) -> Self {
        Self {
            winning_team: Some(team),
            win_line: Some(line),
        }
    }

    /// Returns true for a decided round, false for the reset sentinel.
    pub fn is_decisive(&self) -> bool {
        self.winning_team.is_some()
    }
}

/// Everything observers may be told about a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum MatchEvent {
    /// A round started; carries the reset sentinel.
    RoundReset(RoundResult),
    /// A mark was placed.
    MoveAccepted {
        /// Board index of the placed mark.
        index: usize,
        /// Mark that was placed.
        mark: Mark,
    },
    /// The team to move changed; `None` once a round is decided.
    TurnChanged(Option<Team>),
    /// A round was won.
    RoundDecided(RoundResult),
    /// The match reached a terminal outcome. Published at most once.
    MatchDecided(MatchOutcome),
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&MatchEvent)>;

/// Synchronous observer registry.
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl EventBus {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler called for every subsequent event.
    #[instrument(skip_all)]
    pub fn subscribe(&mut self, handler: impl FnMut(&MatchEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        debug!(subscription = id.0, "Handler subscribed");
        id
    }

    /// Removes a handler. Returns false if the id was not subscribed.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        let removed = self.handlers.len() != before;
        debug!(subscription = id.0, removed, "Handler unsubscribed");
        removed
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Delivers an event to every handler in subscription order.
    #[instrument(skip(self), fields(subscribers = self.handlers.len()))]
    pub fn publish(&mut self, event: MatchEvent) {
        trace!("Publishing event");
        for (_, handler) in &mut self.handlers {
            handler(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.handlers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
