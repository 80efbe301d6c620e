//! State transition history tracking.
//!
//! Provides an optional audit trail of the transitions a machine has
//! applied, in the order they happened.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a recorded transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// A declared transition, taken through `process_event` or
    /// `transition_to`.
    Event,
    /// An administrative return to the default state.
    Reset,
}

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "pending",
///     to: "running",
///     timestamp: Utc::now(),
///     kind: TransitionKind::Event,
/// };
/// assert_eq!(transition.kind, TransitionKind::Event);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    pub kind: TransitionKind,
}

/// Ordered history of state transitions.
///
/// When created with a limit, only the most recent `limit` records are
/// kept.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, StateTransition, TransitionKind};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
///
/// history.record(StateTransition {
///     from: 'a',
///     to: 'b',
///     timestamp: Utc::now(),
///     kind: TransitionKind::Event,
/// });
/// history.record(StateTransition {
///     from: 'b',
///     to: 'c',
///     timestamp: Utc::now(),
///     kind: TransitionKind::Event,
/// });
///
/// assert_eq!(history.get_path(), vec![&'a', &'b', &'c']);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create a history keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Get the record limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition, dropping the oldest records past the limit.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            if self.transitions.len() > limit {
                let excess = self.transitions.len() - limit;
                self.transitions.drain(..excess);
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the `from` state of the
    /// oldest kept record, then the `to` state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all kept transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Number of kept records.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
