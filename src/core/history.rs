//! Step history tracking.
//!
//! Every transition the engine actually takes is recorded together with the
//! input it delivered and a timestamp. Records are immutable values.
//!
//! The input type `I` defaults to `String`, the input type of machines built
//! with `StateMachine::create`.

use super::state::{State, Vertex};
use super::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step taken by a state machine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "I: Serialize", deserialize = "I: Deserialize<'de>"))]
pub struct StepRecord<S: State, I = String> {
    /// The transition that was taken
    pub transition: Transition<S>,
    /// The input delivered to entry actions; `None` for initial transitions
    pub input: Option<I>,
    /// When the step occurred
    pub timestamp: DateTime<Utc>,
}

impl<S: State, I> StepRecord<S, I> {
    /// A step that delivered `input`.
    pub fn now(transition: Transition<S>, input: impl Into<I>) -> Self {
        Self {
            transition,
            input: Some(input.into()),
            timestamp: Utc::now(),
        }
    }

    /// A step taken without input, such as entering through the initial transition.
    pub fn entry(transition: Transition<S>) -> Self {
        Self {
            transition,
            input: None,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of steps.
///
/// `record` is pure and returns a new history with the step added. The
/// engine appends its own steps in place, so a running machine pays O(1)
/// per step.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{StateHistory, StepRecord, Transition, Vertex};
/// use statewalk::state_enum;
///
/// state_enum! {
///     enum Phase {
///         One,
///         Two,
///     }
/// }
///
/// let history: StateHistory<Phase> = StateHistory::new()
///     .record(StepRecord::entry(Transition::new("initial", Vertex::Initial, Phase::One)))
///     .record(StepRecord::now(Transition::new("next", Phase::One, Phase::Two), "next"));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Initial -> One -> Two
/// assert_eq!(path[2], &Vertex::State(Phase::Two));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound(serialize = "I: Serialize", deserialize = "I: Deserialize<'de>"))]
pub struct StateHistory<S: State, I = String> {
    steps: Vec<StepRecord<S, I>>,
}

impl<S: State, I> Default for StateHistory<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Clone> StateHistory<S, I> {
    /// Record a step, returning a new history.
    ///
    /// This does not mutate the existing history.
    pub fn record(&self, step: StepRecord<S, I>) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }
}

impl<S: State, I> StateHistory<S, I> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step in place.
    pub(crate) fn push(&mut self, step: StepRecord<S, I>) {
        self.steps.push(step);
    }

    /// Get the path of vertices traversed.
    ///
    /// Returns the source of the first step, then the target of each step.
    /// A reset shows up as a step out of `Initial`, so the path may jump.
    pub fn get_path(&self) -> Vec<&Vertex<S>> {
        let mut path = Vec::new();
        if let Some(first) = self.steps.first() {
            path.push(&first.transition.from);
        }
        for step in &self.steps {
            path.push(&step.transition.to);
        }
        path
    }

    /// Calculate total duration from first to last step.
    ///
    /// Returns `None` if there are no steps.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All steps in order.
    pub fn steps(&self) -> &[StepRecord<S, I>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
