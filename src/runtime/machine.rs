//! State machine that walks a state pattern one transition at a time.

use crate::builder::{BuildError, StatePattern};
use crate::core::{State, StateHistory, StepRecord, Transition, Vertex};
use crate::runtime::entry::{self, EntryAction};
use std::collections::HashMap;

const DEFAULT_NAME: &str = "State machine";

/// Moore-model state machine over a [`StatePattern`].
///
/// Behaviour lives on states: actions registered with [`on_enter`](Self::on_enter)
/// and [`on_enter_with_input`](Self::on_enter_with_input) run every time their
/// state is entered. Naming a transition that does not leave the current state
/// is not an error; the machine moves to [`Vertex::Invalid`] and keeps its
/// previous state so the caller can recover with [`reset_to`](Self::reset_to).
///
/// `I` is the type of input delivered to entry actions. Machines built with
/// [`create`](Self::create) take `String` input, and [`advance`](Self::advance)
/// delivers the transition name. Any other input type is chosen through
/// [`named`](Self::named), e.g. `StateMachine::<Door, Knock>::named("door", pattern)`.
pub struct StateMachine<S: State, I = String> {
    name: String,
    pattern: StatePattern<S>,
    current: Vertex<S>,
    previous: Vertex<S>,
    current_transition: Transition<S>,
    entry_actions: HashMap<Vertex<S>, Vec<EntryAction<S, I>>>,
    history: StateHistory<S, I>,
}

impl<S: State> StateMachine<S> {
    /// Create a machine positioned at the target of the pattern's initial transition.
    pub fn create(pattern: StatePattern<S>) -> Result<Self, BuildError> {
        Self::named(DEFAULT_NAME, pattern)
    }

    /// Create a machine, defining its pattern in a closure.
    pub fn create_with<F>(define: F) -> Result<Self, BuildError>
    where
        F: FnOnce(&mut StatePattern<S>) -> Result<(), BuildError>,
    {
        let mut pattern = StatePattern::new();
        define(&mut pattern)?;
        Self::create(pattern)
    }
}

impl<S: State, I: From<String>> StateMachine<S, I> {
    /// Take the transition named `name`, using the name itself as input.
    pub fn advance(&mut self, name: &str) -> &mut Self {
        self.step(name, I::from(name.to_string()))
    }

    /// Take the transition if it exists; otherwise call `on_invalid()`.
    pub fn advance_or<F>(&mut self, name: &str, on_invalid: F) -> &mut Self
    where
        F: FnOnce(),
    {
        if self.lookup_next_transition(name).is_some() {
            self.advance(name)
        } else {
            on_invalid();
            self
        }
    }
}

impl<S: State, I> StateMachine<S, I> {
    /// Create a machine with a display name.
    pub fn named(name: impl Into<String>, pattern: StatePattern<S>) -> Result<Self, BuildError> {
        let initial = pattern
            .initial_transition()
            .cloned()
            .ok_or(BuildError::MissingInitialTransition)?;
        let name = name.into();
        tracing::info!(machine = %name, state = %initial.to, "state machine created");

        let mut history = StateHistory::new();
        history.push(StepRecord::entry(initial.clone()));
        Ok(Self {
            name,
            pattern,
            current: initial.to.clone(),
            previous: Vertex::Initial,
            current_transition: initial,
            entry_actions: HashMap::new(),
            history,
        })
    }

    /// Take the transition named `name`, delivering `input` to entry actions.
    pub fn advance_with(&mut self, name: &str, input: impl Into<I>) -> &mut Self {
        self.step(name, input.into())
    }

    fn step(&mut self, name: &str, input: I) -> &mut Self {
        let Some(transition) = self.lookup_next_transition(name).cloned() else {
            tracing::warn!(
                machine = %self.name,
                state = %self.current,
                transition = name,
                "no such transition from current state"
            );
            self.current = Vertex::Invalid;
            return self;
        };

        tracing::debug!(
            machine = %self.name,
            transition = %transition.name,
            from = %transition.from,
            to = %transition.to,
            "advancing"
        );

        self.previous = std::mem::replace(&mut self.current, transition.to.clone());
        self.current_transition = transition.clone();

        if let Some(actions) = self.entry_actions.get_mut(&transition.to) {
            entry::fire(actions, &transition, &input);
        }
        self.history.push(StepRecord::now(transition, input));
        self
    }

    /// Take the transition if it exists; otherwise call `on_invalid(name, input)`
    /// and leave the machine untouched.
    pub fn advance_or_else<F>(&mut self, name: &str, input: impl Into<I>, on_invalid: F) -> &mut Self
    where
        F: FnOnce(&str, I),
    {
        if self.lookup_next_transition(name).is_some() {
            self.advance_with(name, input)
        } else {
            on_invalid(name, input.into());
            self
        }
    }

    /// Transitions leaving the current state.
    pub fn outgoing_transitions(&self) -> &[Transition<S>] {
        self.pattern.lookup_outgoing_transitions(&self.current)
    }

    /// First transition leaving the current state with the given name.
    pub fn lookup_next_transition(&self, name: &str) -> Option<&Transition<S>> {
        self.outgoing_transitions().iter().find(|t| t.name == name)
    }

    /// Re-base the machine on `state`.
    ///
    /// The pattern's initial transition is replaced by one leading to `state`,
    /// which makes this the way out of a dead end or of [`Vertex::Invalid`].
    /// The current transition still names the last edge actually taken.
    pub fn reset_to(&mut self, state: impl Into<Vertex<S>>) -> Result<&mut Self, BuildError> {
        let state = state.into();
        self.pattern.move_initial(state.clone())?;
        let initial = self
            .pattern
            .initial_transition()
            .cloned()
            .ok_or(BuildError::MissingInitialTransition)?;
        tracing::warn!(machine = %self.name, from = %self.current, to = %state, "machine reset");

        self.history.push(StepRecord::entry(initial));
        self.current = state;
        self.previous = Vertex::Initial;
        Ok(self)
    }

    /// Register an action run whenever `state` is entered.
    pub fn on_enter<F>(&mut self, state: impl Into<Vertex<S>>, action: F) -> &mut Self
    where
        F: FnMut() + Send + 'static,
    {
        self.register(state.into(), EntryAction::plain(action))
    }

    /// Register an action receiving the transition and its input whenever `state` is entered.
    pub fn on_enter_with_input<F>(&mut self, state: impl Into<Vertex<S>>, action: F) -> &mut Self
    where
        F: FnMut(&Transition<S>, &I) + Send + 'static,
    {
        self.register(state.into(), EntryAction::with_input(action))
    }

    fn register(&mut self, state: Vertex<S>, action: EntryAction<S, I>) -> &mut Self {
        self.entry_actions.entry(state).or_default().push(action);
        self
    }

    pub fn lookup_state_by_name(&self, name: &str) -> Option<&Vertex<S>> {
        self.pattern.lookup_state_by_name(name)
    }

    pub fn current_state(&self) -> &Vertex<S> {
        &self.current
    }

    pub fn previous_state(&self) -> &Vertex<S> {
        &self.previous
    }

    pub fn current_transition(&self) -> &Transition<S> {
        &self.current_transition
    }

    pub fn pattern(&self) -> &StatePattern<S> {
        &self.pattern
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &StateHistory<S, I> {
        &self.history
    }
}
