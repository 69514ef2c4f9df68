//! Cursor-based graph builder.

use crate::builder::error::BuildError;
use crate::core::{State, Transition, Vertex};
use std::collections::HashMap;

/// Name given to the single edge leaving `Initial`.
pub const INITIAL_TRANSITION: &str = "initial";

/// Name given to edges created by [`StatePattern::stop`].
pub const STOP_TRANSITION: &str = "stop";

/// A state graph assembled through chained builder calls.
///
/// The builder keeps a cursor, the "current state", that most calls read or
/// advance. `t(name)` adds a self-loop on the cursor; a following `s(state)`
/// moves the cursor and retargets that self-loop to `state`, so a chain reads
/// "push leads to Next" without repeating state names. Transitions that name
/// their target explicitly (`t_to`, `t_between`) are never retargeted.
///
/// # Example
///
/// ```rust
/// use statewalk::builder::{BuildError, StatePattern};
/// use statewalk::core::Vertex;
/// use statewalk::state_enum;
///
/// state_enum! {
///     enum Turnstile {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// # fn main() -> Result<(), BuildError> {
/// let mut pattern = StatePattern::<Turnstile>::new();
/// pattern
///     .initial(Turnstile::Locked)?
///     .t("push")?
///     .t("coin")?
///     .s(Turnstile::Unlocked)?
///     .t("coin")?
///     .t("push")?
///     .s(Turnstile::Locked)?;
///
/// let from_locked = pattern.lookup_outgoing_transitions(&Turnstile::Locked.into());
/// assert_eq!(from_locked.len(), 2);
/// assert_eq!(from_locked[1].to, Vertex::State(Turnstile::Unlocked));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct StatePattern<S: State> {
    states: Vec<Vertex<S>>,
    transitions: Vec<Transition<S>>,
    outgoing: HashMap<Vertex<S>, Vec<Transition<S>>>,
    current: Option<Vertex<S>>,
    /// Last self-loop added by `t`/`t_with_description`, retargeted by the next `s`.
    pending_simple: Option<Transition<S>>,
    /// Source of the last `stop()` with no transition added since.
    last_stop_from: Option<Vertex<S>>,
}

impl<S: State> StatePattern<S> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            outgoing: HashMap::new(),
            current: None,
            pending_simple: None,
            last_stop_from: None,
        }
    }

    /// Add the entry edge `Initial -> state` and place the cursor on `state`.
    ///
    /// Fails with [`BuildError::AlreadyInitialized`] when an entry edge already
    /// exists; use [`move_initial`](Self::move_initial) to re-base instead.
    pub fn initial(&mut self, state: impl Into<Vertex<S>>) -> Result<&mut Self, BuildError> {
        if let Some(existing) = self.initial_transition() {
            return Err(BuildError::AlreadyInitialized {
                state: existing.to.name().to_string(),
            });
        }
        self.install_initial(state.into())
    }

    /// Replace the entry edge so that it leads to `state`.
    ///
    /// The old entry edge is removed from both the transition list and the
    /// outgoing index; the new one is appended like any other transition.
    pub fn move_initial(&mut self, state: impl Into<Vertex<S>>) -> Result<&mut Self, BuildError> {
        self.install_initial(state.into())
    }

    fn install_initial(&mut self, state: Vertex<S>) -> Result<&mut Self, BuildError> {
        let transition = Transition::new(INITIAL_TRANSITION, Vertex::Initial, state.clone());
        check(&transition)?;

        self.transitions.retain(|t| t.from != Vertex::Initial);
        self.outgoing.remove(&Vertex::Initial);

        self.register(Vertex::Initial);
        self.register(state.clone());
        self.transitions.push(transition.clone());
        self.outgoing.insert(Vertex::Initial, vec![transition]);
        tracing::debug!(state = %state, "initial transition set");

        self.current = Some(state);
        self.pending_simple = None;
        self.last_stop_from = None;
        Ok(self)
    }

    /// Add a self-loop named `name` on the current state.
    ///
    /// A following [`s`](Self::s) retargets it.
    pub fn t(&mut self, name: impl Into<String>) -> Result<&mut Self, BuildError> {
        let current = self.cursor()?;
        self.add_simple(Transition::new(name, current.clone(), current))
    }

    /// Same as [`t`](Self::t) with a description attached.
    pub fn t_with_description(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        let current = self.cursor()?;
        self.add_simple(Transition::new(name, current.clone(), current).with_description(description))
    }

    fn add_simple(&mut self, transition: Transition<S>) -> Result<&mut Self, BuildError> {
        self.insert(transition.clone())?;
        self.pending_simple = Some(transition);
        self.last_stop_from = None;
        Ok(self)
    }

    /// Add `current -> to` and move the cursor to `to`.
    ///
    /// When `to` is `Stop` the cursor stays where it was.
    pub fn t_to(
        &mut self,
        name: impl Into<String>,
        to: impl Into<Vertex<S>>,
    ) -> Result<&mut Self, BuildError> {
        let current = self.cursor()?;
        self.add_explicit(Transition::new(name, current, to))
    }

    pub fn t_to_with_description(
        &mut self,
        name: impl Into<String>,
        to: impl Into<Vertex<S>>,
        description: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        let current = self.cursor()?;
        self.add_explicit(Transition::new(name, current, to).with_description(description))
    }

    /// Add a fully explicit edge `from -> to`.
    ///
    /// The cursor moves to `to`, or to `from` when `to` is `Stop`.
    pub fn t_between(
        &mut self,
        name: impl Into<String>,
        from: impl Into<Vertex<S>>,
        to: impl Into<Vertex<S>>,
    ) -> Result<&mut Self, BuildError> {
        self.add_explicit(Transition::new(name, from, to))
    }

    pub fn t_between_with_description(
        &mut self,
        name: impl Into<String>,
        from: impl Into<Vertex<S>>,
        to: impl Into<Vertex<S>>,
        description: impl Into<String>,
    ) -> Result<&mut Self, BuildError> {
        self.add_explicit(Transition::new(name, from, to).with_description(description))
    }

    fn add_explicit(&mut self, transition: Transition<S>) -> Result<&mut Self, BuildError> {
        self.insert(transition.clone())?;
        self.current = Some(if transition.to == Vertex::Stop {
            transition.from
        } else {
            transition.to
        });
        self.pending_simple = None;
        self.last_stop_from = None;
        Ok(self)
    }

    /// Insert a prebuilt transition.
    ///
    /// The transition is registered under its own source state. The cursor
    /// does not move.
    pub fn add_transition(&mut self, transition: Transition<S>) -> Result<&mut Self, BuildError> {
        self.insert(transition)?;
        self.pending_simple = None;
        self.last_stop_from = None;
        Ok(self)
    }

    /// Move the cursor to `state`.
    ///
    /// If the previous call was a plain `t(name)`, that self-loop is replaced
    /// in place by a copy leading to `state`.
    pub fn s(&mut self, state: impl Into<Vertex<S>>) -> Result<&mut Self, BuildError> {
        let state = state.into();
        if state == Vertex::Invalid {
            return Err(BuildError::ReservedState {
                state: state.name().to_string(),
            });
        }
        if let Some(pending) = self.pending_simple.take() {
            let retargeted = pending.with_to(state.clone());
            check(&retargeted)?;
            self.replace(&pending, retargeted);
        }
        self.register(state.clone());
        self.current = Some(state);
        Ok(self)
    }

    /// Add `current -> Stop` named "stop". The cursor stays on the current state.
    ///
    /// Fails with [`BuildError::ConsecutiveStop`] when the cursor is `Stop` or
    /// when the previous structural call was a `stop()` from the same state.
    pub fn stop(&mut self) -> Result<&mut Self, BuildError> {
        let current = self.cursor()?;
        if current == Vertex::Stop || self.last_stop_from.as_ref() == Some(&current) {
            return Err(BuildError::ConsecutiveStop {
                state: current.name().to_string(),
            });
        }

        let transition = Transition::new(STOP_TRANSITION, current.clone(), Vertex::Stop);
        if self.transitions.contains(&transition) {
            self.register(Vertex::Stop);
        } else {
            self.insert(transition)?;
        }
        self.pending_simple = None;
        self.last_stop_from = Some(current);
        Ok(self)
    }

    /// Outgoing transitions of `state` in insertion order. Empty when there are none.
    pub fn lookup_outgoing_transitions(&self, state: &Vertex<S>) -> &[Transition<S>] {
        self.outgoing.get(state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The single transition leaving `Initial`, once `initial` has been called.
    pub fn initial_transition(&self) -> Option<&Transition<S>> {
        self.outgoing
            .get(&Vertex::Initial)
            .and_then(|transitions| transitions.first())
    }

    /// Find a registered state by its name.
    pub fn lookup_state_by_name(&self, name: &str) -> Option<&Vertex<S>> {
        self.states.iter().find(|state| state.name() == name)
    }

    /// All transitions in insertion order.
    pub fn transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// All registered states, sentinels included, in first-seen order.
    pub fn states(&self) -> &[Vertex<S>] {
        &self.states
    }

    /// The builder's cursor.
    pub fn current_state(&self) -> Option<&Vertex<S>> {
        self.current.as_ref()
    }

    fn cursor(&self) -> Result<Vertex<S>, BuildError> {
        self.current.clone().ok_or(BuildError::NoCurrentState)
    }

    fn register(&mut self, state: Vertex<S>) {
        if !self.states.contains(&state) {
            self.states.push(state);
        }
    }

    fn insert(&mut self, transition: Transition<S>) -> Result<(), BuildError> {
        check(&transition)?;
        if transition.from == Vertex::Initial {
            return Err(rejected(&transition, "only the initial transition may leave Initial"));
        }
        self.register(transition.from.clone());
        self.register(transition.to.clone());
        tracing::debug!(
            name = %transition.name,
            from = %transition.from,
            to = %transition.to,
            "transition added"
        );
        self.outgoing
            .entry(transition.from.clone())
            .or_default()
            .push(transition.clone());
        self.transitions.push(transition);
        Ok(())
    }

    fn replace(&mut self, old: &Transition<S>, new: Transition<S>) {
        tracing::debug!(name = %old.name, from = %old.from, to = %new.to, "transition retargeted");
        if let Some(list) = self.outgoing.get_mut(&old.from) {
            if let Some(index) = list.iter().rposition(|t| t == old) {
                list[index] = new.clone();
            }
        }
        if let Some(index) = self.transitions.iter().rposition(|t| t == old) {
            self.transitions[index] = new;
        }
    }
}

impl<S: State> Default for StatePattern<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn check<S: State>(transition: &Transition<S>) -> Result<(), BuildError> {
    transition
        .validate()
        .map_err(|reason| rejected(transition, reason))?;
    if transition.from == Vertex::Invalid || transition.to == Vertex::Invalid {
        return Err(rejected(transition, "Invalid is not part of a state graph"));
    }
    Ok(())
}

fn rejected<S: State>(transition: &Transition<S>, reason: &str) -> BuildError {
    BuildError::InvalidTransition {
        name: transition.name.clone(),
        from: transition.from.name().to_string(),
        to: transition.to.name().to_string(),
        reason: reason.to_string(),
    }
}
