//! Entry actions attached to states.

use crate::core::{State, Transition};
use std::fmt;

/// Callback that takes no arguments.
pub type PlainAction = Box<dyn FnMut() + Send>;

/// Callback receiving the transition taken and the input delivered with it.
pub type InputAction<S, I = String> = Box<dyn FnMut(&Transition<S>, &I) + Send>;

/// Code run when a state is entered.
///
/// Both kinds may be registered for the same state. On entry every `Plain`
/// action runs first, then every `WithInput` action, each in registration order.
pub enum EntryAction<S: State, I = String> {
    Plain(PlainAction),
    WithInput(InputAction<S, I>),
}

impl<S: State, I> EntryAction<S, I> {
    pub fn plain<F>(action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::Plain(Box::new(action))
    }

    pub fn with_input<F>(action: F) -> Self
    where
        F: FnMut(&Transition<S>, &I) + Send + 'static,
    {
        Self::WithInput(Box::new(action))
    }
}

impl<S: State, I> fmt::Debug for EntryAction<S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(_) => f.write_str("EntryAction::Plain"),
            Self::WithInput(_) => f.write_str("EntryAction::WithInput"),
        }
    }
}

/// Run the actions registered for an entered state.
pub(crate) fn fire<S: State, I>(
    actions: &mut [EntryAction<S, I>],
    transition: &Transition<S>,
    input: &I,
) {
    for action in actions.iter_mut() {
        if let EntryAction::Plain(run) = action {
            run();
        }
    }
    for action in actions.iter_mut() {
        if let EntryAction::WithInput(run) = action {
            run(transition, input);
        }
    }
}
