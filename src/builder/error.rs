//! Construction errors for state patterns and machines.

use thiserror::Error;

/// Errors that can occur while building a state pattern or creating a machine from one.
///
/// All of these are programmer errors in the graph definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("initial() already called (initial state is '{state}'). Use move_initial() to re-base")]
    AlreadyInitialized { state: String },

    #[error("Can not make consecutive stop transitions from state '{state}'")]
    ConsecutiveStop { state: String },

    #[error("Invalid transition '{name}' from '{from}' to '{to}': {reason}")]
    InvalidTransition {
        name: String,
        from: String,
        to: String,
        reason: String,
    },

    #[error("'{state}' is reserved and cannot be used as a builder state")]
    ReservedState { state: String },

    #[error("State pattern does not contain an initial transition. Call .initial(state) first")]
    MissingInitialTransition,

    #[error("No current state. Call .initial(state) or .s(state) before adding transitions")]
    NoCurrentState,
}
