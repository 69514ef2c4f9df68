//! Structural problems found in a state graph.

use thiserror::Error;

/// A single finding reported by [`GraphRules`](super::GraphRules).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphViolation {
    #[error("Graph has no initial transition")]
    MissingInitialTransition,

    #[error("State '{state}' cannot be reached from the initial state")]
    UnreachableState { state: String },

    #[error("State '{state}' has no outgoing transitions")]
    DeadEndState { state: String },

    #[error("Transition '{name}' from '{from}' is defined more than once; later definitions are never taken")]
    ShadowedTransition { name: String, from: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
