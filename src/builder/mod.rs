//! Builder API for state graph construction.
//!
//! `StatePattern` assembles a transition graph through chained calls that
//! share an implicit cursor; `state_enum!` removes the boilerplate of
//! declaring states.

pub mod error;
pub mod macros;
pub mod pattern;

pub use error::BuildError;
pub use pattern::{StatePattern, INITIAL_TRANSITION, STOP_TRANSITION};
