//! Core value types of the toolkit.
//!
//! This module contains the leaves everything else is built from:
//! - State definitions via the `State` trait and the sentinel-aware `Vertex`
//! - Immutable `Transition` values
//! - Step history recorded by the engine

mod history;
mod state;
mod transition;

pub use history::{StateHistory, StepRecord};
pub use state::{State, Vertex};
pub use transition::Transition;
