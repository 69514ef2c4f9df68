//! JSON export of a pattern's graph.

use super::ExportError;
use crate::builder::StatePattern;
use crate::core::{State, Transition, Vertex};
use serde::Serialize;

#[derive(Serialize)]
#[serde(bound = "")]
struct GraphDocument<'a, S: State> {
    states: &'a [Vertex<S>],
    transitions: &'a [Transition<S>],
}

/// Serialize the states and transitions of `pattern` as pretty-printed JSON.
///
/// Both lists keep insertion order.
pub fn to_json<S: State>(pattern: &StatePattern<S>) -> Result<String, ExportError> {
    let document = GraphDocument {
        states: pattern.states(),
        transitions: pattern.transitions(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}
