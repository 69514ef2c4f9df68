//! Rendering of patterns and machines for people and tools.
//!
//! - Mermaid and PlantUML diagram text
//! - A state/transition table
//! - A JSON document of the graph

mod error;
mod json;
mod mermaid;
mod plantuml;
mod style;
mod table;

pub use error::ExportError;
pub use json::to_json;
pub use mermaid::{to_mermaid, to_mermaid_with};
pub use plantuml::{to_plantuml, to_plantuml_with};
pub use style::DiagramStyle;
pub use table::{to_transition_table, TransitionTable, NO_TRANSITION};

use crate::core::{State, Vertex};

/// Diagram endpoint label; both sentinels draw as the pseudo-state `[*]`.
pub(crate) fn marker<S: State>(vertex: &Vertex<S>) -> &str {
    match vertex {
        Vertex::Initial | Vertex::Stop => "[*]",
        other => other.name(),
    }
}
