//! Rendering options for diagram export.

use serde::{Deserialize, Serialize};

/// Styling tokens used when rendering diagrams.
///
/// The defaults match what the PlantUML and Mermaid live editors render well.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    /// PlantUML colour applied to the machine's current state box
    pub current_state_color: String,
    /// PlantUML arrow style applied to the machine's current transition
    pub current_transition_style: String,
    /// Indentation of Mermaid transition lines
    pub mermaid_indent: String,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            current_state_color: "#palegreen".to_string(),
            current_transition_style: "[#green]".to_string(),
            mermaid_indent: "    ".to_string(),
        }
    }
}
