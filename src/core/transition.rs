//! Named transitions between vertices.

use super::state::{State, Vertex};
use serde::{Deserialize, Serialize};

/// A named, directed edge of the state graph.
///
/// Transitions are immutable values. The `with_*` methods derive a new
/// transition and leave the original untouched.
///
/// # Example
///
/// ```rust
/// use statewalk::core::{Transition, Vertex};
/// use statewalk::state_enum;
///
/// state_enum! {
///     enum Door {
///         Opened,
///         Closed,
///     }
/// }
///
/// let close = Transition::new("close", Door::Opened, Door::Closed);
/// let slam = close.with_name("slam").with_description("loudly");
///
/// assert_eq!(close.name, "close");
/// assert_eq!(slam.to, Vertex::State(Door::Closed));
/// assert_eq!(slam.description.as_deref(), Some("loudly"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    pub name: String,
    pub from: Vertex<S>,
    pub to: Vertex<S>,
    pub description: Option<String>,
}

impl<S: State> Transition<S> {
    pub fn new(
        name: impl Into<String>,
        from: impl Into<Vertex<S>>,
        to: impl Into<Vertex<S>>,
    ) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            description: None,
        }
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    pub fn with_from(&self, from: impl Into<Vertex<S>>) -> Self {
        Self {
            from: from.into(),
            ..self.clone()
        }
    }

    pub fn with_to(&self, to: impl Into<Vertex<S>>) -> Self {
        Self {
            to: to.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self.clone()
        }
    }

    /// Check the structural rules every edge must obey.
    ///
    /// Nothing leaves `Stop` and nothing enters `Initial`. Returns the reason
    /// on violation.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.from == Vertex::Stop {
            return Err("Stop has no outgoing transitions");
        }
        if self.to == Vertex::Initial {
            return Err("no transition may lead back into Initial");
        }
        Ok(())
    }
}
