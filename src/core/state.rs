//! State capability and the sentinel-aware vertex type.
//!
//! User states implement [`State`]. Inside a graph every state is carried as a
//! [`Vertex`], which adds the three reserved sentinels (`Initial`, `Stop` and
//! `Invalid`) to the caller's own states.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are identified by value equality, so plain enums and small
/// records both work. The name is used for display and for lookups from
/// the console; the description shows up in PlantUML output.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transitions and history records
/// - `Eq` + `Hash`: states key the outgoing-transition index
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: graphs and histories can be exported
///
/// # Example
///
/// ```rust
/// use statewalk::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Opened,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Opened => "Opened",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// assert_eq!(Door::Closed.description(), "");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display and lookup.
    fn name(&self) -> &str;

    /// Free-form description of the state.
    ///
    /// Default implementation returns an empty string.
    fn description(&self) -> &str {
        ""
    }
}

/// A node of the transition graph: either a reserved sentinel or a user state.
///
/// `Initial` is the source of the single entry edge, `Stop` is the target of
/// terminating edges, and `Invalid` is where the machine lands after naming a
/// transition that does not exist from its current state.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub enum Vertex<S: State> {
    Initial,
    Stop,
    Invalid,
    State(S),
}

impl<S: State> Vertex<S> {
    pub fn name(&self) -> &str {
        match self {
            Self::Initial => "Initial",
            Self::Stop => "Stop",
            Self::Invalid => "Invalid",
            Self::State(state) => state.name(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::State(state) => state.description(),
            _ => "",
        }
    }

    /// True for `Initial`, `Stop` and `Invalid`.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::State(_))
    }

    /// The user state, if this is not a sentinel.
    pub fn as_state(&self) -> Option<&S> {
        match self {
            Self::State(state) => Some(state),
            _ => None,
        }
    }
}

impl<S: State> From<S> for Vertex<S> {
    fn from(state: S) -> Self {
        Self::State(state)
    }
}

impl<S: State> Display for Vertex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
