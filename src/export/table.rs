//! State/transition matrix export.

use crate::core::{State, Vertex};
use crate::runtime::StateMachine;
use std::fmt;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Marker for a state that has no transition of the column's name.
pub const NO_TRANSITION: &str = "X";

/// Matrix of target states keyed by source state (rows) and transition name (columns).
///
/// The first header is `"State"`. Columns follow the order in which
/// transition names were first defined; the initial edge is not a column and
/// sentinels are not rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TransitionTable {
    /// Row whose first cell is `state`.
    pub fn row(&self, state: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.first().map(String::as_str) == Some(state))
            .map(Vec::as_slice)
    }

    /// Target of `transition` taken from `state`, or `"X"`.
    pub fn cell(&self, state: &str, transition: &str) -> Option<&str> {
        let column = self.headers.iter().position(|h| h == transition)?;
        self.row(state)?.get(column).map(String::as_str)
    }

    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.clone());
        for row in &self.rows {
            builder.push_record(row.clone());
        }
        let mut table = builder.build();
        table.with(Style::psql());
        table.to_string()
    }
}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the transition table of the machine's pattern.
pub fn to_transition_table<S: State, I>(machine: &StateMachine<S, I>) -> TransitionTable {
    let pattern = machine.pattern();

    let mut names: Vec<&str> = Vec::new();
    for transition in pattern.transitions() {
        if transition.from != Vertex::Initial && !names.contains(&transition.name.as_str()) {
            names.push(&transition.name);
        }
    }

    let mut headers = vec!["State".to_string()];
    headers.extend(names.iter().map(|n| n.to_string()));

    let rows = pattern
        .states()
        .iter()
        .filter(|state| !state.is_sentinel())
        .map(|state| {
            let outgoing = pattern.lookup_outgoing_transitions(state);
            let mut row = vec![state.name().to_string()];
            row.extend(names.iter().map(|name| {
                outgoing
                    .iter()
                    .find(|t| t.name == *name)
                    .map(|t| t.to.name().to_string())
                    .unwrap_or_else(|| NO_TRANSITION.to_string())
            }));
            row
        })
        .collect();

    TransitionTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
            }
        }
    }

    fn turnstile() -> StateMachine<TestState> {
        StateMachine::<TestState>::create_with(|p| {
            p.initial(TestState::Locked)?
                .t("push")?
                .t("coin")?
                .s(TestState::Unlocked)?
                .t("coin")?
                .t("push")?
                .s(TestState::Locked)?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn turnstile_table_has_one_row_per_state() {
        let table = to_transition_table(&turnstile());

        assert_eq!(table.headers, vec!["State", "push", "coin"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.cell("Locked", "push"), Some("Locked"));
        assert_eq!(table.cell("Locked", "coin"), Some("Unlocked"));
        assert_eq!(table.cell("Unlocked", "push"), Some("Locked"));
        assert_eq!(table.cell("Unlocked", "coin"), Some("Unlocked"));
    }

    #[test]
    fn missing_transitions_are_marked() {
        let machine = StateMachine::<TestState>::create_with(|p| {
            p.initial(TestState::Locked)?.t("coin")?.s(TestState::Unlocked)?.stop()?;
            Ok(())
        })
        .unwrap();
        let table = to_transition_table(&machine);

        assert_eq!(table.headers, vec!["State", "coin", "stop"]);
        assert_eq!(table.cell("Locked", "stop"), Some(NO_TRANSITION));
        assert_eq!(table.cell("Unlocked", "coin"), Some(NO_TRANSITION));
        assert_eq!(table.cell("Unlocked", "stop"), Some("Stop"));
        assert!(table.row("Stop").is_none());
    }

    #[test]
    fn rendering_contains_every_cell() {
        let rendered = to_transition_table(&turnstile()).to_string();

        for cell in ["State", "push", "coin", "Locked", "Unlocked"] {
            assert!(rendered.contains(cell), "missing {cell} in\n{rendered}");
        }
    }
}
