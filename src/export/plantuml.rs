//! PlantUML export with the machine's position highlighted.

use super::{marker, DiagramStyle};
use crate::core::{State, Vertex};
use crate::runtime::StateMachine;

/// Render the machine's pattern as PlantUML (paste into <https://www.plantuml.com/plantuml/uml>).
///
/// The current transition and current state are highlighted with the
/// default [`DiagramStyle`].
pub fn to_plantuml<S: State, I>(machine: &StateMachine<S, I>) -> String {
    to_plantuml_with(machine, &DiagramStyle::default())
}

pub fn to_plantuml_with<S: State, I>(machine: &StateMachine<S, I>, style: &DiagramStyle) -> String {
    let pattern = machine.pattern();
    let mut out = String::from("@startuml\n");

    for transition in pattern.transitions() {
        // The entry edge is never highlighted.
        let arrow = if transition.from != Vertex::Initial && transition == machine.current_transition() {
            format!("-{}->", style.current_transition_style)
        } else {
            "-->".to_string()
        };
        out.push_str(&format!(
            "{} {} {} : {}\n",
            marker(&transition.from),
            arrow,
            marker(&transition.to),
            transition.name
        ));
    }

    for state in pattern.states().iter().filter(|s| !s.is_sentinel()) {
        let mut line = format!("state {}", state.name());
        if state == machine.current_state() {
            line.push(' ');
            line.push_str(&style.current_state_color);
        }
        if !state.description().is_empty() {
            line.push_str(" : ");
            line.push_str(state.description());
        }
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("@enduml\n");
    out
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

        fn description(&self) -> &str {
            match self {
                Self::Locked => "Secured",
                Self::Unlocked => "",
            }
        }
    }

    fn machine() -> StateMachine<TestState> {
        StateMachine::<TestState>::create_with(|p| {
            p.initial(TestState::Locked)?
                .t("coin")?
                .s(TestState::Unlocked)?
                .t("push")?
                .s(TestState::Locked)?;
            Ok(())
        })
        .unwrap()
    }

    #[test]
    fn fresh_machine_highlights_only_the_current_state() {
        let machine = machine();
        let expected = "@startuml\n\
                        [*] --> Locked : initial\n\
                        Locked --> Unlocked : coin\n\
                        Unlocked --> Locked : push\n\
                        state Locked #palegreen : Secured\n\
                        state Unlocked\n\
                        @enduml\n";
        assert_eq!(to_plantuml(&machine), expected);
    }

    #[test]
    fn current_transition_is_highlighted() {
        let mut machine = machine();
        machine.advance("coin");

        let diagram = to_plantuml(&machine);
        assert!(diagram.contains("Locked -[#green]-> Unlocked : coin\n"));
        assert!(diagram.contains("Unlocked --> Locked : push\n"));
        assert!(diagram.contains("state Unlocked #palegreen\n"));
        assert!(diagram.contains("state Locked : Secured\n"));
    }

    #[test]
    fn style_tokens_are_configurable() {
        let mut machine = machine();
        machine.advance("coin");
        let style = DiagramStyle {
            current_state_color: "#gold".to_string(),
            current_transition_style: "[#red]".to_string(),
            ..DiagramStyle::default()
        };

        let diagram = to_plantuml_with(&machine, &style);
        assert!(diagram.contains("Locked -[#red]-> Unlocked : coin\n"));
        assert!(diagram.contains("state Unlocked #gold\n"));
    }
}
