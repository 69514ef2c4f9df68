//! Mermaid `stateDiagram-v2` export.

use super::{marker, DiagramStyle};
use crate::builder::StatePattern;
use crate::core::State;

/// Render the pattern as a Mermaid state diagram (paste into <https://mermaid.live/>).
pub fn to_mermaid<S: State>(pattern: &StatePattern<S>) -> String {
    to_mermaid_with(pattern, &DiagramStyle::default())
}

pub fn to_mermaid_with<S: State>(pattern: &StatePattern<S>, style: &DiagramStyle) -> String {
    let mut out = String::from("stateDiagram-v2\n");
    for transition in pattern.transitions() {
        out.push_str(&format!(
            "{}{} --> {} : {}\n",
            style.mermaid_indent,
            marker(&transition.from),
            marker(&transition.to),
            transition.name
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vertex;
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

    #[test]
    fn renders_transitions_in_insertion_order() {
        let mut pattern: StatePattern<TestState> = StatePattern::new();
        pattern
            .initial(TestState::Locked)
            .unwrap()
            .t("push")
            .unwrap()
            .t("coin")
            .unwrap()
            .s(TestState::Unlocked)
            .unwrap()
            .t_to("leave", Vertex::Stop)
            .unwrap();

        let expected = "stateDiagram-v2\n\
                        \x20   [*] --> Locked : initial\n\
                        \x20   Locked --> Locked : push\n\
                        \x20   Locked --> Unlocked : coin\n\
                        \x20   Unlocked --> [*] : leave\n";
        assert_eq!(to_mermaid(&pattern), expected);
    }

    #[test]
    fn indent_is_configurable() {
        let mut pattern: StatePattern<TestState> = StatePattern::new();
        pattern.initial(TestState::Locked).unwrap();

        let style = DiagramStyle {
            mermaid_indent: "\t".to_string(),
            ..DiagramStyle::default()
        };
        assert_eq!(
            to_mermaid_with(&pattern, &style),
            "stateDiagram-v2\n\t[*] --> Locked : initial\n"
        );
    }
}
