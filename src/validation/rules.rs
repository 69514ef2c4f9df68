//! Graph lint rules evaluated with `Validation`.

use crate::builder::StatePattern;
use crate::core::{State, Vertex};
use crate::validation::violations::GraphViolation;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom graph checks
pub type GraphCheck<S> =
    Box<dyn Fn(&StatePattern<S>) -> Validation<(), NonEmptyVec<GraphViolation>> + Send + Sync>;

/// On/off switches for the built-in lints. All are on by default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphToggles {
    pub require_reachable: bool,
    pub forbid_dead_ends: bool,
    pub forbid_shadowed: bool,
}

impl Default for GraphToggles {
    fn default() -> Self {
        Self {
            require_reachable: true,
            forbid_dead_ends: true,
            forbid_shadowed: true,
        }
    }
}

/// Lints for a finished pattern.
/// Every finding is accumulated; checking never stops at the first one.
pub struct GraphRules<S: State> {
    pub(crate) toggles: GraphToggles,
    pub(crate) custom_checks: Vec<GraphCheck<S>>,
}

impl<S: State> GraphRules<S> {
    pub fn toggles(&self) -> GraphToggles {
        self.toggles
    }

    pub fn check(&self, pattern: &StatePattern<S>) -> Validation<(), NonEmptyVec<GraphViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<GraphViolation>>> = Vec::new();

        if pattern.initial_transition().is_none() {
            checks.push(Validation::fail(GraphViolation::MissingInitialTransition));
        }

        if self.toggles.require_reachable {
            let reachable = reachable_from_initial(pattern);
            for state in named_states(pattern) {
                if !reachable.contains(state) {
                    checks.push(Validation::fail(GraphViolation::UnreachableState {
                        state: state.name().to_string(),
                    }));
                }
            }
        }

        if self.toggles.forbid_dead_ends {
            for state in named_states(pattern) {
                if pattern.lookup_outgoing_transitions(state).is_empty() {
                    checks.push(Validation::fail(GraphViolation::DeadEndState {
                        state: state.name().to_string(),
                    }));
                }
            }
        }

        if self.toggles.forbid_shadowed {
            for state in named_states(pattern) {
                let mut seen = HashSet::new();
                let mut reported = HashSet::new();
                for transition in pattern.lookup_outgoing_transitions(state) {
                    let name = transition.name.as_str();
                    if !seen.insert(name) && reported.insert(name) {
                        checks.push(Validation::fail(GraphViolation::ShadowedTransition {
                            name: name.to_string(),
                            from: state.name().to_string(),
                        }));
                    }
                }
            }
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(pattern));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: State> Default for GraphRules<S> {
    fn default() -> Self {
        Self {
            toggles: GraphToggles::default(),
            custom_checks: Vec::new(),
        }
    }
}

impl<S: State> StatePattern<S> {
    /// Lint the pattern with the default [`GraphRules`].
    pub fn validate(&self) -> Validation<(), NonEmptyVec<GraphViolation>> {
        GraphRules::default().check(self)
    }
}

fn named_states<S: State>(pattern: &StatePattern<S>) -> impl Iterator<Item = &Vertex<S>> {
    pattern.states().iter().filter(|state| !state.is_sentinel())
}

fn reachable_from_initial<S: State>(pattern: &StatePattern<S>) -> HashSet<&Vertex<S>> {
    let initial = Vertex::Initial;
    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([&initial]);
    while let Some(vertex) = queue.pop_front() {
        for transition in pattern.lookup_outgoing_transitions(vertex) {
            if visited.insert(&transition.to) {
                queue.push_back(&transition.to);
            }
        }
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;
    use crate::validation::builder::RulesBuilder;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Locked,
        Unlocked,
        Broken,
        Orphan,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Locked => "Locked",
                Self::Unlocked => "Unlocked",
                Self::Broken => "Broken",
                Self::Orphan => "Orphan",
            }
        }
    }

    fn turnstile() -> StatePattern<TestState> {
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
            .t("push")
            .unwrap()
            .s(TestState::Locked)
            .unwrap();
        pattern
    }

    fn errors(result: Validation<(), NonEmptyVec<GraphViolation>>) -> Vec<GraphViolation> {
        match result {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn well_formed_graph_passes() {
        assert!(turnstile().validate().is_success());
    }

    #[test]
    fn empty_pattern_misses_initial_transition() {
        let pattern: StatePattern<TestState> = StatePattern::new();
        assert_eq!(
            errors(pattern.validate()),
            vec![GraphViolation::MissingInitialTransition]
        );
    }

    #[test]
    fn accumulates_every_finding() {
        let mut pattern = turnstile();
        pattern
            .add_transition(Transition::new("push", TestState::Locked, TestState::Locked))
            .unwrap()
            .add_transition(Transition::new("kick", TestState::Locked, TestState::Broken))
            .unwrap()
            .add_transition(Transition::new("fix", TestState::Orphan, TestState::Locked))
            .unwrap();

        let found = errors(pattern.validate());

        assert_eq!(found.len(), 3);
        assert!(found.contains(&GraphViolation::UnreachableState {
            state: "Orphan".to_string()
        }));
        assert!(found.contains(&GraphViolation::DeadEndState {
            state: "Broken".to_string()
        }));
        assert!(found.contains(&GraphViolation::ShadowedTransition {
            name: "push".to_string(),
            from: "Locked".to_string()
        }));
    }

    #[test]
    fn toggles_disable_builtin_lints() {
        let mut pattern = turnstile();
        pattern.t_to("kick", TestState::Broken).unwrap();

        let rules: GraphRules<TestState> = RulesBuilder::new().forbid_dead_ends(false).build();
        assert!(rules.check(&pattern).is_success());
    }

    #[test]
    fn custom_checks_run_after_builtin_lints() {
        let rules = RulesBuilder::new()
            .require_pred(
                |p: &StatePattern<TestState>| p.transitions().len() > 10,
                "Too few transitions".to_string(),
            )
            .build();

        assert_eq!(
            errors(rules.check(&turnstile())),
            vec![GraphViolation::CustomCheckFailed {
                message: "Too few transitions".to_string()
            }]
        );
    }

    #[test]
    fn toggles_deserialize_with_defaults() {
        let toggles: GraphToggles = serde_json::from_str(r#"{ "forbid_shadowed": false }"#).unwrap();
        assert!(toggles.require_reachable);
        assert!(toggles.forbid_dead_ends);
        assert!(!toggles.forbid_shadowed);
    }
}
