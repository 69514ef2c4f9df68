//! Builder API for graph lint rules.

use crate::builder::StatePattern;
use crate::core::State;
use crate::validation::rules::{GraphCheck, GraphRules, GraphToggles};
use crate::validation::violations::GraphViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`GraphRules`]
pub struct RulesBuilder<S: State> {
    toggles: GraphToggles,
    custom_checks: Vec<GraphCheck<S>>,
}

impl<S: State> RulesBuilder<S> {
    pub fn new() -> Self {
        Self {
            toggles: GraphToggles::default(),
            custom_checks: Vec::new(),
        }
    }

    /// Start from previously loaded toggles
    pub fn from_toggles(toggles: GraphToggles) -> Self {
        Self {
            toggles,
            custom_checks: Vec::new(),
        }
    }

    pub fn require_reachable(mut self, on: bool) -> Self {
        self.toggles.require_reachable = on;
        self
    }

    pub fn forbid_dead_ends(mut self, on: bool) -> Self {
        self.toggles.forbid_dead_ends = on;
        self
    }

    pub fn forbid_shadowed(mut self, on: bool) -> Self {
        self.toggles.forbid_shadowed = on;
        self
    }

    /// Add a custom graph check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&StatePattern<S>) -> Validation<(), NonEmptyVec<GraphViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&StatePattern<S>) -> bool + Send + Sync + 'static,
    {
        let check = move |pattern: &StatePattern<S>| {
            if predicate(pattern) {
                Validation::success(())
            } else {
                Validation::fail(GraphViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.custom_checks.push(Box::new(check));
        self
    }

    pub fn build(self) -> GraphRules<S> {
        GraphRules {
            toggles: self.toggles,
            custom_checks: self.custom_checks,
        }
    }
}

impl<S: State> Default for RulesBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Light {
            Red,
            Green,
        }
    }

    #[test]
    fn builder_sets_toggles() {
        let rules: GraphRules<Light> = RulesBuilder::new()
            .require_reachable(false)
            .forbid_shadowed(false)
            .build();

        let toggles = rules.toggles();
        assert!(!toggles.require_reachable);
        assert!(toggles.forbid_dead_ends);
        assert!(!toggles.forbid_shadowed);
    }

    #[test]
    fn require_accepts_full_validation_checks() {
        let rules = RulesBuilder::new()
            .require(|pattern: &StatePattern<Light>| {
                if pattern.lookup_state_by_name("Green").is_some() {
                    Validation::success(())
                } else {
                    Validation::fail(GraphViolation::CustomCheckFailed {
                        message: "Green is required".to_string(),
                    })
                }
            })
            .build();

        let mut pattern: StatePattern<Light> = StatePattern::new();
        pattern.initial(Light::Red).unwrap().t("go").unwrap().s(Light::Red).unwrap();
        assert!(rules.check(&pattern).is_failure());

        pattern.t_to("go", Light::Green).unwrap().s(Light::Green).unwrap().t_to("stop", Light::Red).unwrap();
        let relaxed = RulesBuilder::from_toggles(GraphToggles {
            forbid_shadowed: false,
            ..GraphToggles::default()
        })
        .build();
        assert!(relaxed.check(&pattern).is_success());
    }
}
