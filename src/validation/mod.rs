//! Lints for finished state graphs.
//!
//! `GraphRules` uses Stillwater's `Validation` to report every structural
//! problem in one pass: unreachable states, dead ends, shadowed transitions
//! and any custom checks added through `RulesBuilder`.
//!
//! # Example
//!
//! ```rust
//! use statewalk::builder::StatePattern;
//! use statewalk::state_enum;
//! use statewalk::validation::{GraphRules, RulesBuilder};
//!
//! state_enum! {
//!     enum Door { Open, Closed }
//! }
//!
//! let mut pattern = StatePattern::<Door>::new();
//! pattern.initial(Door::Open).unwrap().t("close").unwrap().s(Door::Closed).unwrap();
//!
//! // Closed has no way out.
//! assert!(pattern.validate().is_failure());
//!
//! let rules: GraphRules<Door> = RulesBuilder::new().forbid_dead_ends(false).build();
//! assert!(rules.check(&pattern).is_success());
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::RulesBuilder;
pub use rules::{GraphCheck, GraphRules, GraphToggles};
pub use violations::GraphViolation;
