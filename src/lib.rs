//! Statewalk: a fluent state graph builder and Moore-model state machine
//!
//! A `StatePattern` is assembled with chained calls that share an implicit
//! cursor, so short chains read like a walk through the graph. A
//! `StateMachine` then moves over the finished pattern by transition name and
//! runs entry actions on every state it enters.
//!
//! # Core Concepts
//!
//! - **State**: Caller-defined states via the `State` trait, plus the
//!   `Initial`, `Stop` and `Invalid` sentinels of `Vertex`
//! - **Pattern**: The transition graph and its builder cursor
//! - **Machine**: Current/previous state, entry actions, step history
//! - **Export**: Mermaid, PlantUML, transition tables and JSON
//! - **Validation**: Accumulating graph lints on top of Stillwater's `Validation`
//!
//! # Example
//!
//! ```rust
//! use statewalk::runtime::StateMachine;
//! use statewalk::state_enum;
//!
//! state_enum! {
//!     pub enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! let mut machine = StateMachine::<Turnstile>::create_with(|p| {
//!     p.initial(Turnstile::Locked)?
//!         .t("push")?
//!         .t("coin")?
//!         .s(Turnstile::Unlocked)?
//!         .t("coin")?
//!         .t("push")?
//!         .s(Turnstile::Locked)?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! machine.advance("coin");
//! assert_eq!(machine.current_state().name(), "Unlocked");
//!
//! machine.advance("coin");
//! assert_eq!(machine.current_state().name(), "Unlocked");
//!
//! machine.advance("fly");
//! assert_eq!(machine.current_state().name(), "Invalid");
//! ```

pub mod builder;
pub mod console;
pub mod core;
pub mod export;
pub mod runtime;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, StatePattern};
pub use console::ConsoleSession;
pub use core::{State, StateHistory, StepRecord, Transition, Vertex};
pub use export::{to_mermaid, to_plantuml, to_transition_table, DiagramStyle, ExportError};
pub use runtime::StateMachine;
pub use validation::{GraphRules, GraphViolation, RulesBuilder};
