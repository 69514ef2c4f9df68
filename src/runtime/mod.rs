//! Execution engine.
//!
//! A `StateMachine` owns a finished `StatePattern` and moves a cursor over it:
//! - Transitions are taken by name from the current state
//! - Entry actions run on every entry into their state (Moore model)
//! - Unknown transition names land on the `Invalid` sentinel instead of failing
//! - `reset_to` re-bases the machine and its pattern's initial transition

mod entry;
mod machine;

pub use entry::{EntryAction, InputAction, PlainAction};
pub use machine::StateMachine;
