//! Dispatch over flattened rule tables.
//!
//! The builder hands a validated, expanded [`RuleTable`] to a [`Machine`],
//! which owns the current state and walks the table once per event.

mod machine;
pub(crate) mod table;

pub use machine::Machine;
pub use table::{HookFn, RuleTable};
