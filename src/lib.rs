//! Statute: a declarative, rule-table-driven state-transition engine.
//!
//! A machine is declared as a small set of disjunctive rules — "from any of
//! these states, on any of these events, if this guard holds, go to that
//! state" — plus guarded action rules and optional lifecycle hooks. At
//! construction time the rules are expanded into a flat, validated,
//! immutable table; at dispatch time each event is a single linear scan
//! over that table, with first-declared-wins precedence between ambiguous
//! guarded alternatives.
//!
//! The engine is embedded inside a host ("owning") object that supplies
//! the guard predicates, action routines and hooks; the machine itself
//! owns nothing but the current state.
//!
//! # Core Concepts
//!
//! - **State / Event**: closed enumerations the host commits to, declared
//!   with [`state_enum!`] and [`event_enum!`]
//! - **Guards**: pure predicates over the host, composed with
//!   `all`/`any`/`none`/`not`
//! - **Rules**: disjunctive transition and action expressions, flattened
//!   once into a shared [`engine::RuleTable`]
//! - **Hooks**: optional on-enter/on-leave/on-transition callbacks,
//!   resolved per transition at construction time
//!
//! # Example
//!
//! ```rust
//! use statute::builder::{Branch, TransitionRule};
//! use statute::core::Guard;
//! use statute::engine::{Machine, RuleTable};
//! use statute::{event_enum, state_enum};
//! use std::sync::Arc;
//!
//! state_enum! {
//!     pub enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! event_enum! {
//!     pub enum Push {
//!         Shove { force: u32 },
//!     }
//!     kinds: PushKind
//! }
//!
//! struct Hinge {
//!     jammed: bool,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let table = RuleTable::builder()
//!     .transition(
//!         TransitionRule::new()
//!             .branch(
//!                 Branch::from([Door::Closed])
//!                     .on([PushKind::Shove])
//!                     .when(Guard::new("free", |h: &Hinge| !h.jammed)),
//!             )
//!             .to(Door::Open),
//!     )
//!     .build()?;
//!
//! let mut machine = Machine::new(Arc::new(table), Door::Closed);
//! let mut hinge = Hinge { jammed: false };
//!
//! machine.process_event(&mut hinge, &Push::Shove { force: 3 })?;
//! assert_eq!(machine.current_state(), Door::Open);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Action, ActionBundle, Event, Guard, HostError, State};
pub use builder::{ActionRule, Branch, BuildError, RuleTableBuilder, TransitionRule, Trigger};
pub use engine::{Machine, RuleTable};
