//! Core contracts of the engine.
//!
//! This module contains the pure data contracts every machine is built on:
//! - State and Event enumeration traits
//! - Guard predicates and their combinators
//! - Actions and ordered action bundles
//!
//! Nothing here dispatches anything; the declarative surface lives in
//! [`builder`](crate::builder) and the dispatcher in [`engine`](crate::engine).

mod action;
mod event;
mod guard;
mod state;

pub use action::{Action, ActionBundle, HostError};
pub use event::Event;
pub use guard::Guard;
pub use state::State;
