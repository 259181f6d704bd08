//! Build errors for rule declaration and table construction.
//!
//! All of these are construction-time and fatal: a machine never runs with
//! a partial or degraded rule table.

use thiserror::Error;

/// Errors that can occur while declaring rules or building the rule table.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("No transition rules defined. Add at least one transition rule")]
    NoTransitions,

    #[error("Transition rule has no target state. Call .to(state)")]
    MissingTarget,

    #[error("Transition rule has no branches. Add at least one Branch")]
    NoBranches,

    #[error("Branch names no source states. Call Branch::from with at least one state")]
    EmptySourceStates,

    #[error("Rule names no events. Provide at least one event kind")]
    EmptyEventSet,

    #[error("Duplicate source state '{state}' within one branch")]
    DuplicateSourceState { state: &'static str },

    #[error("Duplicate event kind '{kind}' within one rule")]
    DuplicateEvent { kind: String },

    #[error("Empty guard pack. Combinators need at least one guard")]
    EmptyGuardPack,

    #[error("Duplicate guard '{name}' within one pack")]
    DuplicateGuard { name: &'static str },

    #[error("Empty action bundle. Bundles need at least one action")]
    EmptyActionBundle,

    #[error("Duplicate action '{name}' within one bundle")]
    DuplicateAction { name: &'static str },

    #[error("Action rule has no bundle. Call .run(bundle)")]
    MissingActionBundle,

    #[error("Action rule has no triggers. Add at least one Trigger")]
    NoTriggers,

    #[error("Duplicate {kind} hook registered for {key}")]
    DuplicateHook { kind: &'static str, key: String },
}
