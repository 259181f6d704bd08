//! Flattened, immutable rule tables.
//!
//! A [`RuleTable`] is the expansion product of the author's declarative
//! rules: an ordered sequence of atomic single-source transitions plus an
//! ordered sequence of atomic action rules. It is computed once by
//! [`RuleTableBuilder`](crate::builder::RuleTableBuilder), never mutated
//! afterwards, and may be shared read-only across machine instances.

use crate::builder::RuleTableBuilder;
use crate::core::{ActionBundle, Event, Guard, HostError, State};
use std::sync::Arc;

/// Lifecycle hook callback, resolved once at table-construction time.
///
/// Hooks receive the host object and the triggering event; an absent hook
/// is an empty `Option` slot on the atomic transition, so dispatch never
/// looks anything up.
pub type HookFn<H, E> = Arc<dyn Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync>;

/// One expanded transition record: single source state, single target
/// state, the branch's event-kind set and guard, and the pre-resolved
/// lifecycle hook slots.
///
/// Self-transitions (source == target) are legal; their enter/leave slots
/// are resolved to `None` during expansion, which is what suppresses those
/// hooks at dispatch time.
pub(crate) struct AtomicTransition<H, S: State, E: Event> {
    pub(crate) source: S,
    pub(crate) target: S,
    pub(crate) events: Vec<E::Kind>,
    pub(crate) guard: Option<Guard<H>>,
    pub(crate) on_leave: Option<HookFn<H, E>>,
    pub(crate) on_transition: Option<HookFn<H, E>>,
    pub(crate) on_enter: Option<HookFn<H, E>>,
}

/// One expanded action rule record: a trigger's event-kind set and guard,
/// plus the bundle it gates.
pub(crate) struct AtomicActionRule<H, E: Event> {
    pub(crate) events: Vec<E::Kind>,
    pub(crate) guard: Option<Guard<H>>,
    pub(crate) bundle: ActionBundle<H, E>,
}

/// The immutable rule table a machine dispatches against.
///
/// Both sequences preserve declaration order (rule order, then branch or
/// trigger order, then source-state order); the dispatcher relies on that
/// order for its first-match-wins tie-break. Dispatch is a bounded linear
/// scan over these records — deliberately not a map, so the author keeps
/// control over precedence between ambiguous guarded alternatives.
pub struct RuleTable<H, S: State, E: Event> {
    pub(crate) transitions: Vec<AtomicTransition<H, S, E>>,
    pub(crate) action_rules: Vec<AtomicActionRule<H, E>>,
}

impl<H, S: State, E: Event> RuleTable<H, S, E> {
    /// Start declaring a table.
    pub fn builder() -> RuleTableBuilder<H, S, E> {
        RuleTableBuilder::new()
    }

    /// Number of atomic transitions after expansion.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Number of atomic action rules after expansion.
    pub fn action_rule_count(&self) -> usize {
        self.action_rules.len()
    }

    /// The expanded (source, target) pairs, in declaration order.
    pub fn transition_pairs(&self) -> impl Iterator<Item = (S, S)> + '_ {
        self.transitions.iter().map(|t| (t.source, t.target))
    }
}
