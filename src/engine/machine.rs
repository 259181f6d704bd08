//! The dispatcher: maps the current state plus an incoming event onto at
//! most one action bundle, at most one committed transition and the
//! transition's lifecycle hooks.
//!
//! Dispatch is strictly synchronous and runs to completion; the host object
//! is borrowed mutably for the whole call, so reentrant dispatch on the
//! same machine is rejected by the borrow checker rather than left
//! undefined.

use crate::core::{Event, HostError, State};
use crate::engine::table::RuleTable;
use std::fmt;
use std::sync::Arc;

/// A machine instance: one current state plus a shared, immutable rule
/// table.
///
/// The host object is referenced, never owned; it is passed into each
/// [`process_event`](Machine::process_event) call. Several machines may
/// share one table (`Arc`), each with its own current state.
///
/// # Failure semantics
///
/// Host errors from actions and hooks propagate unmodified and abort the
/// rest of the call. The state field is written after the leave and
/// transition hooks succeed and before the enter hook runs, so a failing
/// enter hook leaves the machine already in the target state. That
/// non-atomic boundary is deliberate and matches the hook ordering
/// contract: leave, transition, commit, enter.
pub struct Machine<H, S: State, E: Event> {
    table: Arc<RuleTable<H, S, E>>,
    current: S,
}

impl<H, S: State, E: Event> Machine<H, S, E> {
    /// Create a machine over a rule table, starting in `initial`.
    pub fn new(table: Arc<RuleTable<H, S, E>>, initial: S) -> Self {
        Self {
            table,
            current: initial,
        }
    }

    /// Read the current state. Pure; no side effects.
    pub fn current_state(&self) -> S {
        self.current
    }

    /// The shared rule table this machine dispatches against.
    pub fn table(&self) -> &Arc<RuleTable<H, S, E>> {
        &self.table
    }

    /// Dispatch one event.
    ///
    /// Action rules are scanned first: the first rule naming the event's
    /// kind whose guard passes runs its whole bundle, then action scanning
    /// stops. Transitions are scanned second: the first record naming the
    /// kind whose source equals the current state and whose guard passes
    /// is committed, firing leave/transition/enter hooks around the state
    /// change (transition hook only, for a self-transition). Both scans
    /// are linear and in declaration order; an event matching nothing is
    /// a silent no-op.
    pub fn process_event(&mut self, host: &mut H, event: &E) -> Result<(), HostError> {
        self.run_action_rules(host, event)?;
        self.run_transitions(host, event)
    }

    fn run_action_rules(&self, host: &mut H, event: &E) -> Result<(), HostError> {
        let kind = event.kind();
        for rule in &self.table.action_rules {
            if !rule.events.contains(&kind) {
                continue;
            }
            if rule.guard.as_ref().is_none_or(|g| g.check(host)) {
                rule.bundle.invoke_all(host, event)?;
                return Ok(());
            }
        }
        Ok(())
    }

    fn run_transitions(&mut self, host: &mut H, event: &E) -> Result<(), HostError> {
        let kind = event.kind();
        let table = Arc::clone(&self.table);

        let matched = table.transitions.iter().position(|t| {
            t.source == self.current
                && t.events.contains(&kind)
                && t.guard.as_ref().is_none_or(|g| g.check(host))
        });
        let Some(index) = matched else {
            tracing::trace!(state = self.current.name(), event = ?kind, "no matching transition");
            return Ok(());
        };

        #[cfg(debug_assertions)]
        warn_if_ambiguous(&table, index, self.current, kind, host);

        let transition = &table.transitions[index];
        if transition.source != transition.target {
            if let Some(hook) = &transition.on_leave {
                hook(host, event)?;
            }
            if let Some(hook) = &transition.on_transition {
                hook(host, event)?;
            }
            self.current = transition.target;
            if let Some(hook) = &transition.on_enter {
                hook(host, event)?;
            }
        } else if let Some(hook) = &transition.on_transition {
            hook(host, event)?;
        }

        tracing::debug!(
            from = transition.source.name(),
            to = transition.target.name(),
            event = ?kind,
            "transition committed"
        );
        Ok(())
    }
}

impl<H, S: State, E: Event> fmt::Debug for Machine<H, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("transitions", &self.table.transition_count())
            .field("action_rules", &self.table.action_rule_count())
            .finish()
    }
}

/// Debug-build diagnostic for the unverified corner of the tie-break
/// policy: when a second candidate sharing the committed (state, event)
/// pair is also satisfiable, the author is relying on declaration order.
/// Warns without changing dispatch behavior.
#[cfg(debug_assertions)]
fn warn_if_ambiguous<H, S: State, E: Event>(
    table: &RuleTable<H, S, E>,
    committed: usize,
    current: S,
    kind: E::Kind,
    host: &H,
) {
    for other in &table.transitions[committed + 1..] {
        let satisfiable = other.source == current
            && other.events.contains(&kind)
            && other.guard.as_ref().is_none_or(|g| g.check(host));
        if satisfiable {
            tracing::warn!(
                state = current.name(),
                event = ?kind,
                "multiple satisfiable transitions share this (state, event) pair; \
                 declaration order decided the winner"
            );
            return;
        }
    }
}
