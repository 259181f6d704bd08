//! Declarative rule surface and table construction.
//!
//! Authors declare transition rules, action rules and lifecycle hooks on a
//! [`RuleTableBuilder`]; `build()` validates everything, expands the
//! disjunctive rules into flat atomic records and resolves which hooks
//! exist for each record. All malformed-table conditions are caught here,
//! before any event is ever processed.

pub mod action;
pub mod error;
pub mod macros;
pub mod transition;

pub use action::{ActionRule, Trigger};
pub use error::BuildError;
pub use transition::{Branch, TransitionRule};

use crate::core::{Event, HostError, State};
use crate::engine::table::{AtomicActionRule, AtomicTransition, HookFn, RuleTable};
use std::sync::Arc;

/// Builder collecting rules and hooks for one rule table.
///
/// The generic parameters are the host object `H`, the state enumeration
/// `S` and the event type `E`. Mixing rules over different enumerations is
/// not a runtime check: it simply does not compile.
///
/// # Example
///
/// ```rust
/// use statute::builder::{Branch, TransitionRule};
/// use statute::engine::RuleTable;
/// use statute::{event_enum, state_enum};
///
/// state_enum! {
///     pub enum Phase {
///         Ready,
///         Busy,
///     }
/// }
///
/// event_enum! {
///     pub enum Job {
///         Submit,
///         Finish,
///     }
///     kinds: JobKind
/// }
///
/// struct Worker;
///
/// let table: RuleTable<Worker, Phase, Job> = RuleTable::builder()
///     .transition(
///         TransitionRule::new()
///             .branch(Branch::from([Phase::Ready]).on([JobKind::Submit]))
///             .to(Phase::Busy),
///     )
///     .transition(
///         TransitionRule::new()
///             .branch(Branch::from([Phase::Busy]).on([JobKind::Finish]))
///             .to(Phase::Ready),
///     )
///     .build()?;
///
/// assert_eq!(table.transition_count(), 2);
/// # Ok::<(), statute::builder::BuildError>(())
/// ```
pub struct RuleTableBuilder<H, S: State, E: Event> {
    transitions: Vec<TransitionRule<H, S, E::Kind>>,
    actions: Vec<ActionRule<H, E>>,
    enter_hooks: Vec<(S, HookFn<H, E>)>,
    leave_hooks: Vec<(S, HookFn<H, E>)>,
    transition_hooks: Vec<((S, S), HookFn<H, E>)>,
}

impl<H, S: State, E: Event> RuleTableBuilder<H, S, E> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            actions: Vec::new(),
            enter_hooks: Vec::new(),
            leave_hooks: Vec::new(),
            transition_hooks: Vec::new(),
        }
    }

    /// Add a transition rule. Declaration order is dispatch precedence.
    pub fn transition(mut self, rule: TransitionRule<H, S, E::Kind>) -> Self {
        self.transitions.push(rule);
        self
    }

    /// Add an action rule. Declaration order is dispatch precedence.
    pub fn action(mut self, rule: ActionRule<H, E>) -> Self {
        self.actions.push(rule);
        self
    }

    /// Register an on-enter hook for a state. Fires after the machine has
    /// committed a transition into `state` from a different state.
    pub fn on_enter<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync + 'static,
    {
        self.enter_hooks.push((state, Arc::new(hook)));
        self
    }

    /// Register an on-leave hook for a state. Fires before the machine
    /// leaves `state` for a different state.
    pub fn on_leave<F>(mut self, state: S, hook: F) -> Self
    where
        F: Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync + 'static,
    {
        self.leave_hooks.push((state, Arc::new(hook)));
        self
    }

    /// Register an on-transition hook for one (from, to) state pair. The
    /// only hook that also fires on self-transitions.
    pub fn on_transition<F>(mut self, from: S, to: S, hook: F) -> Self
    where
        F: Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync + 'static,
    {
        self.transition_hooks.push(((from, to), Arc::new(hook)));
        self
    }

    /// Validate the declarations, expand them into atomic records and
    /// resolve hooks. Any malformed rule is fatal; there is no partial
    /// table.
    pub fn build(self) -> Result<RuleTable<H, S, E>, BuildError> {
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }
        self.check_hook_registrations()?;

        let mut transitions = Vec::new();
        for rule in &self.transitions {
            let target = rule.target.ok_or(BuildError::MissingTarget)?;
            if rule.branches.is_empty() {
                return Err(BuildError::NoBranches);
            }
            for branch in &rule.branches {
                validate_branch(branch)?;
                for &source in &branch.sources {
                    transitions.push(self.expand_one(source, target, branch));
                }
            }
        }

        let mut action_rules = Vec::new();
        for rule in self.actions {
            let bundle = rule.bundle.ok_or(BuildError::MissingActionBundle)?;
            if rule.triggers.is_empty() {
                return Err(BuildError::NoTriggers);
            }
            for trigger in rule.triggers {
                validate_events(&trigger.events)?;
                action_rules.push(AtomicActionRule {
                    events: trigger.events,
                    guard: trigger.guard,
                    bundle: bundle.clone(),
                });
            }
        }

        Ok(RuleTable {
            transitions,
            action_rules,
        })
    }

    /// Hook resolution for one atomic record. Self-transitions suppress
    /// enter/leave here, at construction time, so dispatch never revisits
    /// the question.
    fn expand_one(
        &self,
        source: S,
        target: S,
        branch: &Branch<H, S, E::Kind>,
    ) -> AtomicTransition<H, S, E> {
        let self_loop = source == target;
        AtomicTransition {
            source,
            target,
            events: branch.events.clone(),
            guard: branch.guard.clone(),
            on_leave: if self_loop {
                None
            } else {
                find_state_hook(&self.leave_hooks, source)
            },
            on_transition: self
                .transition_hooks
                .iter()
                .find(|((from, to), _)| *from == source && *to == target)
                .map(|(_, hook)| Arc::clone(hook)),
            on_enter: if self_loop {
                None
            } else {
                find_state_hook(&self.enter_hooks, target)
            },
        }
    }

    fn check_hook_registrations(&self) -> Result<(), BuildError> {
        check_state_hook_keys(&self.enter_hooks, "enter")?;
        check_state_hook_keys(&self.leave_hooks, "leave")?;
        for (i, ((from, to), _)) in self.transition_hooks.iter().enumerate() {
            let dup = self.transition_hooks[..i]
                .iter()
                .any(|((f, t), _)| f == from && t == to);
            if dup {
                return Err(BuildError::DuplicateHook {
                    kind: "transition",
                    key: format!("{} -> {}", from.name(), to.name()),
                });
            }
        }
        Ok(())
    }
}

impl<H, S: State, E: Event> Default for RuleTableBuilder<H, S, E> {
    fn default() -> Self {
        Self::new()
    }
}

fn find_state_hook<H, E: Event, S: State>(
    hooks: &[(S, HookFn<H, E>)],
    state: S,
) -> Option<HookFn<H, E>> {
    hooks
        .iter()
        .find(|(s, _)| *s == state)
        .map(|(_, hook)| Arc::clone(hook))
}

fn check_state_hook_keys<H, E: Event, S: State>(
    hooks: &[(S, HookFn<H, E>)],
    kind: &'static str,
) -> Result<(), BuildError> {
    for (i, (state, _)) in hooks.iter().enumerate() {
        if hooks[..i].iter().any(|(s, _)| s == state) {
            return Err(BuildError::DuplicateHook {
                kind,
                key: state.name().to_string(),
            });
        }
    }
    Ok(())
}

fn validate_branch<H, S: State, K: Copy + PartialEq + std::fmt::Debug>(
    branch: &Branch<H, S, K>,
) -> Result<(), BuildError> {
    if branch.sources.is_empty() {
        return Err(BuildError::EmptySourceStates);
    }
    for (i, state) in branch.sources.iter().enumerate() {
        if branch.sources[..i].contains(state) {
            return Err(BuildError::DuplicateSourceState {
                state: state.name(),
            });
        }
    }
    validate_events(&branch.events)
}

fn validate_events<K: Copy + PartialEq + std::fmt::Debug>(events: &[K]) -> Result<(), BuildError> {
    if events.is_empty() {
        return Err(BuildError::EmptyEventSet);
    }
    for (i, kind) in events.iter().enumerate() {
        if events[..i].contains(kind) {
            return Err(BuildError::DuplicateEvent {
                kind: format!("{kind:?}"),
            });
        }
    }
    Ok(())
}
