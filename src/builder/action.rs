//! Author-facing action rule expressions.
//!
//! An action rule is one or more disjunctive triggers — each naming a set of
//! event kinds and an optional guard — assigned one ordered action bundle.
//! At dispatch time the first satisfied action rule runs its whole bundle
//! and scanning stops.

use crate::core::{ActionBundle, Event, Guard};

/// One disjunct of an action rule: `{events} [× guard]`.
pub struct Trigger<H, K> {
    pub(crate) events: Vec<K>,
    pub(crate) guard: Option<Guard<H>>,
}

impl<H, K> Trigger<H, K> {
    /// Start a trigger from a set of event kinds.
    pub fn on(events: impl IntoIterator<Item = K>) -> Self {
        Trigger {
            events: events.into_iter().collect(),
            guard: None,
        }
    }

    /// Gate the trigger with a guard (optional; absent means unconditional).
    pub fn when(mut self, guard: Guard<H>) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// A disjunctive action rule: OR-joined triggers with one action bundle.
///
/// # Example
///
/// ```rust
/// use statute::builder::{ActionRule, Trigger};
/// use statute::core::{Action, ActionBundle, Event};
///
/// #[derive(Debug)]
/// enum Ev { Ping }
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum EvKind { Ping }
///
/// impl Event for Ev {
///     type Kind = EvKind;
///     fn kind(&self) -> EvKind { EvKind::Ping }
/// }
///
/// struct Host { pings: u32 }
///
/// let bundle = ActionBundle::new([Action::new("count", |h: &mut Host, _e: &Ev| {
///     h.pings += 1;
///     Ok(())
/// })])?;
///
/// let _rule: ActionRule<Host, Ev> = ActionRule::new()
///     .trigger(Trigger::on([EvKind::Ping]))
///     .run(bundle);
/// # Ok::<(), statute::builder::BuildError>(())
/// ```
pub struct ActionRule<H, E: Event> {
    pub(crate) triggers: Vec<Trigger<H, E::Kind>>,
    pub(crate) bundle: Option<ActionBundle<H, E>>,
}

impl<H, E: Event> ActionRule<H, E> {
    /// Create an empty rule.
    pub fn new() -> Self {
        ActionRule {
            triggers: Vec::new(),
            bundle: None,
        }
    }

    /// Add a trigger (disjunct) to the rule.
    pub fn trigger(mut self, trigger: Trigger<H, E::Kind>) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Assign the action bundle this rule invokes (required).
    pub fn run(mut self, bundle: ActionBundle<H, E>) -> Self {
        self.bundle = Some(bundle);
        self
    }
}

impl<H, E: Event> Default for ActionRule<H, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    #[derive(Debug)]
    enum Ev {
        Ping,
        Pong,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum EvKind {
        Ping,
        Pong,
    }

    impl Event for Ev {
        type Kind = EvKind;

        fn kind(&self) -> EvKind {
            match self {
                Self::Ping => EvKind::Ping,
                Self::Pong => EvKind::Pong,
            }
        }
    }

    struct Host;

    fn noop_bundle() -> ActionBundle<Host, Ev> {
        ActionBundle::new([Action::new("noop", |_h: &mut Host, _e: &Ev| Ok(()))]).unwrap()
    }

    #[test]
    fn trigger_collects_events() {
        let trigger: Trigger<Host, EvKind> = Trigger::on([EvKind::Ping, EvKind::Pong]);
        assert_eq!(trigger.events, vec![EvKind::Ping, EvKind::Pong]);
        assert!(trigger.guard.is_none());
    }

    #[test]
    fn rule_accumulates_triggers_in_order() {
        let rule: ActionRule<Host, Ev> = ActionRule::new()
            .trigger(Trigger::on([EvKind::Ping]))
            .trigger(Trigger::on([EvKind::Pong]))
            .run(noop_bundle());

        assert_eq!(rule.triggers.len(), 2);
        assert!(rule.bundle.is_some());
    }

    #[test]
    fn rule_without_bundle_stays_incomplete() {
        let rule: ActionRule<Host, Ev> = ActionRule::new().trigger(Trigger::on([EvKind::Ping]));
        assert!(rule.bundle.is_none());
    }
}
