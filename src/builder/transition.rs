//! Author-facing transition rule expressions.
//!
//! A transition rule is one or more disjunctive branches — each naming a set
//! of source states, a set of event kinds and an optional guard — joined by
//! OR and assigned a single target state. The table builder later expands
//! each rule into atomic single-source transition records.

use crate::core::Guard;

/// One disjunct of a transition rule: `{source-states} × {events} [× guard]`.
///
/// # Example
///
/// ```rust
/// use statute::builder::Branch;
/// use statute::core::Guard;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum S { A, B }
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum K { Go }
///
/// struct Host;
///
/// let _branch: Branch<Host, S, K> = Branch::from([S::A, S::B])
///     .on([K::Go])
///     .when(Guard::new("always", |_h: &Host| true));
/// ```
pub struct Branch<H, S, K> {
    pub(crate) sources: Vec<S>,
    pub(crate) events: Vec<K>,
    pub(crate) guard: Option<Guard<H>>,
}

impl<H, S, K> Branch<H, S, K> {
    /// Start a branch from a set of source states.
    pub fn from(sources: impl IntoIterator<Item = S>) -> Self {
        Branch {
            sources: sources.into_iter().collect(),
            events: Vec::new(),
            guard: None,
        }
    }

    /// Name the event kinds this branch reacts to.
    pub fn on(mut self, events: impl IntoIterator<Item = K>) -> Self {
        self.events = events.into_iter().collect();
        self
    }

    /// Gate the branch with a guard (optional; absent means unconditional).
    pub fn when(mut self, guard: Guard<H>) -> Self {
        self.guard = Some(guard);
        self
    }
}

/// A disjunctive transition rule: OR-joined branches with one target state.
///
/// Validation happens when the rule table is built, not here; a rule is a
/// plain declaration.
pub struct TransitionRule<H, S, K> {
    pub(crate) branches: Vec<Branch<H, S, K>>,
    pub(crate) target: Option<S>,
}

impl<H, S, K> TransitionRule<H, S, K> {
    /// Create an empty rule.
    pub fn new() -> Self {
        TransitionRule {
            branches: Vec::new(),
            target: None,
        }
    }

    /// Add a branch (disjunct) to the rule.
    pub fn branch(mut self, branch: Branch<H, S, K>) -> Self {
        self.branches.push(branch);
        self
    }

    /// Assign the right-hand target state (required).
    pub fn to(mut self, target: S) -> Self {
        self.target = Some(target);
        self
    }
}

impl<H, S, K> Default for TransitionRule<H, S, K> {
    fn default() -> Self {
        Self::new()
    }
}
