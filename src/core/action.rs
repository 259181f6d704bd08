//! Side-effecting actions and ordered action bundles.
//!
//! Actions mutate the host object in response to an event. They are grouped
//! into ordered bundles; once a bundle's gate is satisfied, every action in
//! it runs in declaration order, unconditionally.

use crate::builder::BuildError;
use std::fmt;
use std::sync::Arc;

/// Error type produced by host-supplied actions and hooks.
///
/// The engine never inspects or wraps these: a failing action or hook
/// aborts the current `process_event` call and the error is handed back
/// to the caller unmodified.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// A named side-effecting routine over the host object.
///
/// # Example
///
/// ```rust
/// use statute::core::Action;
///
/// struct Counter {
///     hits: u32,
/// }
///
/// let bump = Action::new("bump", |c: &mut Counter, _e: &()| {
///     c.hits += 1;
///     Ok(())
/// });
///
/// let mut counter = Counter { hits: 0 };
/// bump.invoke(&mut counter, &()).unwrap();
/// assert_eq!(counter.hits, 1);
/// ```
pub struct Action<H, E> {
    name: &'static str,
    run: Arc<dyn Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync>,
}

impl<H, E> Action<H, E> {
    /// Create a named action from a side-effecting closure.
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: Fn(&mut H, &E) -> Result<(), HostError> + Send + Sync + 'static,
    {
        Action {
            name,
            run: Arc::new(run),
        }
    }

    /// The action's name, used in diagnostics and build errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the action against the host with the triggering event.
    pub fn invoke(&self, host: &mut H, event: &E) -> Result<(), HostError> {
        (self.run)(host, event)
    }

    fn same_routine(&self, other: &Action<H, E>) -> bool {
        Arc::ptr_eq(&self.run, &other.run)
    }
}

impl<H, E> Clone for Action<H, E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            run: Arc::clone(&self.run),
        }
    }
}

impl<H, E> fmt::Debug for Action<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action").field("name", &self.name).finish_non_exhaustive()
    }
}

/// An ordered, non-empty bundle of actions invoked together.
///
/// Construction rejects empty bundles and the same action object appearing
/// twice (a routine and its clone count as duplicates).
pub struct ActionBundle<H, E> {
    actions: Vec<Action<H, E>>,
}

impl<H, E> ActionBundle<H, E> {
    /// Build a bundle from an ordered pack of actions.
    pub fn new(actions: impl IntoIterator<Item = Action<H, E>>) -> Result<Self, BuildError> {
        let actions: Vec<_> = actions.into_iter().collect();
        if actions.is_empty() {
            return Err(BuildError::EmptyActionBundle);
        }
        for (i, action) in actions.iter().enumerate() {
            if actions[..i].iter().any(|prev| prev.same_routine(action)) {
                return Err(BuildError::DuplicateAction { name: action.name });
            }
        }
        Ok(ActionBundle { actions })
    }

    /// Run every action in declaration order, stopping at the first error.
    pub fn invoke_all(&self, host: &mut H, event: &E) -> Result<(), HostError> {
        for action in &self.actions {
            action.invoke(host, event)?;
        }
        Ok(())
    }

    /// Number of actions in the bundle.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// A bundle is never empty; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<H, E> Clone for ActionBundle<H, E> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<H, E> fmt::Debug for ActionBundle<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.actions.iter().map(Action::name))
            .finish()
    }
}
