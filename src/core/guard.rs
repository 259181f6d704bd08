//! Guard predicates for gating transitions and actions.
//!
//! Guards are pure boolean functions over the owning (host) object. They are
//! re-evaluated on every dispatch that reaches them; results are never cached
//! across calls, since the host may have changed between events.

use crate::builder::BuildError;
use std::fmt;
use std::sync::Arc;

/// Pure predicate over the host object that gates a rule.
///
/// A guard must not mutate observable state. This is a best-effort contract:
/// the predicate only receives `&H`, but interior mutability is not policed.
///
/// Guards are cheap to clone (the predicate is shared) and composable via
/// [`all`](Guard::all), [`any`](Guard::any), [`none`](Guard::none) and
/// [`not`](Guard::not). A rule declared without a guard is unconditional.
///
/// # Example
///
/// ```rust
/// use statute::core::Guard;
///
/// struct Npc {
///     health: i32,
/// }
///
/// let is_dead = Guard::new("is_dead", |npc: &Npc| npc.health == 0);
///
/// assert!(!is_dead.check(&Npc { health: 10 }));
/// assert!(is_dead.check(&Npc { health: 0 }));
/// ```
pub struct Guard<H> {
    name: &'static str,
    predicate: Arc<dyn Fn(&H) -> bool + Send + Sync>,
}

impl<H> Guard<H> {
    /// Create a named guard from a pure predicate function.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&H) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Arc::new(predicate),
        }
    }

    /// The guard's name, used in diagnostics and build errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the predicate against the host. Pure; no caching.
    pub fn check(&self, host: &H) -> bool {
        (self.predicate)(host)
    }

    /// Negate this guard.
    ///
    /// ```rust
    /// use statute::core::Guard;
    ///
    /// let ready = Guard::new("ready", |flag: &bool| *flag);
    /// let not_ready = ready.not();
    ///
    /// assert!(not_ready.check(&false));
    /// ```
    pub fn not(self) -> Guard<H>
    where
        H: 'static,
    {
        Guard {
            name: "not",
            predicate: Arc::new(move |host| !self.check(host)),
        }
    }

    /// Combine a pack of guards: true iff all are true.
    ///
    /// An empty pack is a construction error, as is the same guard object
    /// appearing twice (detected by predicate identity, so a guard and its
    /// clone count as duplicates).
    pub fn all(guards: impl IntoIterator<Item = Guard<H>>) -> Result<Guard<H>, BuildError>
    where
        H: 'static,
    {
        let guards = Self::validated_pack(guards)?;
        Ok(Guard {
            name: "all",
            predicate: Arc::new(move |host| guards.iter().all(|g| g.check(host))),
        })
    }

    /// Combine a pack of guards: true iff at least one is true.
    pub fn any(guards: impl IntoIterator<Item = Guard<H>>) -> Result<Guard<H>, BuildError>
    where
        H: 'static,
    {
        let guards = Self::validated_pack(guards)?;
        Ok(Guard {
            name: "any",
            predicate: Arc::new(move |host| guards.iter().any(|g| g.check(host))),
        })
    }

    /// Combine a pack of guards: true iff all are false.
    pub fn none(guards: impl IntoIterator<Item = Guard<H>>) -> Result<Guard<H>, BuildError>
    where
        H: 'static,
    {
        let guards = Self::validated_pack(guards)?;
        Ok(Guard {
            name: "none",
            predicate: Arc::new(move |host| !guards.iter().any(|g| g.check(host))),
        })
    }

    pub(crate) fn same_predicate(&self, other: &Guard<H>) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }

    fn validated_pack(
        guards: impl IntoIterator<Item = Guard<H>>,
    ) -> Result<Vec<Guard<H>>, BuildError> {
        let guards: Vec<_> = guards.into_iter().collect();
        if guards.is_empty() {
            return Err(BuildError::EmptyGuardPack);
        }
        for (i, guard) in guards.iter().enumerate() {
            if guards[..i].iter().any(|prev| prev.same_predicate(guard)) {
                return Err(BuildError::DuplicateGuard { name: guard.name });
            }
        }
        Ok(guards)
    }
}

impl<H> Clone for Guard<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<H> fmt::Debug for Guard<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Host {
        health: i32,
        attitude: i32,
    }

    fn is_dead() -> Guard<Host> {
        Guard::new("is_dead", |h: &Host| h.health == 0)
    }

    fn is_hostile() -> Guard<Host> {
        Guard::new("is_hostile", |h: &Host| h.attitude == 0)
    }

    #[test]
    fn guard_checks_predicate() {
        let guard = is_dead();
        assert!(guard.check(&Host { health: 0, attitude: 0 }));
        assert!(!guard.check(&Host { health: 5, attitude: 0 }));
    }

    #[test]
    fn guard_reevaluates_on_every_check() {
        let guard = is_dead();
        let mut host = Host { health: 1, attitude: 0 };
        assert!(!guard.check(&host));
        host.health = 0;
        assert!(guard.check(&host));
    }

    #[test]
    fn all_requires_every_guard() {
        let guard = Guard::all([is_dead(), is_hostile()]).unwrap();
        assert!(guard.check(&Host { health: 0, attitude: 0 }));
        assert!(!guard.check(&Host { health: 0, attitude: 3 }));
    }

    #[test]
    fn any_requires_one_guard() {
        let guard = Guard::any([is_dead(), is_hostile()]).unwrap();
        assert!(guard.check(&Host { health: 0, attitude: 3 }));
        assert!(!guard.check(&Host { health: 5, attitude: 3 }));
    }

    #[test]
    fn none_requires_every_guard_false() {
        let guard = Guard::none([is_dead(), is_hostile()]).unwrap();
        assert!(guard.check(&Host { health: 5, attitude: 3 }));
        assert!(!guard.check(&Host { health: 0, attitude: 3 }));
    }

    #[test]
    fn not_negates() {
        let guard = is_dead().not();
        assert!(guard.check(&Host { health: 5, attitude: 0 }));
        assert!(!guard.check(&Host { health: 0, attitude: 0 }));
    }

    #[test]
    fn empty_pack_is_rejected() {
        let result = Guard::<Host>::all([]);
        assert!(matches!(result, Err(BuildError::EmptyGuardPack)));
    }

    #[test]
    fn duplicate_guard_in_pack_is_rejected() {
        let guard = is_dead();
        let result = Guard::any([guard.clone(), guard]);
        assert!(matches!(
            result,
            Err(BuildError::DuplicateGuard { name: "is_dead" })
        ));
    }

    #[test]
    fn distinct_guards_with_same_logic_are_allowed() {
        // Identity is the predicate object, not its behavior.
        let result = Guard::any([is_dead(), is_dead()]);
        assert!(result.is_ok());
    }
}
