//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait. A state is one value
//! of a closed, finite enumeration owned exclusively by the machine instance.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// States are plain enumeration values: copied freely, compared for
/// equality during dispatch, never mutated in place. The machine holds
/// exactly one current `State` at any instant.
///
/// # Required Traits
///
/// - `Copy` + `PartialEq`: dispatch compares and copies states on every event
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send + Sync + 'static`: rule tables may be shared read-only across threads
///
/// # Example
///
/// ```rust
/// use statute::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &'static str;
}
