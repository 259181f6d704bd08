//! Core Event trait for dispatched events.
//!
//! Events are ephemeral values: constructed by the caller, consumed during
//! one `process_event` call, then discarded. An event may carry per-variant
//! payload data, so the identity used for rule matching is a separate,
//! payload-free kind enumeration.

use std::fmt::Debug;

/// Trait for state machine events.
///
/// Rules never name concrete events (which may carry payload); they name
/// event *kinds*. `kind()` projects an event onto its rule-matching
/// identity. The [`event_enum!`](crate::event_enum) macro generates both
/// the event enum and its kind enum from one declaration.
///
/// # Example
///
/// ```rust
/// use statute::core::Event;
///
/// #[derive(Debug)]
/// enum Input {
///     KeyPress { code: u32 },
///     Shutdown,
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// enum InputKind {
///     KeyPress,
///     Shutdown,
/// }
///
/// impl Event for Input {
///     type Kind = InputKind;
///
///     fn kind(&self) -> InputKind {
///         match self {
///             Self::KeyPress { .. } => InputKind::KeyPress,
///             Self::Shutdown => InputKind::Shutdown,
///         }
///     }
/// }
///
/// assert_eq!(Input::KeyPress { code: 13 }.kind(), InputKind::KeyPress);
/// ```
pub trait Event {
    /// Payload-free identity of an event, itself a closed enumeration.
    type Kind: Copy + PartialEq + Debug + Send + Sync + 'static;

    /// Project this event onto its rule-matching kind.
    fn kind(&self) -> Self::Kind;
}
