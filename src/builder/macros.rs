//! Macros for ergonomic state and event declaration.

/// Generate a state enumeration with its `State` trait implementation.
///
/// # Example
///
/// ```
/// use statute::state_enum;
///
/// state_enum! {
///     pub enum DoorState {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// use statute::core::State;
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an event enumeration, its payload-free kind enumeration and the
/// `Event` trait implementation, from one declaration.
///
/// Variants may be unit variants or carry named fields.
///
/// # Example
///
/// ```
/// use statute::event_enum;
///
/// event_enum! {
///     pub enum NpcEvent {
///         Insult { delta: i32 },
///         Attack { damage: i32 },
///         Wave,
///     }
///     kinds: NpcEventKind
/// }
///
/// use statute::core::Event;
/// assert_eq!(NpcEvent::Attack { damage: 3 }.kind(), NpcEventKind::Attack);
/// assert_eq!(NpcEvent::Wave.kind(), NpcEventKind::Wave);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({ $($field:ident : $ty:ty),* $(,)? })?
            ),* $(,)?
        }
        kinds: $kind:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $({ $($field: $ty),* })?
            ),*
        }

        /// Payload-free kinds of the event enumeration above.
        #[derive(Clone, Copy, PartialEq, Eq, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Idle,
            Busy,
        }
    }

    event_enum! {
        enum TestEvent {
            Nudge { strength: u8 },
            Reset,
        }
        kinds: TestEventKind
    }

    #[test]
    fn state_enum_macro_generates_names() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Busy.name(), "Busy");
    }

    #[test]
    fn event_enum_macro_projects_kinds() {
        assert_eq!(TestEvent::Nudge { strength: 2 }.kind(), TestEventKind::Nudge);
        assert_eq!(TestEvent::Reset.kind(), TestEventKind::Reset);
    }

    #[test]
    fn macros_support_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        event_enum! {
            pub enum PublicEvent {
                X,
            }
            kinds: PublicEventKind
        }

        assert_eq!(PublicState::A.name(), "A");
        assert_eq!(PublicEvent::X.kind(), PublicEventKind::X);
    }
}
