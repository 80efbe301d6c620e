//! Core State trait for state identifiers.
//!
//! A state identifier is an opaque value chosen by the integrating
//! application, typically a small fieldless enum. The engine only needs to
//! compare, hash and clone identifiers; it never orders them.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine state identifiers.
///
/// Identifiers are used as registry keys and as members of transition sets,
/// so they must be `Eq + Hash`. `Clone` lets the engine report them in errors
/// and history records, and `Debug` gives every identifier a printable name.
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Phase {
///     Init,
///     Wait,
///     Commit,
/// }
///
/// impl State for Phase {}
///
/// assert_eq!(Phase::Wait.name(), "Wait");
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Get the state's name for display/logging.
    ///
    /// Default implementation renders the identifier with `Debug`.
    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{self:?}"))
    }
}

macro_rules! impl_state_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl State for $ty {
                fn name(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_state_for_display!(u8, u16, u32, u64, usize, i32, i64, char);

impl State for &'static str {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl State for String {
    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {}

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Named {
        Ready,
    }

    impl State for Named {
        fn name(&self) -> Cow<'_, str> {
            Cow::Borrowed("ready")
        }
    }

    #[test]
    fn default_name_uses_debug() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn name_can_be_overridden() {
        assert_eq!(Named::Ready.name(), "ready");
    }

    #[test]
    fn primitive_identifiers_have_plain_names() {
        assert_eq!(7u8.name(), "7");
        assert_eq!('x'.name(), "x");
        assert_eq!("idle".name(), "idle");
        assert_eq!(String::from("busy").name(), "busy");
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Processing;
        let state2 = TestState::Processing;
        let state3 = TestState::Complete;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
