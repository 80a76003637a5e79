//! Identifier traits for states and triggers.
//!
//! A state machine is parameterised by two identifier types: the states it
//! can occupy and the triggers that move it between them. Both only need to
//! be totally ordered, cloneable values, so strings, integers and field-less
//! enums all work out of the box.

use std::fmt::Debug;

/// Trait for state identifiers.
///
/// `Ord` keeps the configuration table in a deterministic order, which makes
/// graph exports and `permitted_triggers` stable across runs. `Debug` is used
/// for diagnostics and error messages.
///
/// Implemented automatically for every type meeting the bounds.
///
/// # Example
///
/// ```rust
/// use statum::core::State;
///
/// fn assert_state<S: State>() {}
///
/// assert_state::<&'static str>();
/// assert_state::<String>();
/// assert_state::<u32>();
/// ```
pub trait State: Ord + Clone + Debug + Send + Sync + 'static {}

impl<S> State for S where S: Ord + Clone + Debug + Send + Sync + 'static {}

/// Trait for transition labels (events that may move the machine).
///
/// Same bounds as [`State`] but a separate slot, so a machine can use
/// `(Phase, Action)` or `(String, String)` alike.
pub trait Trigger: Ord + Clone + Debug + Send + Sync + 'static {}

impl<T> Trigger for T where T: Ord + Clone + Debug + Send + Sync + 'static {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    fn is_state<S: State>(_: &S) -> bool {
        true
    }

    fn is_trigger<T: Trigger>(_: &T) -> bool {
        true
    }

    #[test]
    fn enums_strings_and_integers_are_states() {
        assert!(is_state(&TestState::Initial));
        assert!(is_state(&"liquid"));
        assert!(is_state(&String::from("gas")));
        assert!(is_state(&42u8));
    }

    #[test]
    fn same_type_can_serve_as_trigger() {
        assert!(is_trigger(&TestState::Processing));
        assert!(is_trigger(&"melt"));
    }

    #[test]
    fn state_ordering_follows_declaration() {
        let mut states = vec![
            TestState::Complete,
            TestState::Initial,
            TestState::Processing,
        ];
        states.sort();

        assert_eq!(
            states,
            vec![
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Initial;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
