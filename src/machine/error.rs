//! Errors surfaced by the transition engine.

use crate::core::BoxError;
use thiserror::Error;

/// Errors that can occur when firing transitions or forcing state.
#[derive(Debug, Error)]
pub enum FsmError {
    #[error("Transition {trigger} is not permitted from state {state}")]
    InvalidTransition { state: String, trigger: String },

    #[error("State {state} is not registered")]
    UnregisteredState { state: String },

    /// Error returned by a lifecycle hook, passed through untouched
    #[error(transparent)]
    Callback(BoxError),
}

impl FsmError {
    pub(crate) fn invalid_transition(
        state: &impl std::fmt::Debug,
        trigger: &impl std::fmt::Debug,
    ) -> Self {
        FsmError::InvalidTransition {
            state: format!("{state:?}"),
            trigger: format!("{trigger:?}"),
        }
    }

    pub(crate) fn unregistered_state(state: &impl std::fmt::Debug) -> Self {
        FsmError::UnregisteredState {
            state: format!("{state:?}"),
        }
    }

    /// Wrap a hook error.
    ///
    /// A hook that fires a nested transition and returns its `FsmError` with
    /// `?` gets that error back as-is rather than nested inside `Callback`.
    pub(crate) fn from_callback(err: BoxError) -> Self {
        match err.downcast::<FsmError>() {
            Ok(inner) => *inner,
            Err(other) => FsmError::Callback(other),
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    pub fn is_unregistered_state(&self) -> bool {
        matches!(self, Self::UnregisteredState { .. })
    }

    /// The hook error, if this failure came from a callback.
    pub fn callback_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Callback(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
