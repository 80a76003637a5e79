//! Lifecycle callbacks invoked while firing a transition.
//!
//! Callbacks receive the caller's context value and the event describing the
//! transition in flight. Returning an error short-circuits the rest of the
//! hook chain.

use super::event::TransitionEvent;
use super::state::{State, Trigger};

/// Error type returned by callbacks.
///
/// Any error type can be boxed into it with `?` or `.into()`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result returned by a callback.
pub type CallbackResult = Result<(), BoxError>;

type CallbackFn<S, T, C> =
    Box<dyn Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync>;

/// A hook run at a fixed point in the transition lifecycle.
///
/// Wraps a closure taking the fire context and the transition event. The
/// closure may call back into the machine through [`TransitionEvent::fsm`].
///
/// # Example
///
/// ```rust
/// use statum::core::Callback;
///
/// let log_leave: Callback<&str, &str> = Callback::new(|_ctx, event| {
///     println!("leaving {:?} via {:?}", event.src, event.trigger);
///     Ok(())
/// });
/// ```
pub struct Callback<S: State, T: Trigger, C = ()> {
    // None is the no-op hook
    f: Option<CallbackFn<S, T, C>>,
}

impl<S: State, T: Trigger, C> Callback<S, T, C> {
    /// Create a callback from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
    {
        Callback {
            f: Some(Box::new(f)),
        }
    }

    /// A callback that does nothing and never fails.
    pub fn noop() -> Self {
        Callback { f: None }
    }

    /// Whether this is the no-op callback.
    pub fn is_noop(&self) -> bool {
        self.f.is_none()
    }

    /// Run the callback for one event.
    pub fn invoke(&self, ctx: &C, event: &TransitionEvent<'_, S, T, C>) -> CallbackResult {
        match &self.f {
            Some(f) => f(ctx, event),
            None => Ok(()),
        }
    }
}

impl<S: State, T: Trigger, C> Default for Callback<S, T, C> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for Callback<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callback")
            .field("noop", &self.is_noop())
            .finish_non_exhaustive()
    }
}
