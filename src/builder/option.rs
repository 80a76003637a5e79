//! Composable per-state options passed to [`Config::add_state`].
//!
//! [`Config::add_state`]: crate::builder::Config::add_state

use crate::core::{Callback, CallbackResult, State, TransitionEvent, Trigger};

/// One configuration step applied to a state's node.
///
/// Options are applied in the order they are given, so a later
/// `OnEnter` replaces an earlier one and a later `Permit` for the same
/// trigger overwrites the earlier target together with its hooks.
pub enum StateOption<S: State, T: Trigger, C = ()> {
    /// Allow `trigger` to move the machine from this state to `target`,
    /// running `before` ahead of every other hook and `after` once all the
    /// others have succeeded
    Permit {
        trigger: T,
        target: S,
        before: Callback<S, T, C>,
        after: Callback<S, T, C>,
    },

    /// Hook run when the machine enters this state
    OnEnter(Callback<S, T, C>),

    /// Hook run when the machine leaves this state
    OnLeave(Callback<S, T, C>),
}

impl<S: State, T: Trigger, C> std::fmt::Debug for StateOption<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Permit {
                trigger,
                target,
                before,
                after,
            } => {
                let mut d = f.debug_struct("Permit");
                d.field("trigger", trigger).field("target", target);
                if before.is_noop() && after.is_noop() {
                    d.finish()
                } else {
                    d.finish_non_exhaustive()
                }
            }
            Self::OnEnter(_) => f.write_str("OnEnter(..)"),
            Self::OnLeave(_) => f.write_str("OnLeave(..)"),
        }
    }
}

/// Permit `trigger` to move the machine from the configured state to `target`.
///
/// `target` does not need to be declared yet; it is created on demand.
///
/// # Example
///
/// ```
/// use statum::builder::{with_permit, Config};
///
/// let config: Config<&str, &str> = Config::new()
///     .add_state("liquid", [with_permit("freeze", "solid")]);
///
/// assert!(config.contains_state(&"solid"));
/// ```
pub fn with_permit<S: State, T: Trigger, C>(trigger: T, target: S) -> StateOption<S, T, C> {
    StateOption::Permit {
        trigger,
        target,
        before: Callback::noop(),
        after: Callback::noop(),
    }
}

/// Permit `trigger` to move the machine to `target` with hooks bound to this
/// one transition.
///
/// `before` runs ahead of the source state's `on_leave`, so an error from it
/// aborts the transition. `after` runs last, once `on_enter_any` has
/// succeeded; the new state is already committed by then and stays committed
/// if `after` fails.
///
/// # Example
///
/// ```
/// use statum::builder::{with_permit_hooks, Config};
/// use statum::machine::Fsm;
///
/// let config: Config<&str, &str> = Config::new().add_state(
///     "idle",
///     [with_permit_hooks(
///         "start",
///         "busy",
///         |_, event| {
///             assert_eq!(event.fsm.current(), "idle");
///             Ok(())
///         },
///         |_, event| {
///             assert_eq!(event.fsm.current(), "busy");
///             Ok(())
///         },
///     )],
/// );
///
/// let fsm = Fsm::new("idle", config);
/// fsm.fire(&(), "start").unwrap();
/// ```
pub fn with_permit_hooks<S, T, C, B, A>(
    trigger: T,
    target: S,
    before: B,
    after: A,
) -> StateOption<S, T, C>
where
    S: State,
    T: Trigger,
    B: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
    A: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
{
    StateOption::Permit {
        trigger,
        target,
        before: Callback::new(before),
        after: Callback::new(after),
    }
}

/// Set the hook run when the machine enters the configured state.
pub fn with_on_enter_state<S, T, C, F>(f: F) -> StateOption<S, T, C>
where
    S: State,
    T: Trigger,
    F: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
{
    StateOption::OnEnter(Callback::new(f))
}

/// Set the hook run when the machine leaves the configured state.
///
/// A leave hook runs before the state is committed, so failing here aborts
/// the transition cleanly.
pub fn with_on_leave_state<S, T, C, F>(f: F) -> StateOption<S, T, C>
where
    S: State,
    T: Trigger,
    F: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
{
    StateOption::OnLeave(Callback::new(f))
}
