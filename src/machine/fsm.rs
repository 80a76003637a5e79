//! Transition engine that fires permitted transitions and runs their hooks.

use crate::builder::Config;
use crate::core::{Callback, State, TransitionEvent, Trigger};
use crate::machine::error::FsmError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Finite state machine over a shared, read-only [`Config`].
///
/// The current state is the only mutable field and sits behind a lock that
/// is never held while a hook runs, so hooks may call [`Fsm::fire`] on the
/// same machine.
pub struct Fsm<S: State, T: Trigger, C = ()> {
    current: Mutex<S>,
    config: Arc<Config<S, T, C>>,
}

impl<S: State, T: Trigger, C> Fsm<S, T, C> {
    /// Create a machine in `initial`.
    ///
    /// `initial` is not checked against the configuration. Pass an
    /// `Arc<Config>` to share one configuration between several machines.
    pub fn new(initial: S, config: impl Into<Arc<Config<S, T, C>>>) -> Self {
        Self {
            current: Mutex::new(initial),
            config: config.into(),
        }
    }

    /// Current state.
    pub fn current(&self) -> S {
        self.current.lock().clone()
    }

    /// Shared configuration this machine runs on.
    pub fn config(&self) -> &Arc<Config<S, T, C>> {
        &self.config
    }

    /// Whether `trigger` is permitted from the current state.
    pub fn can_fire(&self, trigger: &T) -> bool {
        let current = self.current();
        self.config.target(&current, trigger).is_some()
    }

    /// Triggers permitted from the current state, in order.
    pub fn permitted_triggers(&self) -> Vec<T> {
        let current = self.current();
        self.config
            .transitions(&current)
            .map(|(trigger, _)| trigger.clone())
            .collect()
    }

    /// Fire `trigger` from the current state.
    ///
    /// Hooks run in this order, stopping at the first error:
    ///
    /// 1. `before` of the permit being taken
    /// 2. `on_leave` of the source state
    /// 3. the configuration's `on_leave_any`
    /// 4. the new state is committed
    /// 5. `on_enter` of the destination state
    /// 6. the configuration's `on_enter_any`
    /// 7. `after` of the permit being taken
    ///
    /// An error from steps 1-3 leaves the machine where it was. An error from
    /// steps 5-7 is returned but the machine stays in the destination state.
    ///
    /// # Concurrency
    ///
    /// The source state is read once on entry and the lock is only taken
    /// again for the commit, so concurrent calls are not serialized. Two
    /// threads firing from the same state both see that state as `src`, both
    /// run their hooks and both commit; the machine ends in whichever
    /// destination was written last. Callers that need one transition at a
    /// time must serialize their calls to `fire`.
    pub fn fire(&self, ctx: &C, trigger: T) -> Result<(), FsmError> {
        let src = self.current();
        let Some(permit) = self.config.permit(&src, &trigger) else {
            debug!(state = ?src, trigger = ?trigger, "transition not permitted");
            return Err(FsmError::invalid_transition(&src, &trigger));
        };

        let event = TransitionEvent {
            fsm: self,
            trigger,
            src,
            dst: permit.target().clone(),
        };

        self.run_hook("before", permit.before(), ctx, &event)
            .inspect_err(|_| debug!(event = ?event, "before aborted transition"))?;
        if let Some(node) = self.config.node(&event.src) {
            self.run_hook("on_leave", node.on_leave(), ctx, &event)
                .inspect_err(|_| debug!(event = ?event, "on_leave aborted transition"))?;
        }
        self.run_hook("on_leave_any", self.config.on_leave_any(), ctx, &event)
            .inspect_err(|_| debug!(event = ?event, "on_leave_any aborted transition"))?;

        *self.current.lock() = event.dst.clone();
        debug!(
            src = ?event.src,
            dst = ?event.dst,
            trigger = ?event.trigger,
            self_transition = event.is_self_transition(),
            "transition committed"
        );

        if let Some(node) = self.config.node(&event.dst) {
            self.run_hook("on_enter", node.on_enter(), ctx, &event)
                .inspect_err(|e| {
                    warn!(event = ?event, error = %e, "on_enter failed after commit")
                })?;
        }
        self.run_hook("on_enter_any", self.config.on_enter_any(), ctx, &event)
            .inspect_err(|e| {
                warn!(event = ?event, error = %e, "on_enter_any failed after commit")
            })?;
        self.run_hook("after", permit.after(), ctx, &event)
            .inspect_err(|e| warn!(event = ?event, error = %e, "after failed after commit"))?;

        Ok(())
    }

    /// Force the machine into `state` without running any hook.
    ///
    /// Meant for resynchronising with an external source, e.g. a persisted
    /// state. Fails if `state` was never declared.
    pub fn set_state(&self, state: S) -> Result<(), FsmError> {
        if !self.config.contains_state(&state) {
            return Err(FsmError::unregistered_state(&state));
        }

        debug!(state = ?state, "state set directly");
        *self.current.lock() = state;
        Ok(())
    }

    fn run_hook(
        &self,
        hook: &'static str,
        callback: &Callback<S, T, C>,
        ctx: &C,
        event: &TransitionEvent<'_, S, T, C>,
    ) -> Result<(), FsmError> {
        if callback.is_noop() {
            return Ok(());
        }
        trace!(hook, src = ?event.src, dst = ?event.dst, "running hook");
        callback.invoke(ctx, event).map_err(FsmError::from_callback)
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for Fsm<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsm")
            .field("current", &*self.current.lock())
            .field("config", &self.config)
            .finish()
    }
}
