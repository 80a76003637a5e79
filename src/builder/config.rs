//! Declarative configuration of states, permits and hooks.

use crate::builder::option::StateOption;
use crate::core::{Callback, CallbackResult, State, TransitionEvent, Trigger};
use crate::graph::Graph;
use std::collections::BTreeMap;

/// A permitted transition: its target and the hooks bound to it.
pub struct Permit<S: State, T: Trigger, C = ()> {
    target: S,
    before: Callback<S, T, C>,
    after: Callback<S, T, C>,
}

impl<S: State, T: Trigger, C> Permit<S, T, C> {
    /// State the transition moves to.
    pub fn target(&self) -> &S {
        &self.target
    }

    pub(crate) fn before(&self) -> &Callback<S, T, C> {
        &self.before
    }

    pub(crate) fn after(&self) -> &Callback<S, T, C> {
        &self.after
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for Permit<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permit")
            .field("target", &self.target)
            .field("before", &self.before)
            .field("after", &self.after)
            .finish()
    }
}

/// Outgoing transitions and hooks of a single state.
pub struct StateNode<S: State, T: Trigger, C = ()> {
    transitions: BTreeMap<T, Permit<S, T, C>>,
    on_enter: Callback<S, T, C>,
    on_leave: Callback<S, T, C>,
}

impl<S: State, T: Trigger, C> StateNode<S, T, C> {
    fn new() -> Self {
        Self {
            transitions: BTreeMap::new(),
            on_enter: Callback::noop(),
            on_leave: Callback::noop(),
        }
    }

    /// Apply one option, returning the permit target if the option added one.
    fn apply(&mut self, option: StateOption<S, T, C>) -> Option<S> {
        match option {
            StateOption::Permit {
                trigger,
                target,
                before,
                after,
            } => {
                let permit = Permit {
                    target: target.clone(),
                    before,
                    after,
                };
                self.transitions.insert(trigger, permit);
                Some(target)
            }
            StateOption::OnEnter(callback) => {
                self.on_enter = callback;
                None
            }
            StateOption::OnLeave(callback) => {
                self.on_leave = callback;
                None
            }
        }
    }

    /// Outgoing `(trigger, target)` pairs, ordered by trigger.
    pub fn transitions(&self) -> impl Iterator<Item = (&T, &S)> + '_ {
        self.transitions
            .iter()
            .map(|(trigger, permit)| (trigger, &permit.target))
    }

    /// Permit registered for `trigger`, if any.
    pub fn permit(&self, trigger: &T) -> Option<&Permit<S, T, C>> {
        self.transitions.get(trigger)
    }

    /// Target reached from this state by `trigger`, if permitted.
    pub fn target(&self, trigger: &T) -> Option<&S> {
        self.permit(trigger).map(Permit::target)
    }

    pub(crate) fn on_enter(&self) -> &Callback<S, T, C> {
        &self.on_enter
    }

    pub(crate) fn on_leave(&self) -> &Callback<S, T, C> {
        &self.on_leave
    }
}

impl<S: State, T: Trigger, C> Default for StateNode<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for StateNode<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateNode")
            .field("transitions", &self.transitions().collect::<BTreeMap<_, _>>())
            .finish_non_exhaustive()
    }
}

/// State machine configuration built with a fluent API.
///
/// Any state mentioned by a builder call, either as the state being
/// configured or as a permit target, is created on first use with no
/// transitions and no-op hooks. Configuring the same state again augments
/// its node instead of replacing it.
///
/// Nothing is validated here; an unreachable or dead-end state is only
/// noticed when a transition is attempted.
///
/// # Example
///
/// ```rust
/// use statum::builder::{with_on_enter_state, with_permit, Config};
///
/// let config: Config<&str, &str> = Config::new()
///     .add_state(
///         "liquid",
///         [with_permit("freeze", "solid"), with_permit("vaporize", "gas")],
///     )
///     .add_state("gas", [with_permit("condense", "liquid")])
///     .add_state(
///         "solid",
///         [
///             with_permit("melt", "liquid"),
///             with_on_enter_state(|_, _| Ok(())),
///         ],
///     );
///
/// assert_eq!(config.target(&"liquid", &"freeze"), Some(&"solid"));
/// assert_eq!(config.states().count(), 3);
/// ```
pub struct Config<S: State, T: Trigger, C = ()> {
    states: BTreeMap<S, StateNode<S, T, C>>,
    on_leave_any: Callback<S, T, C>,
    on_enter_any: Callback<S, T, C>,
}

impl<S: State, T: Trigger, C> Config<S, T, C> {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self {
            states: BTreeMap::new(),
            on_leave_any: Callback::noop(),
            on_enter_any: Callback::noop(),
        }
    }

    /// Register `state`, or augment it if already present, applying
    /// `options` in order.
    pub fn add_state<I>(mut self, state: S, options: I) -> Self
    where
        I: IntoIterator<Item = StateOption<S, T, C>>,
    {
        let node = self.states.entry(state).or_default();
        let targets: Vec<S> = options
            .into_iter()
            .filter_map(|option| node.apply(option))
            .collect();

        for target in targets {
            self.states.entry(target).or_default();
        }

        self
    }

    /// Set the hook run on every transition before the state is committed.
    pub fn on_leave_any_state<F>(mut self, f: F) -> Self
    where
        F: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
    {
        self.on_leave_any = Callback::new(f);
        self
    }

    /// Set the hook run on every transition after the state is committed.
    pub fn on_enter_any_state<F>(mut self, f: F) -> Self
    where
        F: Fn(&C, &TransitionEvent<'_, S, T, C>) -> CallbackResult + Send + Sync + 'static,
    {
        self.on_enter_any = Callback::new(f);
        self
    }

    /// Declared states in order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.keys()
    }

    /// Whether `state` has been declared, directly or as a permit target.
    pub fn contains_state(&self, state: &S) -> bool {
        self.states.contains_key(state)
    }

    /// Node for `state`, if declared.
    pub fn node(&self, state: &S) -> Option<&StateNode<S, T, C>> {
        self.states.get(state)
    }

    /// Outgoing `(trigger, target)` pairs of `state`, ordered by trigger.
    ///
    /// Empty when the state is undeclared.
    pub fn transitions<'a>(&'a self, state: &S) -> impl Iterator<Item = (&'a T, &'a S)> + 'a {
        self.states
            .get(state)
            .into_iter()
            .flat_map(|node| node.transitions())
    }

    /// Permit for `trigger` out of `state`, if any.
    pub fn permit(&self, state: &S, trigger: &T) -> Option<&Permit<S, T, C>> {
        self.states.get(state).and_then(|node| node.permit(trigger))
    }

    /// Target reached from `state` by `trigger`, if permitted.
    pub fn target(&self, state: &S, trigger: &T) -> Option<&S> {
        self.states.get(state).and_then(|node| node.target(trigger))
    }

    /// Snapshot of the state/transition table for visualization.
    pub fn graph(&self) -> Graph<S, T> {
        Graph::from_config(self)
    }

    pub(crate) fn on_leave_any(&self) -> &Callback<S, T, C> {
        &self.on_leave_any
    }

    pub(crate) fn on_enter_any(&self) -> &Callback<S, T, C> {
        &self.on_enter_any
    }
}

impl<S: State, T: Trigger, C> Default for Config<S, T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for Config<S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}
