//! The event value handed to every callback of a single fire.

use super::state::{State, Trigger};
use crate::machine::Fsm;

/// Context of a transition in flight.
///
/// Created fresh for each [`Fsm::fire`] call and passed by reference to every
/// hook that runs during it. The `fsm` back-reference lets a hook inspect the
/// machine or fire a follow-up transition; the state lock is not held while
/// hooks run, so re-entrant firing cannot deadlock.
pub struct TransitionEvent<'a, S: State, T: Trigger, C = ()> {
    /// The machine the transition is running on
    pub fsm: &'a Fsm<S, T, C>,
    /// The trigger that was fired
    pub trigger: T,
    /// The state being left
    pub src: S,
    /// The state being entered
    pub dst: S,
}

impl<'a, S: State, T: Trigger, C> TransitionEvent<'a, S, T, C> {
    /// The machine this event belongs to.
    pub fn fsm(&self) -> &'a Fsm<S, T, C> {
        self.fsm
    }

    /// Whether the transition leaves and re-enters the same state.
    pub fn is_self_transition(&self) -> bool {
        self.src == self.dst
    }
}

impl<S: State, T: Trigger, C> std::fmt::Debug for TransitionEvent<'_, S, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionEvent")
            .field("trigger", &self.trigger)
            .field("src", &self.src)
            .field("dst", &self.dst)
            .finish_non_exhaustive()
    }
}
