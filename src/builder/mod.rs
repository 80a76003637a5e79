//! Builder API for declaring state machine configurations.
//!
//! A [`Config`] is assembled once with chained `add_state` calls, each taking
//! a list of [`StateOption`]s, and is then handed to one or more engines.
//! Configuration never fails: ambiguity is resolved by last write wins and
//! validity is checked when a transition is fired.

pub mod config;
pub mod macros;
pub mod option;

pub use config::{Config, Permit, StateNode};
pub use option::{
    with_on_enter_state, with_on_leave_state, with_permit, with_permit_hooks, StateOption,
};
