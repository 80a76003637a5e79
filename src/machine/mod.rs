//! Transition engine.
//!
//! [`Fsm`] holds the current state and a shared [`Config`], validates fire
//! requests against it and runs the lifecycle hooks in a fixed order:
//!
//! - `on_leave` of the source state, then `on_leave_any`
//! - commit of the new state
//! - `on_enter` of the destination state, then `on_enter_any`
//!
//! [`Config`]: crate::builder::Config

mod error;
mod fsm;

pub use error::FsmError;
pub use fsm::Fsm;
