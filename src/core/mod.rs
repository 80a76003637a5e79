//! Core state machine types.
//!
//! This module contains the building blocks shared by the configuration
//! builder and the transition engine:
//! - State and trigger identifiers via the `State` and `Trigger` traits
//! - Lifecycle hooks via `Callback`
//! - The per-fire `TransitionEvent` passed to every hook

mod callback;
mod event;
mod state;

pub use callback::{BoxError, Callback, CallbackResult};
pub use event::TransitionEvent;
pub use state::{State, Trigger};
