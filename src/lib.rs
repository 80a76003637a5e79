//! Statum: a callback-driven finite state machine
//!
//! Statum splits a state machine into a declarative configuration and a small
//! runtime engine. The configuration lists the states, the triggers permitted
//! from each of them and the hooks to run on the way; the engine holds the
//! current state and enforces that table.
//!
//! # Core Concepts
//!
//! - **Config**: states, permits and hooks, built once with a fluent API
//! - **Fsm**: the engine, sharing one `Config` behind an `Arc`
//! - **Hooks**: a permit's `before`, `on_leave`, `on_leave_any`, commit,
//!   `on_enter`, `on_enter_any`, then the permit's `after`, always in that
//!   order
//! - **Graph**: a serializable snapshot of the configuration for visualization
//!
//! # Example
//!
//! ```rust
//! use statum::builder::{with_on_enter_state, with_permit, Config};
//! use statum::machine::{Fsm, FsmError};
//! use statum::fsm_enum;
//!
//! fsm_enum! {
//!     enum Phase {
//!         Solid,
//!         Liquid,
//!         Gas,
//!     }
//! }
//!
//! fsm_enum! {
//!     enum Action {
//!         Melt,
//!         Freeze,
//!         Vaporize,
//!         Condense,
//!     }
//! }
//!
//! let config = Config::new()
//!     .add_state(
//!         Phase::Liquid,
//!         [
//!             with_permit(Action::Freeze, Phase::Solid),
//!             with_permit(Action::Vaporize, Phase::Gas),
//!         ],
//!     )
//!     .add_state(
//!         Phase::Gas,
//!         [
//!             with_permit(Action::Condense, Phase::Liquid),
//!             with_on_enter_state(|_, event| {
//!                 println!("{} -> {} via {}", event.src, event.dst, event.trigger);
//!                 Ok(())
//!             }),
//!         ],
//!     )
//!     .add_state(Phase::Solid, [with_permit(Action::Melt, Phase::Liquid)]);
//!
//! let fsm = Fsm::new(Phase::Liquid, config);
//!
//! assert!(matches!(
//!     fsm.fire(&(), Action::Melt),
//!     Err(FsmError::InvalidTransition { .. })
//! ));
//! assert_eq!(fsm.current(), Phase::Liquid);
//!
//! fsm.fire(&(), Action::Vaporize).unwrap();
//! assert_eq!(fsm.current(), Phase::Gas);
//!
//! fsm.fire(&(), Action::Condense).unwrap();
//! assert_eq!(fsm.current(), Phase::Liquid);
//! ```
//!
//! # Demos
//!
//! Runnable programs live in `demos/` rather than `examples/` and are
//! registered as Cargo examples in `Cargo.toml`, so they still run with
//! `cargo run --example matter` or `cargo run --example chained_transitions`.

pub mod builder;
pub mod core;
pub mod graph;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{
    with_on_enter_state, with_on_leave_state, with_permit, with_permit_hooks, Config, Permit,
    StateOption,
};
pub use crate::core::{BoxError, Callback, CallbackResult, State, TransitionEvent, Trigger};
pub use crate::graph::{Dot, Edge, Graph};
pub use crate::machine::{Fsm, FsmError};
