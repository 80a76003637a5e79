//! Phases of Matter
//!
//! This example walks a machine through the classic solid/liquid/gas
//! transitions and prints the configuration as a Graphviz graph.
//!
//! Key concepts:
//! - Declaring states and permits with the builder
//! - Invalid triggers are rejected without moving the machine
//! - Exporting the transition table for visualization and walking its edges
//!
//! Run with: RUST_LOG=debug cargo run --example matter

use statum::builder::{with_on_enter_state, with_permit, Config};
use statum::fsm_enum;
use statum::machine::Fsm;
use tracing_subscriber::EnvFilter;

fsm_enum! {
    enum Phase {
        Solid,
        Liquid,
        Gas,
    }
}

fsm_enum! {
    enum Action {
        Melt,
        Freeze,
        Vaporize,
        Condense,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Phases of Matter Example ===\n");

    let config = Config::new()
        .add_state(
            Phase::Liquid,
            [
                with_permit(Action::Freeze, Phase::Solid),
                with_permit(Action::Vaporize, Phase::Gas),
            ],
        )
        .add_state(Phase::Gas, [with_permit(Action::Condense, Phase::Liquid)])
        .add_state(Phase::Solid, [with_permit(Action::Melt, Phase::Liquid)])
        .on_enter_any_state(|_, event| {
            println!("  {} --{}--> {}", event.src, event.trigger, event.dst);
            Ok(())
        })
        .add_state(
            Phase::Gas,
            [with_on_enter_state(|_, _| {
                println!("  (watch the lid)");
                Ok(())
            })],
        );

    let graph = config.graph();
    println!("{}", graph.dot("matter"));
    for state in &graph.states {
        let exits: Vec<String> = graph
            .edges_from(state)
            .map(|edge| format!("{} -> {}", edge.trigger, edge.to))
            .collect();
        println!("  {state}: {}", exits.join(", "));
    }
    println!();

    let fsm = Fsm::new(Phase::Liquid, config);
    println!("Initial state: {}", fsm.current());

    for action in [Action::Melt, Action::Vaporize, Action::Condense, Action::Freeze] {
        match fsm.fire(&(), action) {
            Ok(()) => println!("{action}: now {}", fsm.current()),
            Err(err) => println!("{action}: rejected ({err})"),
        }
    }

    println!("\nPermitted from {}: {:?}", fsm.current(), fsm.permitted_triggers());
    println!("\n=== Example Complete ===");
}
