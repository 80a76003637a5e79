//! Chained Transitions
//!
//! This example fires follow-up transitions from inside hooks and shows how
//! a failing hook before or after the commit affects the machine.
//!
//! Key concepts:
//! - Re-entrant firing from `on_enter` hooks and from a permit's `after` hook
//! - Passing a caller context through to every hook
//! - Pre-commit failures abort, post-commit failures keep the new state
//!
//! Run with: RUST_LOG=statum=trace cargo run --example chained_transitions

use statum::builder::{
    with_on_enter_state, with_on_leave_state, with_permit, with_permit_hooks, Config,
};
use statum::fsm_enum;
use statum::machine::Fsm;
use tracing_subscriber::EnvFilter;

fsm_enum! {
    enum Job {
        Start,
        End,
        Finished,
    }
}

fsm_enum! {
    enum Step {
        Run,
        Finish,
        Reset,
    }
}

/// Caller context handed to every hook.
struct Ctx {
    cancelled: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Chained Transitions Example ===\n");

    let config = Config::<Job, Step, Ctx>::new()
        .add_state(
            Job::Start,
            [
                with_permit(Step::Run, Job::End),
                with_on_leave_state(|ctx: &Ctx, _| {
                    if ctx.cancelled {
                        Err("run cancelled by caller".into())
                    } else {
                        Ok(())
                    }
                }),
            ],
        )
        .add_state(
            Job::End,
            [
                with_permit_hooks(
                    Step::Finish,
                    Job::Finished,
                    |_, event| {
                        println!("  about to {} from {}", event.trigger, event.src);
                        Ok(())
                    },
                    |ctx, event| {
                        event.fsm.fire(ctx, Step::Reset)?;
                        Ok(())
                    },
                ),
                with_permit(Step::Reset, Job::Start),
                with_on_enter_state(|ctx, event| {
                    event.fsm.fire(ctx, Step::Finish)?;
                    Ok(())
                }),
            ],
        )
        .add_state(Job::Finished, [with_permit(Step::Reset, Job::Start)])
        .on_enter_any_state(|_, event| {
            println!("  entered {} (from {})", event.dst, event.src);
            Ok(())
        });

    let fsm = Fsm::new(Job::Start, config);

    println!("Firing {} with a cancelled context:", Step::Run);
    if let Err(err) = fsm.fire(&Ctx { cancelled: true }, Step::Run) {
        println!("  rejected: {err}; still {}", fsm.current());
    }

    println!("\nFiring {} again:", Step::Run);
    match fsm.fire(&Ctx { cancelled: false }, Step::Run) {
        Ok(()) => println!("  done; now {}", fsm.current()),
        Err(err) => println!("  failed: {err}"),
    }

    println!("\nForcing state to {}:", Job::Finished);
    match fsm.set_state(Job::Finished) {
        Ok(()) => println!("  now {} (no hooks ran)", fsm.current()),
        Err(err) => println!("  failed: {err}"),
    }

    println!("\n=== Example Complete ===");
}
