//! Property-based tests for the transition engine.
//!
//! These tests use proptest to check the engine against a plain map model
//! over randomly generated configurations and trigger sequences.

use proptest::prelude::*;
use statum::builder::{with_on_enter_state, with_on_leave_state, with_permit, Config};
use statum::machine::{Fsm, FsmError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

type Permit = (u8, u8, u8);

prop_compose! {
    fn arbitrary_permit()(from in 0..5u8, trigger in 0..4u8, to in 0..5u8) -> Permit {
        (from, trigger, to)
    }
}

fn build(permits: &[Permit]) -> Config<u8, u8> {
    permits
        .iter()
        .fold(Config::new(), |config, &(from, trigger, to)| {
            config.add_state(from, [with_permit(trigger, to)])
        })
}

fn model(permits: &[Permit]) -> BTreeMap<(u8, u8), u8> {
    permits
        .iter()
        .map(|&(from, trigger, to)| ((from, trigger), to))
        .collect()
}

fn logging_config(permits: &[Permit], log: &Arc<Mutex<Vec<String>>>) -> Config<u8, u8> {
    let mut config = build(permits);
    for state in 0..5u8 {
        let (enter, leave) = (Arc::clone(log), Arc::clone(log));
        config = config.add_state(
            state,
            [
                with_on_enter_state(move |_, e| {
                    enter.lock().unwrap().push(format!("enter {}", e.dst));
                    Ok(())
                }),
                with_on_leave_state(move |_, e| {
                    leave.lock().unwrap().push(format!("leave {}", e.src));
                    Ok(())
                }),
            ],
        );
    }

    let (enter_any, leave_any) = (Arc::clone(log), Arc::clone(log));
    config
        .on_leave_any_state(move |_, _| {
            leave_any.lock().unwrap().push("leave any".to_string());
            Ok(())
        })
        .on_enter_any_state(move |_, _| {
            enter_any.lock().unwrap().push("enter any".to_string());
            Ok(())
        })
}

proptest! {
    #[test]
    fn fire_agrees_with_model(
        permits in prop::collection::vec(arbitrary_permit(), 0..12),
        initial in 0..5u8,
        triggers in prop::collection::vec(0..4u8, 0..20),
    ) {
        let table = model(&permits);
        let fsm = Fsm::new(initial, build(&permits));
        let mut expected = initial;

        for trigger in triggers {
            let result = fsm.fire(&(), trigger);
            match table.get(&(expected, trigger)) {
                Some(&to) => {
                    prop_assert!(result.is_ok());
                    expected = to;
                }
                None => {
                    prop_assert!(matches!(result, Err(FsmError::InvalidTransition { .. })), "expected InvalidTransition, got {:?}", result);
                }
            }
            prop_assert_eq!(fsm.current(), expected);
        }
    }

    #[test]
    fn can_fire_matches_fire(
        permits in prop::collection::vec(arbitrary_permit(), 0..12),
        initial in 0..5u8,
        trigger in 0..4u8,
    ) {
        let fsm = Fsm::new(initial, build(&permits));
        let permitted = fsm.can_fire(&trigger);

        prop_assert_eq!(permitted, fsm.permitted_triggers().contains(&trigger));
        prop_assert_eq!(permitted, fsm.fire(&(), trigger).is_ok());
    }

    #[test]
    fn hooks_log_in_fixed_order(
        permits in prop::collection::vec(arbitrary_permit(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let (from, trigger, _) = permits[pick.index(permits.len())];
        let to = model(&permits)[&(from, trigger)];

        let log = Arc::new(Mutex::new(Vec::new()));
        let fsm = Fsm::new(from, logging_config(&permits, &log));
        fsm.fire(&(), trigger).unwrap();

        prop_assert_eq!(
            log.lock().unwrap().clone(),
            vec![
                format!("leave {from}"),
                "leave any".to_string(),
                format!("enter {to}"),
                "enter any".to_string(),
            ]
        );
    }

    #[test]
    fn set_state_accepts_exactly_declared_states(
        permits in prop::collection::vec(arbitrary_permit(), 0..12),
        target in 0..7u8,
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let config = logging_config(&permits, &log);
        let declared = target < 5;
        let fsm = Fsm::new(0u8, config);

        let result = fsm.set_state(target);

        if declared {
            prop_assert!(result.is_ok());
            prop_assert_eq!(fsm.current(), target);
        } else {
            prop_assert!(matches!(result, Err(FsmError::UnregisteredState { .. })), "expected UnregisteredState, got {:?}", result);
            prop_assert_eq!(fsm.current(), 0);
        }
        prop_assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn graph_has_one_edge_per_distinct_permit(
        permits in prop::collection::vec(arbitrary_permit(), 0..12),
    ) {
        let config = build(&permits);
        let graph = config.graph();

        prop_assert_eq!(graph.edges.len(), model(&permits).len());
        for edge in &graph.edges {
            prop_assert!(graph.states.contains(&edge.from));
            prop_assert!(graph.states.contains(&edge.to));
            prop_assert_eq!(config.target(&edge.from, &edge.trigger), Some(&edge.to));
        }
    }
}
