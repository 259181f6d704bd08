//! Property-based tests for the dispatch contract.
//!
//! These tests use proptest to verify properties hold across many randomly
//! generated event sequences.

use proptest::prelude::*;
use statute::builder::{ActionRule, Branch, TransitionRule, Trigger};
use statute::core::{Action, ActionBundle, Guard};
use statute::engine::{Machine, RuleTable};
use statute::{event_enum, state_enum};
use std::sync::Arc;

state_enum! {
    pub enum Phase {
        A,
        B,
        C,
    }
}

event_enum! {
    #[derive(Clone)]
    pub enum Input {
        Go,
        Toggle,
        Noise,
    }
    kinds: InputKind
}

#[derive(Default, Clone, PartialEq, Debug)]
struct Rig {
    ready: bool,
    toggles: u32,
}

// A --Go--> B unconditionally, B --Go--> C once ready; Toggle flips the
// ready flag via an action rule and counts itself; Noise matches nothing.
fn table() -> Arc<RuleTable<Rig, Phase, Input>> {
    let toggle = ActionBundle::new([Action::new("toggle", |r: &mut Rig, _e: &Input| {
        r.ready = !r.ready;
        r.toggles += 1;
        Ok(())
    })])
    .unwrap();

    Arc::new(
        RuleTable::builder()
            .transition(
                TransitionRule::new()
                    .branch(Branch::from([Phase::A]).on([InputKind::Go]))
                    .to(Phase::B),
            )
            .transition(
                TransitionRule::new()
                    .branch(
                        Branch::from([Phase::B])
                            .on([InputKind::Go])
                            .when(Guard::new("ready", |r: &Rig| r.ready)),
                    )
                    .to(Phase::C),
            )
            .action(
                ActionRule::new()
                    .trigger(Trigger::on([InputKind::Toggle]))
                    .run(toggle),
            )
            .build()
            .unwrap(),
    )
}

prop_compose! {
    fn arbitrary_input()(variant in 0..3u8) -> Input {
        match variant {
            0 => Input::Go,
            1 => Input::Toggle,
            _ => Input::Noise,
        }
    }
}

fn run_sequence(events: &[Input]) -> (Phase, Rig) {
    let mut machine = Machine::new(table(), Phase::A);
    let mut rig = Rig::default();
    for event in events {
        machine.process_event(&mut rig, event).unwrap();
    }
    (machine.current_state(), rig)
}

proptest! {
    #[test]
    fn dispatch_is_deterministic(events in prop::collection::vec(arbitrary_input(), 0..30)) {
        let (state1, rig1) = run_sequence(&events);
        let (state2, rig2) = run_sequence(&events);

        prop_assert_eq!(state1, state2);
        prop_assert_eq!(rig1, rig2);
    }

    #[test]
    fn unmatched_events_never_change_anything(count in 0..20usize) {
        let events = vec![Input::Noise; count];
        let (state, rig) = run_sequence(&events);

        prop_assert_eq!(state, Phase::A);
        prop_assert_eq!(rig, Rig::default());
    }

    #[test]
    fn action_rules_fire_once_per_matching_event(
        events in prop::collection::vec(arbitrary_input(), 0..30)
    ) {
        let expected = events.iter().filter(|e| matches!(e, Input::Toggle)).count() as u32;
        let (_state, rig) = run_sequence(&events);

        prop_assert_eq!(rig.toggles, expected);
    }

    #[test]
    fn machine_never_regresses_along_the_chain(
        events in prop::collection::vec(arbitrary_input(), 0..30)
    ) {
        // The table only moves forward: once in C, always in C.
        let mut machine = Machine::new(table(), Phase::A);
        let mut rig = Rig::default();
        let mut reached_c = false;

        for event in &events {
            machine.process_event(&mut rig, event).unwrap();
            if machine.current_state() == Phase::C {
                reached_c = true;
            }
            if reached_c {
                prop_assert_eq!(machine.current_state(), Phase::C);
            }
        }
    }

    #[test]
    fn first_declared_rule_wins_under_ambiguity(go_first in any::<bool>()) {
        // Two satisfiable rules for (A, Go); the declared order decides,
        // regardless of how the rest of the host looks.
        let table = RuleTable::builder()
            .transition(
                TransitionRule::new()
                    .branch(
                        Branch::from([Phase::A])
                            .on([InputKind::Go])
                            .when(Guard::new("g1", |_r: &Rig| true)),
                    )
                    .to(Phase::B),
            )
            .transition(
                TransitionRule::new()
                    .branch(
                        Branch::from([Phase::A])
                            .on([InputKind::Go])
                            .when(Guard::new("g2", |_r: &Rig| true)),
                    )
                    .to(Phase::C),
            )
            .build()
            .unwrap();

        let mut machine = Machine::new(Arc::new(table), Phase::A);
        let mut rig = Rig { ready: go_first, toggles: 0 };

        machine.process_event(&mut rig, &Input::Go).unwrap();
        prop_assert_eq!(machine.current_state(), Phase::B);
    }
}
