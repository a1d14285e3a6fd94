use proptest::prelude::*;

use washpanel_core::catalog::CycleId;
use washpanel_core::config::{PANEL_HEIGHT, PANEL_WIDTH};
use washpanel_core::safety::EdgeDebouncer;
use washpanel_core::state::{Action, ControlStateMachine, Event};
use washpanel_core::touch::remap;

fn cycle_id() -> impl Strategy<Value = CycleId> {
    prop::sample::select(CycleId::ALL.to_vec())
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => Just(Event::Tick),
        1 => Just(Event::DoorEdge),
        1 => Just(Event::SafetyEdge),
        1 => Just(Event::Touch(Action::ToggleLock)),
        1 => Just(Event::Touch(Action::SelectNext)),
        1 => Just(Event::Touch(Action::SelectPrev)),
        1 => Just(Event::Touch(Action::TogglePlayPause)),
    ]
}

proptest! {
    #[test]
    fn next_and_prev_are_inverse(id in cycle_id()) {
        prop_assert_eq!(id.next().prev(), id);
        prop_assert_eq!(id.prev().next(), id);
    }

    #[test]
    fn five_steps_return_home(id in cycle_id()) {
        let mut walked = id;
        for _ in 0..5 {
            walked = walked.next();
        }
        prop_assert_eq!(walked, id);
    }

    #[test]
    fn remap_stays_on_panel(x in 0u16..=4096, y in 0u16..=4096) {
        let p = remap(x, y);
        prop_assert!(p.x <= PANEL_WIDTH);
        prop_assert!(p.y <= PANEL_HEIGHT);
    }

    #[test]
    fn accepted_edges_are_a_window_apart(gaps in prop::collection::vec(0u32..300, 1..50)) {
        let mut d = EdgeDebouncer::new(100);
        let mut now = 0u32;
        let mut last: Option<u32> = None;
        for gap in gaps {
            now += gap;
            if d.accept(now) {
                if let Some(prev) = last {
                    prop_assert!(now - prev >= 100);
                }
                last = Some(now);
            }
        }
    }

    #[test]
    fn machine_invariants_hold(events in prop::collection::vec(event(), 0..400)) {
        let mut m = ControlStateMachine::new();
        for ev in events {
            let before = *m.state();
            m.handle(ev);
            let after = m.state();

            if after.is_running() {
                prop_assert!(after.minutes_elapsed() <= after.total_duration_minutes());
                prop_assert!(after.seconds_in_minute() < 60);
            }
            if before.is_locked() || before.is_running() {
                prop_assert_eq!(before.selected_cycle(), after.selected_cycle());
            }
            if !before.is_safety_armed() {
                prop_assert_eq!(before.is_locked(), after.is_locked());
            }
            if !before.is_running() && after.is_running() {
                prop_assert!(!before.is_door_open());
                prop_assert_eq!(after.minutes_elapsed(), 0);
                prop_assert_eq!(after.seconds_in_minute(), 0);
            }
        }
    }
}
