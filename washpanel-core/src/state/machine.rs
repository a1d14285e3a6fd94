//! Control state machine
//!
//! Two machine states, `Stopped` and `Running`. The lock, door and safety
//! flags are orthogonal modifiers that gate individual transitions:
//!
//! | event            | effective when                 | effect                     |
//! |------------------|--------------------------------|----------------------------|
//! | ToggleLock       | safety armed                   | flip `locked`              |
//! | SelectNext/Prev  | stopped and unlocked           | step the catalog           |
//! | TogglePlayPause  | stopped, door closed           | start run (reset clock)    |
//! | TogglePlayPause  | running                        | pause (clock kept)         |
//! | Tick             | running                        | advance clock, maybe stop  |
//! | DoorEdge         | always (visible only stopped)  | flip `door_open`           |
//! | SafetyEdge       | always                         | flip `safety_armed`        |
//!
//! Leaving `Running` always re-reports the door, since edges seen during the
//! run were only recorded.
//!
//! Every transition runs to completion and reports the display updates it
//! needs; nothing here blocks.

use heapless::Vec;
use washpanel_protocol::Widget;

use super::events::{Action, Event, UiUpdate};
use crate::catalog::{CycleId, WashCycle, DEFAULT_CYCLE};
use crate::timer::{ClockStatus, RunClock};

/// Most display updates a single event produces
pub const MAX_UPDATES: usize = 5;

/// Display updates produced by one event
pub type Updates = Vec<UiUpdate, MAX_UPDATES>;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MachineState {
    /// Idle or paused; program selection allowed
    Stopped,
    /// Program running; ticks advance the clock
    Running,
}

/// The operating state of the panel
///
/// Created once at startup and owned by [`ControlStateMachine`]; read-only
/// to everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    machine: MachineState,
    selected: CycleId,
    locked: bool,
    door_open: bool,
    safety_armed: bool,
    clock: RunClock,
}

impl ControlState {
    /// Power-on state: stopped, unlocked, door assumed open, safety disarmed
    pub const fn new() -> Self {
        Self {
            machine: MachineState::Stopped,
            selected: DEFAULT_CYCLE,
            locked: false,
            door_open: true,
            safety_armed: false,
            clock: RunClock::new(),
        }
    }

    pub fn machine(&self) -> MachineState {
        self.machine
    }

    pub fn is_running(&self) -> bool {
        self.machine == MachineState::Running
    }

    pub fn selected_cycle(&self) -> CycleId {
        self.selected
    }

    /// Program definition of the current selection
    pub fn cycle(&self) -> &'static WashCycle {
        self.selected.cycle()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }

    pub fn is_safety_armed(&self) -> bool {
        self.safety_armed
    }

    pub fn seconds_in_minute(&self) -> u8 {
        self.clock.seconds_in_minute()
    }

    pub fn minutes_elapsed(&self) -> u16 {
        self.clock.minutes_elapsed()
    }

    pub fn total_duration_minutes(&self) -> u16 {
        self.clock.total_minutes()
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of the control state and its transition logic
#[derive(Debug, Clone, Default)]
pub struct ControlStateMachine {
    state: ControlState,
}

impl ControlStateMachine {
    pub const fn new() -> Self {
        Self {
            state: ControlState::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Apply one event and return the display updates it requires
    pub fn handle(&mut self, event: Event) -> Updates {
        let mut updates = Updates::new();
        match event {
            Event::Touch(Action::ToggleLock) => self.toggle_lock(&mut updates),
            Event::Touch(Action::SelectNext) => self.select(CycleId::next, &mut updates),
            Event::Touch(Action::SelectPrev) => self.select(CycleId::prev, &mut updates),
            Event::Touch(Action::TogglePlayPause) => self.toggle_play_pause(&mut updates),
            Event::Tick => self.tick(&mut updates),
            Event::DoorEdge => self.door_edge(&mut updates),
            Event::SafetyEdge => self.state.safety_armed = !self.state.safety_armed,
        }
        updates
    }

    fn toggle_lock(&mut self, updates: &mut Updates) {
        if !self.state.safety_armed {
            return;
        }
        self.state.locked = !self.state.locked;
        push(
            updates,
            UiUpdate::Lock {
                locked: self.state.locked,
            },
        );
    }

    fn select(&mut self, step: fn(CycleId) -> CycleId, updates: &mut Updates) {
        if self.state.is_running() || self.state.locked {
            return;
        }
        self.state.selected = step(self.state.selected);
        push(updates, UiUpdate::CycleSelected(self.state.selected));
    }

    fn toggle_play_pause(&mut self, updates: &mut Updates) {
        match self.state.machine {
            MachineState::Stopped if self.state.door_open => {
                push(updates, UiUpdate::DoorOpenWarning);
            }
            MachineState::Stopped => {
                let total_minutes = self.state.cycle().total_minutes();
                self.state.clock.start(total_minutes);
                self.state.machine = MachineState::Running;
                push(updates, UiUpdate::RunStarted { total_minutes });
            }
            MachineState::Running => self.stop(updates),
        }
    }

    fn tick(&mut self, updates: &mut Updates) {
        if !self.state.is_running() {
            return;
        }

        let status = self.state.clock.advance();
        push(
            updates,
            UiUpdate::Clock {
                minutes: self.state.clock.minutes_elapsed(),
                seconds: self.state.clock.seconds_in_minute(),
            },
        );

        if status == ClockStatus::Finished {
            self.stop(updates);
            push(updates, UiUpdate::ForceRedraw(Widget::Lock));
            push(updates, UiUpdate::CycleComplete);
        }
    }

    fn stop(&mut self, updates: &mut Updates) {
        self.state.machine = MachineState::Stopped;
        push(updates, UiUpdate::Paused);
        push(
            updates,
            UiUpdate::DoorIndicator {
                open: self.state.door_open,
            },
        );
    }

    fn door_edge(&mut self, updates: &mut Updates) {
        self.state.door_open = !self.state.door_open;
        // Recorded while running, but only shown once stopped
        if !self.state.is_running() {
            push(
                updates,
                UiUpdate::DoorIndicator {
                    open: self.state.door_open,
                },
            );
        }
    }
}

fn push(updates: &mut Updates, update: UiUpdate) {
    // No transition produces more than MAX_UPDATES
    let _ = updates.push(update);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> ControlStateMachine {
        let mut m = ControlStateMachine::new();
        m.handle(Event::SafetyEdge);
        m
    }

    fn door_closed() -> ControlStateMachine {
        let mut m = ControlStateMachine::new();
        m.handle(Event::DoorEdge);
        m
    }

    fn press(m: &mut ControlStateMachine, action: Action) -> Updates {
        m.handle(Event::Touch(action))
    }

    #[test]
    fn test_power_on_state() {
        let m = ControlStateMachine::new();
        let s = m.state();
        assert_eq!(s.machine(), MachineState::Stopped);
        assert_eq!(s.selected_cycle(), CycleId::Daily);
        assert!(!s.is_locked());
        assert!(s.is_door_open());
        assert!(!s.is_safety_armed());
    }

    #[test]
    fn test_lock_needs_safety_armed() {
        let mut m = ControlStateMachine::new();
        let before = *m.state();
        let updates = press(&mut m, Action::ToggleLock);
        assert!(updates.is_empty());
        assert_eq!(*m.state(), before);
    }

    #[test]
    fn test_lock_toggles_when_armed() {
        let mut m = armed();
        let updates = press(&mut m, Action::ToggleLock);
        assert!(m.state().is_locked());
        assert_eq!(&updates[..], &[UiUpdate::Lock { locked: true }]);

        press(&mut m, Action::ToggleLock);
        assert!(!m.state().is_locked());
    }

    #[test]
    fn test_lock_toggles_while_running() {
        let mut m = door_closed();
        m.handle(Event::SafetyEdge);
        press(&mut m, Action::TogglePlayPause);
        press(&mut m, Action::ToggleLock);
        assert!(m.state().is_running());
        assert!(m.state().is_locked());
    }

    #[test]
    fn test_disarming_keeps_lock() {
        let mut m = armed();
        press(&mut m, Action::ToggleLock);
        m.handle(Event::SafetyEdge);
        assert!(!m.state().is_safety_armed());
        assert!(m.state().is_locked());
        press(&mut m, Action::ToggleLock);
        assert!(m.state().is_locked());
    }

    #[test]
    fn test_selection_steps_catalog() {
        let mut m = ControlStateMachine::new();
        let updates = press(&mut m, Action::SelectNext);
        assert_eq!(m.state().selected_cycle(), CycleId::Heavy);
        assert_eq!(&updates[..], &[UiUpdate::CycleSelected(CycleId::Heavy)]);

        press(&mut m, Action::SelectPrev);
        press(&mut m, Action::SelectPrev);
        assert_eq!(m.state().selected_cycle(), CycleId::Quick);
    }

    #[test]
    fn test_selection_blocked_when_locked() {
        let mut m = armed();
        press(&mut m, Action::ToggleLock);
        assert!(press(&mut m, Action::SelectNext).is_empty());
        assert!(press(&mut m, Action::SelectPrev).is_empty());
        assert_eq!(m.state().selected_cycle(), CycleId::Daily);
    }

    #[test]
    fn test_selection_blocked_while_running() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        assert!(press(&mut m, Action::SelectNext).is_empty());
        assert!(press(&mut m, Action::SelectPrev).is_empty());
        assert_eq!(m.state().selected_cycle(), CycleId::Daily);
    }

    #[test]
    fn test_start_refused_with_door_open() {
        let mut m = ControlStateMachine::new();
        let before = *m.state();
        let updates = press(&mut m, Action::TogglePlayPause);
        assert_eq!(*m.state(), before);
        assert_eq!(&updates[..], &[UiUpdate::DoorOpenWarning]);
    }

    #[test]
    fn test_start_resets_clock_and_sets_total() {
        let mut m = door_closed();
        let updates = press(&mut m, Action::TogglePlayPause);
        let s = m.state();
        assert!(s.is_running());
        assert_eq!(s.seconds_in_minute(), 0);
        assert_eq!(s.minutes_elapsed(), 0);
        assert_eq!(s.total_duration_minutes(), 15 + 8);
        assert_eq!(&updates[..], &[UiUpdate::RunStarted { total_minutes: 23 }]);
    }

    #[test]
    fn test_pause_keeps_counters() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        for _ in 0..75 {
            m.handle(Event::Tick);
        }
        let updates = press(&mut m, Action::TogglePlayPause);
        let s = m.state();
        assert_eq!(s.machine(), MachineState::Stopped);
        assert_eq!(s.minutes_elapsed(), 1);
        assert_eq!(s.seconds_in_minute(), 15);
        assert_eq!(
            &updates[..],
            &[UiUpdate::Paused, UiUpdate::DoorIndicator { open: false }]
        );
    }

    #[test]
    fn test_restart_after_pause_resets_counters() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        for _ in 0..75 {
            m.handle(Event::Tick);
        }
        press(&mut m, Action::TogglePlayPause);
        press(&mut m, Action::TogglePlayPause);
        assert_eq!(m.state().minutes_elapsed(), 0);
        assert_eq!(m.state().seconds_in_minute(), 0);
    }

    #[test]
    fn test_tick_ignored_when_stopped() {
        let mut m = door_closed();
        let before = *m.state();
        assert!(m.handle(Event::Tick).is_empty());
        assert_eq!(*m.state(), before);
    }

    #[test]
    fn test_tick_reports_clock() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        let updates = m.handle(Event::Tick);
        assert_eq!(
            &updates[..],
            &[UiUpdate::Clock {
                minutes: 0,
                seconds: 1
            }]
        );
    }

    #[test]
    fn test_run_completes_exactly_once() {
        let mut m = door_closed();
        press(&mut m, Action::SelectPrev); // Quick: 5 + 5 minutes
        press(&mut m, Action::TogglePlayPause);
        let total = m.state().total_duration_minutes();
        assert_eq!(total, 10);

        let mut completions = 0;
        for _ in 0..total as u32 * 60 {
            let updates = m.handle(Event::Tick);
            if updates.contains(&UiUpdate::CycleComplete) {
                completions += 1;
            }
        }

        let s = m.state();
        assert_eq!(completions, 1);
        assert_eq!(s.machine(), MachineState::Stopped);
        assert_eq!(s.minutes_elapsed(), total);
        assert_eq!(s.seconds_in_minute(), 0);
    }

    #[test]
    fn test_completion_redraws_lock_without_changing_it() {
        let mut m = door_closed();
        m.handle(Event::SafetyEdge);
        press(&mut m, Action::ToggleLock);
        press(&mut m, Action::TogglePlayPause);

        let ticks = m.state().total_duration_minutes() as u32 * 60;
        let mut last = Updates::new();
        for _ in 0..ticks {
            last = m.handle(Event::Tick);
        }

        assert!(m.state().is_locked());
        assert_eq!(
            &last[..],
            &[
                UiUpdate::Clock {
                    minutes: 23,
                    seconds: 0
                },
                UiUpdate::Paused,
                UiUpdate::DoorIndicator { open: false },
                UiUpdate::ForceRedraw(Widget::Lock),
                UiUpdate::CycleComplete,
            ]
        );
    }

    #[test]
    fn test_minutes_never_exceed_total_while_running() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        while m.state().is_running() {
            assert!(m.state().minutes_elapsed() <= m.state().total_duration_minutes());
            m.handle(Event::Tick);
        }
    }

    #[test]
    fn test_door_edge_shown_when_stopped() {
        let mut m = ControlStateMachine::new();
        let updates = m.handle(Event::DoorEdge);
        assert!(!m.state().is_door_open());
        assert_eq!(&updates[..], &[UiUpdate::DoorIndicator { open: false }]);
    }

    #[test]
    fn test_door_edge_inert_while_running() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        let updates = m.handle(Event::DoorEdge);
        assert!(updates.is_empty());
        // Recorded, but the run carries on
        assert!(m.state().is_door_open());
        assert!(m.state().is_running());
        assert!(!m.handle(Event::Tick).is_empty());
    }

    #[test]
    fn test_pause_shows_door_opened_during_run() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        assert!(m.handle(Event::DoorEdge).is_empty());

        let updates = press(&mut m, Action::TogglePlayPause);
        assert_eq!(
            &updates[..],
            &[UiUpdate::Paused, UiUpdate::DoorIndicator { open: true }]
        );
        assert_eq!(updates.iter().find_map(UiUpdate::door_led), Some(true));
    }

    #[test]
    fn test_completion_shows_door_opened_during_run() {
        let mut m = door_closed();
        press(&mut m, Action::SelectPrev);
        press(&mut m, Action::TogglePlayPause);
        m.handle(Event::DoorEdge);

        let mut last = Updates::new();
        while m.state().is_running() {
            last = m.handle(Event::Tick);
        }
        assert!(last.contains(&UiUpdate::DoorIndicator { open: true }));
        assert!(last.contains(&UiUpdate::CycleComplete));
    }

    #[test]
    fn test_run_never_drives_door_led() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        for event in [Event::DoorEdge, Event::Tick, Event::DoorEdge, Event::DoorEdge] {
            let updates = m.handle(event);
            assert!(updates.iter().all(|u| u.door_led().is_none()));
        }
    }

    #[test]
    fn test_pause_allowed_with_door_open() {
        let mut m = door_closed();
        press(&mut m, Action::TogglePlayPause);
        m.handle(Event::DoorEdge);
        press(&mut m, Action::TogglePlayPause);
        assert_eq!(m.state().machine(), MachineState::Stopped);
    }

    #[test]
    fn test_safety_edge_toggles_in_any_state() {
        let mut m = door_closed();
        m.handle(Event::SafetyEdge);
        assert!(m.state().is_safety_armed());
        press(&mut m, Action::TogglePlayPause);
        m.handle(Event::SafetyEdge);
        assert!(!m.state().is_safety_armed());
    }
}
