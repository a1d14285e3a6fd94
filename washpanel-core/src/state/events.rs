//! Inputs to the state machine and the display requests it produces

use washpanel_protocol::Widget;

use crate::catalog::CycleId;

/// Actions a panel button can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    ToggleLock,
    SelectNext,
    SelectPrev,
    TogglePlayPause,
}

/// Everything that can change the control state
///
/// All sources post these into one queue, so transitions never interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// One second of run time
    Tick,
    /// Debounced rising edge on the door contact
    DoorEdge,
    /// Debounced rising edge on the safety button
    SafetyEdge,
    /// A panel button was pressed
    Touch(Action),
}

/// Display updates requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiUpdate {
    /// Lock indicator changed
    Lock { locked: bool },
    /// A different program was selected
    CycleSelected(CycleId),
    /// Start refused because the door is open
    DoorOpenWarning,
    /// Door contact changed while stopped
    DoorIndicator { open: bool },
    /// A run started
    RunStarted { total_minutes: u16 },
    /// The run was paused
    Paused,
    /// Elapsed time changed
    Clock { minutes: u16, seconds: u8 },
    /// The program ran to the end
    CycleComplete,
    /// Repaint a widget without changing what it shows
    ForceRedraw(Widget),
}

impl UiUpdate {
    /// Door LED level this update calls for
    ///
    /// Only updates that show the door state drive the LED, so a door edge
    /// recorded during a run stays dark until the machine stops.
    pub fn door_led(&self) -> Option<bool> {
        match *self {
            UiUpdate::DoorIndicator { open } => Some(open),
            UiUpdate::DoorOpenWarning => Some(true),
            _ => None,
        }
    }
}
