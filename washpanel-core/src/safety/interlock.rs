//! Door and safety-button interlock
//!
//! Two independent contacts, each on its own debouncer. An accepted edge
//! becomes an [`Event`] for the state machine, which owns the flags.

use super::debounce::EdgeDebouncer;
use crate::config::TimingConfig;
use crate::state::Event;

/// Sensor inputs handled by the interlock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    /// Door contact
    Door,
    /// Safety arming button
    SafetyButton,
}

/// Debounced edge filter for both sensors
#[derive(Debug, Clone, Copy)]
pub struct SafetyInterlock {
    door: EdgeDebouncer,
    safety: EdgeDebouncer,
}

impl Default for SafetyInterlock {
    fn default() -> Self {
        Self::new(&TimingConfig::DEFAULT)
    }
}

impl SafetyInterlock {
    pub const fn new(timing: &TimingConfig) -> Self {
        Self {
            door: EdgeDebouncer::new(timing.debounce_ms),
            safety: EdgeDebouncer::new(timing.debounce_ms),
        }
    }

    /// Filter a rising edge seen at `now_ms`
    pub fn on_edge(&mut self, sensor: Sensor, now_ms: u32) -> Option<Event> {
        match sensor {
            Sensor::Door => self.door.accept(now_ms).then_some(Event::DoorEdge),
            Sensor::SafetyButton => self.safety.accept(now_ms).then_some(Event::SafetyEdge),
        }
    }
}
