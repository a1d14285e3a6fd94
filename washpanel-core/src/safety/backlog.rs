//! Sensor edges that missed the event queue
//!
//! Door and safety edges are toggles: losing one leaves the recorded flag
//! inverted against the contact for good. When the queue is full the
//! producer parks the edge here instead, and the consumer replays the
//! parked edges before its next queued event. Parking never blocks.

use portable_atomic::{AtomicU32, Ordering};

use crate::state::Event;

/// Per-sensor count of parked edges
#[derive(Debug, Default)]
pub struct EdgeBacklog {
    door: AtomicU32,
    safety: AtomicU32,
}

impl EdgeBacklog {
    pub const fn new() -> Self {
        Self {
            door: AtomicU32::new(0),
            safety: AtomicU32::new(0),
        }
    }

    /// Park a sensor edge
    ///
    /// Returns false for any other event, which the caller has to drop.
    pub fn park(&self, event: Event) -> bool {
        let counter = match event {
            Event::DoorEdge => &self.door,
            Event::SafetyEdge => &self.safety,
            _ => return false,
        };
        counter.fetch_add(1, Ordering::AcqRel);
        true
    }

    /// Nothing parked
    pub fn is_empty(&self) -> bool {
        self.door.load(Ordering::Acquire) == 0 && self.safety.load(Ordering::Acquire) == 0
    }

    /// Take every parked edge, door edges first
    pub fn drain(&self) -> ParkedEdges {
        ParkedEdges {
            door: self.door.swap(0, Ordering::AcqRel),
            safety: self.safety.swap(0, Ordering::AcqRel),
        }
    }
}

/// Edges taken out of an [`EdgeBacklog`], replayed as events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParkedEdges {
    door: u32,
    safety: u32,
}

impl Iterator for ParkedEdges {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.door > 0 {
            self.door -= 1;
            Some(Event::DoorEdge)
        } else if self.safety > 0 {
            self.safety -= 1;
            Some(Event::SafetyEdge)
        } else {
            None
        }
    }
}
