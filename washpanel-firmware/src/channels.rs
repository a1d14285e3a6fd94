//! Inter-task communication channels
//!
//! Every state change goes through [`EVENT_QUEUE`], which only the
//! controller task drains. Producers never block on it: when it is full a
//! sensor edge is parked in [`EDGE_BACKLOG`], anything else is dropped and
//! counted.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU32, Ordering};

use washpanel_core::diag::TouchLog;
use washpanel_core::safety::EdgeBacklog;
use washpanel_core::state::Event;
use washpanel_protocol::{Frame, PanelCommand};

/// Pending state machine events
const EVENT_QUEUE_SIZE: usize = 16;

/// Touch reports waiting for the touch task
const TOUCH_QUEUE_SIZE: usize = 8;

/// Drawing requests waiting for the panel link; a full redraw fits
const PANEL_QUEUE_SIZE: usize = 32;

/// Diagnostic flushes waiting for the serial monitor
const DIAG_QUEUE_SIZE: usize = 2;

/// Events for the control state machine
pub static EVENT_QUEUE: Channel<CriticalSectionRawMutex, Event, EVENT_QUEUE_SIZE> =
    Channel::new();

/// Raw touch frames from the panel, decoded by the touch task
pub static TOUCH_FRAMES: Channel<CriticalSectionRawMutex, Frame, TOUCH_QUEUE_SIZE> =
    Channel::new();

/// Signal that touch frames are waiting
pub static TOUCH_READY: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Commands for the panel module
pub static PANEL_TX: Channel<CriticalSectionRawMutex, PanelCommand, PANEL_QUEUE_SIZE> =
    Channel::new();

/// Touch log text for the serial monitor
pub static DIAG_LOG: Channel<CriticalSectionRawMutex, TouchLog, DIAG_QUEUE_SIZE> =
    Channel::new();

/// Sensor edges that found the event queue full
pub static EDGE_BACKLOG: EdgeBacklog = EdgeBacklog::new();

/// Signal that edges were parked in [`EDGE_BACKLOG`]
pub static EDGES_PARKED: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Events dropped because the queue was full
pub static DROPPED_EVENTS: AtomicU32 = AtomicU32::new(0);

/// Post an event without waiting
///
/// Returns false if the queue was full and the event was dropped.
pub fn post_event(event: Event) -> bool {
    if EVENT_QUEUE.try_send(event).is_ok() {
        return true;
    }
    if EDGE_BACKLOG.park(event) {
        debug!("Event queue full, parked {:?}", event);
        EDGES_PARKED.signal(());
        return true;
    }
    let dropped = DROPPED_EVENTS.fetch_add(1, Ordering::Relaxed) + 1;
    warn!("Event queue full, dropping {:?} ({} dropped)", event, dropped);
    false
}
