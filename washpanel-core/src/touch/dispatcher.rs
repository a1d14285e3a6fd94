//! Touch dispatch
//!
//! Turns raw samples into at most one UI action each, and drains the touch
//! source in small batches so one poll stays short.

use heapless::Vec;

use super::source::{TouchSample, TouchSource};
use super::zones::{remap, PanelPoint, Zone};
use crate::config::{MAX_TOUCH_BATCH, RECOGNIZED_TOUCH_STATUS};
use crate::diag::TouchLog;
use crate::state::Action;

/// Result of draining the touch source once
#[derive(Debug, Clone, Default)]
pub struct TouchBatch {
    /// Actions in the order their samples were read
    pub actions: Vec<Action, MAX_TOUCH_BATCH>,
    /// One diagnostic line per sample read
    pub log: TouchLog,
    /// Reads that failed and were discarded
    pub failures: u8,
}

impl TouchBatch {
    /// Samples successfully read
    pub fn samples(&self) -> usize {
        self.log.entries()
    }
}

/// Maps touch samples to actions
#[derive(Debug, Clone, Copy)]
pub struct TouchDispatcher {
    recognized_status: u8,
}

impl Default for TouchDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchDispatcher {
    pub const fn new() -> Self {
        Self {
            recognized_status: RECOGNIZED_TOUCH_STATUS,
        }
    }

    /// Action for a sample already mapped to the panel
    pub fn classify(&self, sample: &TouchSample, point: PanelPoint) -> Option<Action> {
        if sample.status != self.recognized_status {
            return None;
        }
        Zone::at(point).map(Zone::action)
    }

    /// Map a raw sample and hit-test it
    pub fn dispatch(&self, sample: &TouchSample) -> Option<Action> {
        self.classify(sample, remap(sample.x, sample.y))
    }

    /// Drain the source
    ///
    /// Reads one sample, then keeps reading while the source reports more
    /// and fewer than [`MAX_TOUCH_BATCH`] samples were read. Failed reads are
    /// dropped without counting toward the limit. Call only when
    /// `source.pending()` is true.
    pub fn poll<S: TouchSource>(&self, source: &mut S) -> TouchBatch {
        let mut batch = TouchBatch::default();

        loop {
            match source.read() {
                Ok(sample) => {
                    let point = remap(sample.x, sample.y);
                    batch.log.push(&sample, point);
                    if let Some(action) = self.classify(&sample, point) {
                        // Bounded by the batch limit below
                        let _ = batch.actions.push(action);
                    }
                }
                Err(_) => batch.failures = batch.failures.saturating_add(1),
            }

            if !source.pending() || batch.samples() >= MAX_TOUCH_BATCH {
                break;
            }
        }

        batch
    }
}
