//! Diagnostic touch log
//!
//! Each touch sample read from the panel becomes one ASCII line for the
//! serial monitor. Lines are collected per poll and flushed together.
//! Nothing in the control path reads this output.

use core::fmt::Write;

use heapless::String;

use crate::config::MAX_TOUCH_BATCH;
use crate::touch::{PanelPoint, TouchSample};

/// Longest single line
pub const LINE_CAPACITY: usize = 70;

/// Longest flush
pub const LOG_CAPACITY: usize = LINE_CAPACITY * MAX_TOUCH_BATCH;

/// One formatted touch line
pub type LogLine = String<LINE_CAPACITY>;

/// Format a sample and its panel position
pub fn format_line(sample: &TouchSample, point: PanelPoint) -> LogLine {
    let mut line = LogLine::new();
    // Every field is bounded, so the line always fits
    let _ = write!(
        line,
        "Nr: {}, X:{:4}, Y:{:4}, Status:0x{:2x} conv X:{:3} Y:{:3}\n\r",
        sample.contact_id, sample.x, sample.y, sample.status, point.x, point.y
    );
    line
}

/// Lines gathered during one poll
#[derive(Debug, Clone, Default)]
pub struct TouchLog {
    text: String<LOG_CAPACITY>,
    entries: u8,
}

impl TouchLog {
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            entries: 0,
        }
    }

    /// Append a line; returns false once the log is full
    pub fn push(&mut self, sample: &TouchSample, point: PanelPoint) -> bool {
        if self.entries as usize >= MAX_TOUCH_BATCH {
            return false;
        }
        let line = format_line(sample, point);
        if self.text.push_str(&line).is_err() {
            return false;
        }
        self.entries += 1;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn entries(&self) -> usize {
        self.entries as usize
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}
