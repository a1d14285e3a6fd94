//! Edge debouncing
//!
//! A mechanical contact bounces for a few milliseconds after it closes, so
//! one press shows up as a burst of rising edges. Only the first edge of a
//! burst is accepted; later edges are rejected until the window has passed
//! since the last *accepted* edge.

/// Debouncer for one rising-edge input
#[derive(Debug, Clone, Copy)]
pub struct EdgeDebouncer {
    window_ms: u32,
    last_accepted_ms: Option<u32>,
}

impl EdgeDebouncer {
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Offer an edge seen at `now_ms`; true if it counts
    ///
    /// Uses wrapping arithmetic so a monotonic millisecond counter may roll
    /// over.
    pub fn accept(&mut self, now_ms: u32) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms.wrapping_sub(last) < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}
