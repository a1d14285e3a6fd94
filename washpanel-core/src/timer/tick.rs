//! One-second tick generation
//!
//! The tick task wakes on a short poll interval and reads a monotonic
//! millisecond clock. [`TimerService`] turns those readings into whole tick
//! periods, so a late wake-up produces the missed ticks instead of
//! stretching the run.

/// Periodic tick source over a monotonic millisecond clock
#[derive(Debug, Clone, Copy)]
pub struct TimerService {
    period_ms: u32,
    next_due_ms: u32,
    issued: u32,
}

impl TimerService {
    /// Start counting periods from `now_ms`
    pub const fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            next_due_ms: now_ms.wrapping_add(period_ms),
            issued: 0,
        }
    }

    /// Number of periods that completed since the last poll
    pub fn poll(&mut self, now_ms: u32) -> u32 {
        let mut due = 0;
        // Signed distance keeps this correct across counter rollover
        while (now_ms.wrapping_sub(self.next_due_ms) as i32) >= 0 {
            self.next_due_ms = self.next_due_ms.wrapping_add(self.period_ms);
            due += 1;
        }
        self.issued = self.issued.wrapping_add(due);
        due
    }

    /// Ticks produced since creation
    pub fn issued(&self) -> u32 {
        self.issued
    }
}
