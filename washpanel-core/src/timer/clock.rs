//! Elapsed run time
//!
//! Seconds roll into minutes; the run ends on the tick where the minute
//! count reaches the program total.

/// Outcome of advancing the clock by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStatus {
    /// Still counting
    Counting,
    /// Elapsed minutes reached the total
    Finished,
}

/// Minutes/seconds accounting for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunClock {
    seconds_in_minute: u8,
    minutes_elapsed: u16,
    total_minutes: u16,
}

impl RunClock {
    pub const fn new() -> Self {
        Self {
            seconds_in_minute: 0,
            minutes_elapsed: 0,
            total_minutes: 0,
        }
    }

    /// Zero the counters and set the run length
    pub fn start(&mut self, total_minutes: u16) {
        self.seconds_in_minute = 0;
        self.minutes_elapsed = 0;
        self.total_minutes = total_minutes;
    }

    /// Count one second
    pub fn advance(&mut self) -> ClockStatus {
        self.seconds_in_minute += 1;
        if self.seconds_in_minute == 60 {
            self.seconds_in_minute = 0;
            self.minutes_elapsed = self.minutes_elapsed.saturating_add(1);
        }

        if self.minutes_elapsed >= self.total_minutes {
            ClockStatus::Finished
        } else {
            ClockStatus::Counting
        }
    }

    pub fn seconds_in_minute(&self) -> u8 {
        self.seconds_in_minute
    }

    pub fn minutes_elapsed(&self) -> u16 {
        self.minutes_elapsed
    }

    pub fn total_minutes(&self) -> u16 {
        self.total_minutes
    }
}
