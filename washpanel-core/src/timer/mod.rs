//! Run timing
//!
//! - [`TimerService`]: one-second ticks from a monotonic clock
//! - [`RunClock`]: elapsed minutes/seconds of the current run

pub mod clock;
pub mod tick;

pub use clock::{ClockStatus, RunClock};
pub use tick::TimerService;
