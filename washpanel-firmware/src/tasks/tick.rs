//! Tick task for run timing
//!
//! Wakes on a short poll interval and posts one [`Event::Tick`] per whole
//! second of monotonic time, catching up after a late wake-up.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use washpanel_core::config::TimingConfig;
use washpanel_core::state::Event;
use washpanel_core::timer::TimerService;

use crate::channels::post_event;

/// Tick task - posts one-second ticks to the event queue
#[embassy_executor::task]
pub async fn tick_task(timing: TimingConfig) {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(timing.tick_poll_ms as u64));
    let start = Instant::now();
    let mut timer = TimerService::new(timing.tick_period_ms, 0);

    loop {
        ticker.next().await;

        // Elapsed time since start in milliseconds
        let now_ms = start.elapsed().as_millis() as u32;

        let due = timer.poll(now_ms);
        if due > 1 {
            debug!("Tick task late, {} ticks due", due);
        }
        for _ in 0..due {
            post_event(Event::Tick);
        }
    }
}
