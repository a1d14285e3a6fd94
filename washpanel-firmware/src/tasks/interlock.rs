//! Door and safety-button edge task
//!
//! Waits for a rising edge on either contact, debounces it and posts the
//! matching event.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use washpanel_core::config::TimingConfig;
use washpanel_core::safety::{SafetyInterlock, Sensor};

use crate::channels::post_event;

/// Interlock task
#[embassy_executor::task]
pub async fn interlock_task(
    mut door: Input<'static>,
    mut safety: Input<'static>,
    timing: TimingConfig,
) {
    info!("Interlock task started, debounce {} ms", timing.debounce_ms);

    let mut interlock = SafetyInterlock::new(&timing);

    loop {
        let sensor = match select(door.wait_for_rising_edge(), safety.wait_for_rising_edge()).await
        {
            Either::First(()) => Sensor::Door,
            Either::Second(()) => Sensor::SafetyButton,
        };

        let now_ms = Instant::now().as_millis() as u32;
        match interlock.on_edge(sensor, now_ms) {
            Some(event) => {
                debug!("{:?} edge accepted", sensor);
                post_event(event);
            }
            None => trace!("{:?} edge rejected (bounce)", sensor),
        }
    }
}
