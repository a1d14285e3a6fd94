//! Touch task
//!
//! Drains queued touch reports in small batches, posts the resulting
//! actions and hands the diagnostic lines to the serial monitor.

use defmt::*;

use washpanel_core::state::Event;
use washpanel_core::touch::{TouchDispatcher, TouchSource};

use crate::channels::{post_event, DIAG_LOG, TOUCH_READY};
use crate::panel::LinkTouchSource;

/// Touch task
#[embassy_executor::task]
pub async fn touch_task() {
    info!("Touch task started");

    let dispatcher = TouchDispatcher::new();
    let mut source = LinkTouchSource::new();

    loop {
        TOUCH_READY.wait().await;
        if !source.pending() {
            continue;
        }

        let batch = dispatcher.poll(&mut source);
        if batch.failures > 0 {
            warn!("{} touch reads failed", batch.failures);
        }

        for action in batch.actions {
            debug!("Touch action: {:?}", action);
            post_event(Event::Touch(action));
        }

        if !batch.log.is_empty() && DIAG_LOG.try_send(batch.log).is_err() {
            trace!("Diag log busy, dropping touch lines");
        }

        // Leftover samples wait for the next pass
        if source.pending() {
            TOUCH_READY.signal(());
        }
    }
}
