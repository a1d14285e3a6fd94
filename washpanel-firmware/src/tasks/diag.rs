//! Serial monitor task
//!
//! Writes touch diagnostic lines to the second UART. Output only; nothing
//! reads it back.

use defmt::*;
use embassy_rp::uart::{Async, UartTx};

use crate::channels::DIAG_LOG;

/// Diagnostic output task
#[embassy_executor::task]
pub async fn diag_task(mut tx: UartTx<'static, Async>) {
    info!("Diag task started");

    loop {
        let log = DIAG_LOG.receive().await;
        if let Err(e) = tx.write(log.as_bytes()).await {
            warn!("Diag UART write failed: {:?}", e);
        }
    }
}
