//! Panel UART transmit task
//!
//! Sends queued drawing commands and heartbeat responses to the panel.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use washpanel_protocol::frame::MAX_FRAME_LEN;
use washpanel_protocol::PanelCommand;

use crate::channels::PANEL_TX;

/// Panel TX task - sends frames to the panel module
#[embassy_executor::task]
pub async fn panel_tx_task(mut tx: BufferedUartTx) {
    info!("Panel TX task started");

    let mut buf = [0u8; MAX_FRAME_LEN];

    loop {
        let cmd = PANEL_TX.receive().await;
        send_command(&mut tx, &cmd, &mut buf).await;
    }
}

async fn send_command(tx: &mut BufferedUartTx, cmd: &PanelCommand, buf: &mut [u8]) {
    let frame = match cmd.to_frame() {
        Ok(frame) => frame,
        Err(e) => {
            warn!("Cannot encode {:?}: {:?}", cmd, e);
            return;
        }
    };

    match frame.encode(buf) {
        Ok(len) => {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("Failed to send frame: {:?}", e);
            } else {
                trace!("Sent frame type 0x{:02x}", frame.kind);
            }
        }
        Err(e) => warn!("Frame encode failed: {:?}", e),
    }
}
