//! Panel UART receive task
//!
//! Receives frames from the panel module and routes them.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use washpanel_protocol::messages::{MSG_PING, MSG_TOUCH};
use washpanel_protocol::{Frame, FrameParser, PanelCommand};

use crate::channels::{PANEL_TX, TOUCH_FRAMES, TOUCH_READY};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Panel RX task - receives and parses frames from the panel module
#[embassy_executor::task]
pub async fn panel_rx_task(mut rx: BufferedUartRx) {
    info!("Panel RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match parser.push(byte) {
                        Ok(Some(frame)) => route_frame(frame),
                        Ok(None) => {}
                        Err(e) => warn!("Frame parse error: {:?}", e),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Hand a complete frame to whoever consumes it
fn route_frame(frame: Frame) {
    match frame.kind {
        MSG_TOUCH => {
            // Decoded by the touch task so bad reports count as failed reads
            if TOUCH_FRAMES.try_send(frame).is_err() {
                warn!("Touch queue full, dropping sample");
            }
            TOUCH_READY.signal(());
        }
        MSG_PING => {
            trace!("PING received");
            if PANEL_TX.try_send(PanelCommand::Pong).is_err() {
                warn!("Panel TX queue full, PONG skipped");
            }
        }
        kind => debug!("Ignoring frame type 0x{:02x}", kind),
    }
}
