//! Touch samples from the panel link

use defmt::*;
use washpanel_core::touch::{ReadFailure, TouchSample, TouchSource};
use washpanel_protocol::PanelReport;

use crate::channels::TOUCH_FRAMES;

/// [`TouchSource`] over the queued touch frames
///
/// Frames are decoded on read, so a damaged report shows up as a failed
/// read rather than vanishing in the RX task.
pub struct LinkTouchSource;

impl LinkTouchSource {
    pub const fn new() -> Self {
        Self
    }
}

impl TouchSource for LinkTouchSource {
    fn pending(&self) -> bool {
        !TOUCH_FRAMES.is_empty()
    }

    fn read(&mut self) -> Result<TouchSample, ReadFailure> {
        let frame = TOUCH_FRAMES.try_receive().map_err(|_| ReadFailure::Empty)?;
        match PanelReport::from_frame(&frame) {
            Ok(PanelReport::Touch(sample)) => Ok(sample),
            Ok(other) => {
                warn!("Unexpected report in touch queue: {:?}", other);
                Err(ReadFailure::Corrupt)
            }
            Err(e) => {
                debug!("Bad touch report: {:?}", e);
                Err(ReadFailure::Corrupt)
            }
        }
    }
}
