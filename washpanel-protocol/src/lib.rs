//! Panel Link Protocol
//!
//! UART protocol between the wash controller (RP2040) and the touch panel
//! module. The panel module owns the LCD, the image and font data and the
//! touch controller; the controller owns every decision about what to show.
//!
//! # Frame Layout
//!
//! ```text
//! ┌───────┬─────┬──────┬─────────────┬─────┐
//! │ START │ LEN │ TYPE │ PAYLOAD     │ CRC │
//! │ 0x7E  │ 1B  │ 1B   │ 0–64B       │ 1B  │
//! └───────┴─────┴──────┴─────────────┴─────┘
//! ```
//!
//! Panel → controller traffic is raw touch samples and heartbeats.
//! Controller → panel traffic is drawing requests.

#![no_std]
#![deny(unsafe_code)]

pub mod frame;
pub mod graphics;
pub mod messages;
pub mod touch;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD};
pub use graphics::{Color, Font, Image, Widget};
pub use messages::{PanelCommand, PanelReport, MAX_TEXT};
pub use touch::{RawTouch, RAW_TOUCH_LEN, TOUCH_AXIS_SPAN};
