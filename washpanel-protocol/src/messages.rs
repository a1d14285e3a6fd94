//! Link messages
//!
//! - Panel → controller: [`PanelReport`] (touch samples, heartbeat)
//! - Controller → panel: [`PanelCommand`] (drawing requests, heartbeat reply)

use heapless::{String, Vec};

use crate::frame::{Frame, FrameError, MAX_PAYLOAD};
use crate::graphics::{Color, Font, Image, Widget};
use crate::touch::RawTouch;

// Panel → controller
pub const MSG_TOUCH: u8 = 0x01;
pub const MSG_PING: u8 = 0x02;

// Controller → panel
pub const MSG_CLEAR: u8 = 0x20;
pub const MSG_FILL_RECT: u8 = 0x21;
pub const MSG_DRAW_IMAGE: u8 = 0x22;
pub const MSG_DRAW_TEXT: u8 = 0x23;
pub const MSG_REDRAW: u8 = 0x24;
pub const MSG_PONG: u8 = 0x25;

/// Longest text a single draw request carries
pub const MAX_TEXT: usize = 32;

/// Reports sent by the panel module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelReport {
    /// One raw touch sample
    Touch(RawTouch),
    /// Heartbeat request
    Ping,
}

impl PanelReport {
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_TOUCH => RawTouch::from_bytes(&frame.payload)
                .map(PanelReport::Touch)
                .ok_or(FrameError::Malformed),
            MSG_PING => Ok(PanelReport::Ping),
            _ => Err(FrameError::Malformed),
        }
    }

    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            PanelReport::Touch(touch) => Frame::new(MSG_TOUCH, &touch.to_bytes()),
            PanelReport::Ping => Ok(Frame::bare(MSG_PING)),
        }
    }
}

/// Drawing requests sent to the panel module
///
/// Coordinates are panel pixels with the origin in the top-left corner of
/// the portrait screen.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelCommand {
    /// Fill the whole screen with white
    Clear,
    FillRect {
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    },
    DrawImage {
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        image: Image,
    },
    DrawText {
        font: Font,
        x: u16,
        y: u16,
        spacing: u8,
        text: String<MAX_TEXT>,
    },
    /// Repaint a widget from the panel's own framebuffer
    Redraw(Widget),
    /// Heartbeat reply
    Pong,
}

fn push_u16(buf: &mut Vec<u8, MAX_PAYLOAD>, value: u16) -> Result<(), FrameError> {
    buf.extend_from_slice(&value.to_le_bytes())
        .map_err(|_| FrameError::PayloadTooLarge)
}

fn read_u16(bytes: &[u8], at: usize) -> Result<u16, FrameError> {
    match bytes.get(at..at + 2) {
        Some(&[lo, hi]) => Ok(u16::from_le_bytes([lo, hi])),
        _ => Err(FrameError::Malformed),
    }
}

impl PanelCommand {
    /// Encode into a link frame
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        let mut payload: Vec<u8, MAX_PAYLOAD> = Vec::new();
        let kind = match self {
            PanelCommand::Clear => MSG_CLEAR,
            PanelCommand::FillRect { x, y, w, h, color } => {
                for v in [*x, *y, *w, *h] {
                    push_u16(&mut payload, v)?;
                }
                payload
                    .push(color.to_byte())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                MSG_FILL_RECT
            }
            PanelCommand::DrawImage { x, y, w, h, image } => {
                for v in [*x, *y, *w, *h] {
                    push_u16(&mut payload, v)?;
                }
                payload
                    .push(image.to_byte())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                MSG_DRAW_IMAGE
            }
            PanelCommand::DrawText {
                font,
                x,
                y,
                spacing,
                text,
            } => {
                // [font][x:2][y:2][spacing][text...]
                payload
                    .push(font.to_byte())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                push_u16(&mut payload, *x)?;
                push_u16(&mut payload, *y)?;
                payload
                    .push(*spacing)
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                payload
                    .extend_from_slice(text.as_bytes())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                MSG_DRAW_TEXT
            }
            PanelCommand::Redraw(widget) => {
                payload
                    .push(widget.to_byte())
                    .map_err(|_| FrameError::PayloadTooLarge)?;
                MSG_REDRAW
            }
            PanelCommand::Pong => MSG_PONG,
        };
        Frame::new(kind, &payload)
    }

    /// Decode a frame (used by the panel side and by tests)
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        let p = &frame.payload;
        match frame.kind {
            MSG_CLEAR => Ok(PanelCommand::Clear),
            MSG_FILL_RECT if p.len() == 9 => Ok(PanelCommand::FillRect {
                x: read_u16(p, 0)?,
                y: read_u16(p, 2)?,
                w: read_u16(p, 4)?,
                h: read_u16(p, 6)?,
                color: Color::from_byte(p[8]).ok_or(FrameError::Malformed)?,
            }),
            MSG_DRAW_IMAGE if p.len() == 9 => Ok(PanelCommand::DrawImage {
                x: read_u16(p, 0)?,
                y: read_u16(p, 2)?,
                w: read_u16(p, 4)?,
                h: read_u16(p, 6)?,
                image: Image::from_byte(p[8]).ok_or(FrameError::Malformed)?,
            }),
            MSG_DRAW_TEXT if p.len() >= 6 => {
                let text = core::str::from_utf8(&p[6..]).map_err(|_| FrameError::Malformed)?;
                Ok(PanelCommand::DrawText {
                    font: Font::from_byte(p[0]).ok_or(FrameError::Malformed)?,
                    x: read_u16(p, 1)?,
                    y: read_u16(p, 3)?,
                    spacing: p[5],
                    text: String::try_from(text).map_err(|_| FrameError::PayloadTooLarge)?,
                })
            }
            MSG_REDRAW if p.len() == 1 => Widget::from_byte(p[0])
                .map(PanelCommand::Redraw)
                .ok_or(FrameError::Malformed),
            MSG_PONG => Ok(PanelCommand::Pong),
            _ => Err(FrameError::Malformed),
        }
    }
}
