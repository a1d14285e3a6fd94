//! Raw touch samples forwarded by the panel module
//!
//! The panel's touch controller reports each contact with 12-bit axis
//! values in its own orientation. The panel passes them through untouched;
//! mapping to screen coordinates happens on the controller.

/// Encoded size of a [`RawTouch`]
pub const RAW_TOUCH_LEN: usize = 6;

/// Full scale of a raw touch axis
pub const TOUCH_AXIS_SPAN: u32 = 4096;

/// One touch report as read from the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTouch {
    /// Contact slot reported by the touch controller
    pub contact_id: u8,
    /// Raw X axis, 0..=4095
    pub x: u16,
    /// Raw Y axis, 0..=4095
    pub y: u16,
    /// Controller status byte, passed through opaque
    pub status: u8,
}

impl RawTouch {
    /// Wire layout: `[id, x_lo, x_hi, y_lo, y_hi, status]`
    pub fn to_bytes(&self) -> [u8; RAW_TOUCH_LEN] {
        let [x_lo, x_hi] = self.x.to_le_bytes();
        let [y_lo, y_hi] = self.y.to_le_bytes();
        [self.contact_id, x_lo, x_hi, y_lo, y_hi, self.status]
    }

    /// Parse a sample; anything but exactly six bytes is rejected
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match *bytes {
            [contact_id, x_lo, x_hi, y_lo, y_hi, status] => Some(Self {
                contact_id,
                x: u16::from_le_bytes([x_lo, x_hi]),
                y: u16::from_le_bytes([y_lo, y_hi]),
                status,
            }),
            _ => None,
        }
    }
}
