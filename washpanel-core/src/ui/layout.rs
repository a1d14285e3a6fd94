//! Screen geometry
//!
//! Portrait 320x480 panel. Buttons are 80x80 squares given by their
//! center; hit areas include the border on all four sides.
//!
//! ```text
//!  0,0 ┌──────────────────────────┐
//!      │ [door] status / clock    │
//!      │                          │
//!      │ [cycle icon]     [lock]  │  y=240
//!      │ cycle name               │
//!      │ [prev]  [play]   [next]  │  y=440
//!      └──────────────────────────┘ 320,480
//! ```

/// Axis-aligned rectangle in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle from two corners
    pub const fn from_corners(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Square button of side `size` centered on `(cx, cy)`
    pub const fn centered(cx: u16, cy: u16, size: u16) -> Self {
        Self::new(cx - size / 2, cy - size / 2, size, size)
    }

    /// Hit test, borders included
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let (x0, y0) = (self.x as u32, self.y as u32);
        x >= x0 && x <= x0 + self.w as u32 && y >= y0 && y <= y0 + self.h as u32
    }
}

/// Whole panel
pub const SCREEN: Rect = Rect::new(0, 0, 320, 480);

/// Button side length
pub const BUTTON_SIZE: u16 = 80;

pub const LOCK_BUTTON: Rect = Rect::centered(280, 240, BUTTON_SIZE);
pub const NEXT_BUTTON: Rect = Rect::centered(280, 440, BUTTON_SIZE);
pub const PREV_BUTTON: Rect = Rect::centered(40, 440, BUTTON_SIZE);
pub const PLAY_BUTTON: Rect = Rect::centered(160, 440, BUTTON_SIZE);

/// Where each image is drawn
pub const LOCK_IMAGE_AT: (u16, u16) = (248, 208);
pub const NEXT_IMAGE_AT: (u16, u16) = (245, 410);
pub const PREV_IMAGE_AT: (u16, u16) = (13, 410);
pub const PLAY_IMAGE_AT: (u16, u16) = (128, 410);
pub const CYCLE_ICON_AT: (u16, u16) = (50, 160);
pub const DOOR_IMAGE_AT: (u16, u16) = (0, 0);
pub const RUNNING_IMAGE_AT: (u16, u16) = (0, 0);

/// Door indicator corner
pub const DOOR_AREA: Rect = Rect::new(0, 0, 64, 64);
/// Status banner cleared when a run starts
pub const STATUS_AREA: Rect = Rect::new(0, 0, 320, 90);
/// Run summary cleared on pause
pub const SUMMARY_AREA: Rect = Rect::from_corners(100, 0, 320, 92);
/// Elapsed clock
pub const CLOCK_AREA: Rect = Rect::from_corners(175, 20, 300, 52);
/// Cycle name
pub const NAME_AREA: Rect = Rect::from_corners(50, 330, 200, 370);

pub const NAME_TEXT_AT: (u16, u16) = (30, 330);
pub const CLOCK_MINUTES_AT: (u16, u16) = (175, 20);
pub const CLOCK_COLON_AT: (u16, u16) = (220, 20);
pub const CLOCK_SECONDS_AT: (u16, u16) = (245, 20);
pub const TOTAL_LABEL_AT: (u16, u16) = (100, 60);
pub const TOTAL_VALUE_AT: (u16, u16) = (215, 60);
pub const TOTAL_UNIT_AT: (u16, u16) = (260, 60);
pub const DONE_LINE1_AT: (u16, u16) = (60, 10);
pub const DONE_LINE2_AT: (u16, u16) = (60, 45);
