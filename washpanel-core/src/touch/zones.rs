//! Touch-to-screen mapping and button hit testing
//!
//! The touch sensor is mounted rotated relative to the LCD: sensor Y runs
//! right-to-left across the panel width, sensor X runs top-to-bottom along
//! the panel height.

use washpanel_protocol::TOUCH_AXIS_SPAN;

use crate::config::{PANEL_HEIGHT, PANEL_WIDTH};
use crate::state::Action;
use crate::ui::layout::{Rect, LOCK_BUTTON, NEXT_BUTTON, PLAY_BUTTON, PREV_BUTTON};

/// A point in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelPoint {
    pub x: u32,
    pub y: u32,
}

/// Map raw sensor axes onto the panel
pub fn remap(x_raw: u16, y_raw: u16) -> PanelPoint {
    let (x_raw, y_raw) = (x_raw as u32, y_raw as u32);
    PanelPoint {
        x: PANEL_WIDTH.saturating_sub(PANEL_WIDTH * y_raw / TOUCH_AXIS_SPAN),
        y: PANEL_HEIGHT * x_raw / TOUCH_AXIS_SPAN,
    }
}

/// Touchable buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    Lock,
    Next,
    Prev,
    PlayPause,
}

const ZONES: [(Zone, Rect); 4] = [
    (Zone::Lock, LOCK_BUTTON),
    (Zone::Next, NEXT_BUTTON),
    (Zone::Prev, PREV_BUTTON),
    (Zone::PlayPause, PLAY_BUTTON),
];

impl Zone {
    /// Button under a panel point, if any
    pub fn at(point: PanelPoint) -> Option<Zone> {
        ZONES
            .iter()
            .find(|(_, rect)| rect.contains(point.x, point.y))
            .map(|(zone, _)| *zone)
    }

    /// What pressing the button asks for
    pub fn action(self) -> Action {
        match self {
            Zone::Lock => Action::ToggleLock,
            Zone::Next => Action::SelectNext,
            Zone::Prev => Action::SelectPrev,
            Zone::PlayPause => Action::TogglePlayPause,
        }
    }
}
