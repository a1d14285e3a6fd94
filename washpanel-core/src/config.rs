//! Build-time configuration
//!
//! The panel has no configuration file; every tunable is a constant here
//! so the firmware and the host tests agree on the same values.

/// Panel width in pixels (portrait)
pub const PANEL_WIDTH: u32 = 320;

/// Panel height in pixels (portrait)
pub const PANEL_HEIGHT: u32 = 480;

/// Touch status byte that is dispatched to the UI
///
/// Every other status value from the touch controller is ignored.
pub const RECOGNIZED_TOUCH_STATUS: u8 = 0x20;

/// Most touch samples handled in one poll
pub const MAX_TOUCH_BATCH: usize = 3;

/// Timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Minimum spacing between accepted sensor edges (ms)
    pub debounce_ms: u32,
    /// Run clock period (ms)
    pub tick_period_ms: u32,
    /// How often the tick task samples the monotonic clock (ms)
    pub tick_poll_ms: u32,
}

impl TimingConfig {
    pub const DEFAULT: Self = Self {
        // 10 Hz input filter cut-off
        debounce_ms: 100,
        tick_period_ms: 1000,
        tick_poll_ms: 100,
    };
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
