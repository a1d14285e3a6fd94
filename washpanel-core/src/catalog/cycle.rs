//! Wash program definition

use washpanel_protocol::Image;

use super::CycleId;

/// One wash program
///
/// All durations are whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WashCycle {
    /// Position in the catalog
    pub id: CycleId,
    /// Name shown on the panel
    pub name: &'static str,
    /// Time spent in each rinse
    pub rinse_minutes: u16,
    /// Number of rinses
    pub rinse_count: u8,
    /// Spin speed (0 = no spin)
    pub spin_rpm: u16,
    /// Time spent spinning
    pub spin_minutes: u16,
    /// Heavy-soil mode
    pub heavy: bool,
    /// Bubble wash enabled
    pub bubbles: bool,
    /// Icon shown next to the name
    pub icon: Image,
}

impl WashCycle {
    /// Run time of the program
    ///
    /// Rinse plus spin only. The rinse count and the heavy/bubble modes do
    /// not change the displayed duration.
    pub const fn total_minutes(&self) -> u16 {
        self.rinse_minutes + self.spin_minutes
    }
}
