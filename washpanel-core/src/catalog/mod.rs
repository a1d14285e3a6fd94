//! Fixed wash-program catalog
//!
//! Five programs in a fixed circular order. The order is what the user
//! sees when stepping with next/previous, so it must not change:
//!
//! ```text
//! Quick → Daily → Heavy → Rinse → Spin → Quick …
//! ```
//!
//! A program is referenced by [`CycleId`], an index into [`CATALOG`], so a
//! selection can never dangle.

pub mod cycle;

pub use cycle::WashCycle;

use washpanel_protocol::Image;

/// Number of programs in the catalog
pub const CYCLE_COUNT: usize = 5;

/// Program selected at power-on
pub const DEFAULT_CYCLE: CycleId = CycleId::Daily;

/// Reference to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleId {
    Quick = 0,
    Daily = 1,
    Heavy = 2,
    Rinse = 3,
    Spin = 4,
}

impl CycleId {
    /// Every id in catalog order
    pub const ALL: [CycleId; CYCLE_COUNT] = [
        CycleId::Quick,
        CycleId::Daily,
        CycleId::Heavy,
        CycleId::Rinse,
        CycleId::Spin,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> CycleId {
        Self::ALL[(self.index() + 1) % CYCLE_COUNT]
    }

    pub const fn prev(self) -> CycleId {
        Self::ALL[(self.index() + CYCLE_COUNT - 1) % CYCLE_COUNT]
    }

    /// Resolve to the program definition
    pub fn cycle(self) -> &'static WashCycle {
        &CATALOG[self.index()]
    }
}

/// The programs, in cycling order
pub static CATALOG: [WashCycle; CYCLE_COUNT] = PROGRAMS;

const PROGRAMS: [WashCycle; CYCLE_COUNT] = [
    WashCycle {
        id: CycleId::Quick,
        name: "Quick",
        rinse_minutes: 5,
        rinse_count: 3,
        spin_rpm: 900,
        spin_minutes: 5,
        heavy: false,
        bubbles: true,
        icon: Image::CycleQuick,
    },
    WashCycle {
        id: CycleId::Daily,
        name: "Daily",
        rinse_minutes: 15,
        rinse_count: 2,
        spin_rpm: 1200,
        spin_minutes: 8,
        heavy: false,
        bubbles: true,
        icon: Image::CycleDaily,
    },
    WashCycle {
        id: CycleId::Heavy,
        name: "Heavy",
        rinse_minutes: 10,
        rinse_count: 3,
        spin_rpm: 1200,
        spin_minutes: 10,
        heavy: true,
        bubbles: true,
        icon: Image::CycleHeavy,
    },
    WashCycle {
        id: CycleId::Rinse,
        name: "Rinse",
        rinse_minutes: 10,
        rinse_count: 1,
        spin_rpm: 0,
        spin_minutes: 0,
        heavy: false,
        bubbles: false,
        icon: Image::CycleRinse,
    },
    WashCycle {
        id: CycleId::Spin,
        name: "Spin",
        rinse_minutes: 0,
        rinse_count: 0,
        spin_rpm: 1200,
        spin_minutes: 10,
        heavy: false,
        bubbles: false,
        icon: Image::CycleSpin,
    },
];

// Every entry sits at its own index and every program has a run time.
const _: () = {
    let mut i = 0;
    while i < CYCLE_COUNT {
        assert!(PROGRAMS[i].id as usize == i);
        assert!(PROGRAMS[i].total_minutes() > 0);
        i += 1;
    }
};

/// Step forward through the catalog
pub fn next(id: CycleId) -> CycleId {
    id.next()
}

/// Step backward through the catalog
pub fn prev(id: CycleId) -> CycleId {
    id.prev()
}
