//! Drawing resources shared by both ends of the link
//!
//! Pixel data and glyphs live on the panel module; the controller only
//! names them. Each enum has a stable wire byte.

/// Fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    White,
    Black,
}

/// Fonts available on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 28 px monospace, used for small labels
    Mono28,
    /// 36 px proportional, used for the cycle name, clock and banners
    Sans36,
}

/// Images stored on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Image {
    Play,
    Pause,
    Next,
    Prev,
    Locked,
    Unlocked,
    DoorOpen,
    Running,
    CycleQuick,
    CycleDaily,
    CycleHeavy,
    CycleRinse,
    CycleSpin,
}

/// Screen regions the panel can redraw from its own framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Widget {
    Lock,
    PlayPause,
    Status,
}

impl Color {
    pub fn to_byte(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Color::White),
            1 => Some(Color::Black),
            _ => None,
        }
    }
}

impl Font {
    pub fn to_byte(self) -> u8 {
        match self {
            Font::Mono28 => 0,
            Font::Sans36 => 1,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Font::Mono28),
            1 => Some(Font::Sans36),
            _ => None,
        }
    }
}

const IMAGES: [Image; 13] = [
    Image::Play,
    Image::Pause,
    Image::Next,
    Image::Prev,
    Image::Locked,
    Image::Unlocked,
    Image::DoorOpen,
    Image::Running,
    Image::CycleQuick,
    Image::CycleDaily,
    Image::CycleHeavy,
    Image::CycleRinse,
    Image::CycleSpin,
];

impl Image {
    /// Width and height in pixels
    pub fn size(self) -> (u16, u16) {
        match self {
            Image::Running => (90, 90),
            _ => (64, 64),
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        IMAGES.get(byte as usize).copied()
    }
}

impl Widget {
    pub fn to_byte(self) -> u8 {
        match self {
            Widget::Lock => 0,
            Widget::PlayPause => 1,
            Widget::Status => 2,
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(Widget::Lock),
            1 => Some(Widget::PlayPause),
            2 => Some(Widget::Status),
            _ => None,
        }
    }
}
