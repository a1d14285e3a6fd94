//! Panel module link
//!
//! The panel module is a dumb terminal: it owns the LCD, the stored images
//! and fonts, and the touch controller. Everything it shows is requested
//! from here, and every touch it sees is forwarded raw.
//!
//! - Panel → controller: touch samples, heartbeat PINGs
//! - Controller → panel: drawing commands, PONGs

pub mod surface;
pub mod touch;

pub use surface::LinkSurface;
pub use touch::LinkTouchSource;
