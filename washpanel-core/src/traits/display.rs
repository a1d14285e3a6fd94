//! Display surface trait for the panel module

use washpanel_protocol::{Color, Font, Image, Widget};

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Outgoing command queue is full
    BufferOverflow,
    /// Panel stopped answering heartbeats
    LinkLost,
    /// Text does not fit in one command
    TextTooLong,
}

/// Drawing primitives offered by the panel
///
/// The panel module owns the pixels; everything here is a request that
/// the implementation forwards. Coordinates are panel pixels with the
/// origin top-left.
pub trait DisplaySurface {
    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color)
        -> Result<(), DisplayError>;

    /// Draw a stored image of size `w`x`h` with its top-left corner at `(x, y)`
    fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        image: Image,
    ) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at `(x, y)`
    ///
    /// `spacing` is extra pixels between glyphs.
    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        x: u16,
        y: u16,
        spacing: u8,
    ) -> Result<(), DisplayError>;

    /// Repaint a widget from the panel's own copy
    fn force_redraw(&mut self, widget: Widget) -> Result<(), DisplayError>;
}
