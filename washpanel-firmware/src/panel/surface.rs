//! Drawing over the panel link

use heapless::String;
use washpanel_core::traits::{DisplayError, DisplaySurface};
use washpanel_core::ui::layout::SCREEN;
use washpanel_protocol::{Color, Font, Image, PanelCommand, Widget};

use crate::channels::PANEL_TX;

/// [`DisplaySurface`] that queues commands for the panel TX task
///
/// Never waits: a full queue fails the call with
/// [`DisplayError::BufferOverflow`].
pub struct LinkSurface;

impl LinkSurface {
    pub const fn new() -> Self {
        Self
    }

    fn send(&mut self, cmd: PanelCommand) -> Result<(), DisplayError> {
        PANEL_TX
            .try_send(cmd)
            .map_err(|_| DisplayError::BufferOverflow)
    }
}

impl DisplaySurface for LinkSurface {
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        color: Color,
    ) -> Result<(), DisplayError> {
        let whole_screen = (x, y, w, h) == (SCREEN.x, SCREEN.y, SCREEN.w, SCREEN.h);
        if whole_screen && color == Color::White {
            return self.send(PanelCommand::Clear);
        }
        self.send(PanelCommand::FillRect { x, y, w, h, color })
    }

    fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        image: Image,
    ) -> Result<(), DisplayError> {
        self.send(PanelCommand::DrawImage { x, y, w, h, image })
    }

    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        x: u16,
        y: u16,
        spacing: u8,
    ) -> Result<(), DisplayError> {
        let text = String::try_from(text).map_err(|_| DisplayError::TextTooLong)?;
        self.send(PanelCommand::DrawText {
            font,
            x,
            y,
            spacing,
            text,
        })
    }

    fn force_redraw(&mut self, widget: Widget) -> Result<(), DisplayError> {
        self.send(PanelCommand::Redraw(widget))
    }
}
