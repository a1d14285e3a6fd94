//! Screen renderer
//!
//! Turns [`UiUpdate`]s into drawing requests on a [`DisplaySurface`].
//! Each update only touches its own region; nothing here reads back from
//! the panel.

use core::fmt::Write;

use heapless::String;
use washpanel_protocol::{Color, Font, Image};

use super::layout::*;
use crate::catalog::WashCycle;
use crate::state::{ControlState, UiUpdate};
use crate::traits::{DisplayError, DisplaySurface};

/// Room for a formatted number
type NumText = String<8>;

/// Stateless painter for the panel layout
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub const fn new() -> Self {
        Self
    }

    /// Paint the whole screen from the current state
    pub fn render_boot<D: DisplaySurface>(
        &self,
        state: &ControlState,
        surface: &mut D,
    ) -> Result<(), DisplayError> {
        clear(surface, SCREEN)?;
        self.draw_lock(state.is_locked(), surface)?;
        draw_at(surface, NEXT_IMAGE_AT, Image::Next)?;
        draw_at(surface, PREV_IMAGE_AT, Image::Prev)?;
        draw_at(surface, PLAY_IMAGE_AT, Image::Play)?;
        self.draw_cycle(state.cycle(), surface)?;
        if state.is_door_open() {
            draw_at(surface, DOOR_IMAGE_AT, Image::DoorOpen)?;
        }
        Ok(())
    }

    /// Apply one update
    pub fn render<D: DisplaySurface>(
        &self,
        update: &UiUpdate,
        surface: &mut D,
    ) -> Result<(), DisplayError> {
        match *update {
            UiUpdate::Lock { locked } => self.draw_lock(locked, surface),
            UiUpdate::CycleSelected(id) => self.draw_cycle(id.cycle(), surface),
            UiUpdate::DoorOpenWarning => {
                clear(surface, DOOR_AREA)?;
                draw_at(surface, DOOR_IMAGE_AT, Image::DoorOpen)
            }
            UiUpdate::DoorIndicator { open } => {
                clear(surface, DOOR_AREA)?;
                if open {
                    draw_at(surface, DOOR_IMAGE_AT, Image::DoorOpen)?;
                }
                Ok(())
            }
            UiUpdate::RunStarted { total_minutes } => {
                self.draw_run_banner(total_minutes, surface)
            }
            UiUpdate::Paused => {
                clear(surface, DOOR_AREA)?;
                clear(surface, SUMMARY_AREA)?;
                draw_at(surface, PLAY_IMAGE_AT, Image::Play)
            }
            UiUpdate::Clock { minutes, seconds } => self.draw_clock(minutes, seconds, surface),
            UiUpdate::CycleComplete => {
                text_at(surface, Font::Sans36, DONE_LINE1_AT, "WASH")?;
                text_at(surface, Font::Sans36, DONE_LINE2_AT, "COMPLETE!")
            }
            UiUpdate::ForceRedraw(widget) => surface.force_redraw(widget),
        }
    }

    fn draw_lock<D: DisplaySurface>(&self, locked: bool, surface: &mut D) -> Result<(), DisplayError> {
        let image = if locked { Image::Locked } else { Image::Unlocked };
        clear(surface, LOCK_BUTTON)?;
        draw_at(surface, LOCK_IMAGE_AT, image)
    }

    fn draw_cycle<D: DisplaySurface>(
        &self,
        cycle: &WashCycle,
        surface: &mut D,
    ) -> Result<(), DisplayError> {
        clear(surface, NAME_AREA)?;
        text_at(surface, Font::Sans36, NAME_TEXT_AT, cycle.name)?;
        draw_at(surface, CYCLE_ICON_AT, cycle.icon)
    }

    fn draw_run_banner<D: DisplaySurface>(
        &self,
        total_minutes: u16,
        surface: &mut D,
    ) -> Result<(), DisplayError> {
        clear(surface, STATUS_AREA)?;
        draw_at(surface, RUNNING_IMAGE_AT, Image::Running)?;
        draw_at(surface, PLAY_IMAGE_AT, Image::Pause)?;
        text_at(surface, Font::Mono28, TOTAL_LABEL_AT, "Total:")?;
        text_at(surface, Font::Mono28, TOTAL_VALUE_AT, &number(total_minutes, false)?)?;
        text_at(surface, Font::Mono28, TOTAL_UNIT_AT, "min")
    }

    fn draw_clock<D: DisplaySurface>(
        &self,
        minutes: u16,
        seconds: u8,
        surface: &mut D,
    ) -> Result<(), DisplayError> {
        clear(surface, CLOCK_AREA)?;
        text_at(surface, Font::Sans36, CLOCK_MINUTES_AT, &number(minutes, false)?)?;
        text_at(surface, Font::Sans36, CLOCK_COLON_AT, ":")?;
        text_at(surface, Font::Sans36, CLOCK_SECONDS_AT, &number(seconds.into(), true)?)
    }
}

fn clear<D: DisplaySurface>(surface: &mut D, area: Rect) -> Result<(), DisplayError> {
    surface.fill_rect(area.x, area.y, area.w, area.h, Color::White)
}

fn draw_at<D: DisplaySurface>(
    surface: &mut D,
    (x, y): (u16, u16),
    image: Image,
) -> Result<(), DisplayError> {
    let (w, h) = image.size();
    surface.draw_bitmap(x, y, w, h, image)
}

fn text_at<D: DisplaySurface>(
    surface: &mut D,
    font: Font,
    (x, y): (u16, u16),
    text: &str,
) -> Result<(), DisplayError> {
    surface.draw_text(font, text, x, y, 0)
}

fn number(value: u16, two_digits: bool) -> Result<NumText, DisplayError> {
    let mut text = NumText::new();
    let written = if two_digits {
        write!(text, "{:02}", value)
    } else {
        write!(text, "{}", value)
    };
    written.map_err(|_| DisplayError::TextTooLong)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CycleId;
    use crate::state::{Action, ControlStateMachine, Event};
    use heapless::Vec;
    use washpanel_protocol::Widget;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Fill(Rect, Color),
        Image(u16, u16, Image),
        Text(Font, u16, u16, String<16>),
        Redraw(Widget),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op, 32>,
    }

    impl Recorder {
        fn texts(&self) -> impl Iterator<Item = &str> {
            self.ops.iter().filter_map(|op| match op {
                Op::Text(_, _, _, t) => Some(t.as_str()),
                _ => None,
            })
        }

        fn images(&self) -> impl Iterator<Item = Image> + '_ {
            self.ops.iter().filter_map(|op| match op {
                Op::Image(_, _, i) => Some(*i),
                _ => None,
            })
        }
    }

    impl DisplaySurface for Recorder {
        fn fill_rect(
            &mut self,
            x: u16,
            y: u16,
            w: u16,
            h: u16,
            color: Color,
        ) -> Result<(), DisplayError> {
            self.ops
                .push(Op::Fill(Rect::new(x, y, w, h), color))
                .map_err(|_| DisplayError::BufferOverflow)
        }

        fn draw_bitmap(
            &mut self,
            x: u16,
            y: u16,
            _w: u16,
            _h: u16,
            image: Image,
        ) -> Result<(), DisplayError> {
            self.ops
                .push(Op::Image(x, y, image))
                .map_err(|_| DisplayError::BufferOverflow)
        }

        fn draw_text(
            &mut self,
            font: Font,
            text: &str,
            x: u16,
            y: u16,
            _spacing: u8,
        ) -> Result<(), DisplayError> {
            let text = String::try_from(text).map_err(|_| DisplayError::TextTooLong)?;
            self.ops
                .push(Op::Text(font, x, y, text))
                .map_err(|_| DisplayError::BufferOverflow)
        }

        fn force_redraw(&mut self, widget: Widget) -> Result<(), DisplayError> {
            self.ops
                .push(Op::Redraw(widget))
                .map_err(|_| DisplayError::BufferOverflow)
        }
    }

    #[test]
    fn test_boot_screen() {
        let machine = ControlStateMachine::new();
        let mut rec = Recorder::default();
        Renderer::new().render_boot(machine.state(), &mut rec).unwrap();

        assert_eq!(
            rec.ops[0],
            Op::Fill(SCREEN, Color::White)
        );
        let images: Vec<Image, 8> = rec.images().collect();
        assert_eq!(
            &images[..],
            &[
                Image::Unlocked,
                Image::Next,
                Image::Prev,
                Image::Play,
                Image::CycleDaily,
                Image::DoorOpen,
            ]
        );
        assert!(rec.texts().any(|t| t == "Daily"));
    }

    #[test]
    fn test_lock_image_follows_state() {
        let mut rec = Recorder::default();
        let r = Renderer::new();
        r.render(&UiUpdate::Lock { locked: true }, &mut rec).unwrap();
        r.render(&UiUpdate::Lock { locked: false }, &mut rec).unwrap();
        assert_eq!(
            &rec.ops[..],
            &[
                Op::Fill(LOCK_BUTTON, Color::White),
                Op::Image(248, 208, Image::Locked),
                Op::Fill(LOCK_BUTTON, Color::White),
                Op::Image(248, 208, Image::Unlocked),
            ]
        );
    }

    #[test]
    fn test_cycle_selection_clears_name() {
        let mut rec = Recorder::default();
        Renderer::new()
            .render(&UiUpdate::CycleSelected(CycleId::Spin), &mut rec)
            .unwrap();
        assert_eq!(rec.ops[0], Op::Fill(NAME_AREA, Color::White));
        assert_eq!(
            rec.ops[1],
            Op::Text(Font::Sans36, 30, 330, String::try_from("Spin").unwrap())
        );
        assert_eq!(rec.ops[2], Op::Image(50, 160, Image::CycleSpin));
    }

    #[test]
    fn test_run_banner_shows_total() {
        let mut rec = Recorder::default();
        Renderer::new()
            .render(&UiUpdate::RunStarted { total_minutes: 23 }, &mut rec)
            .unwrap();
        assert_eq!(rec.ops[0], Op::Fill(STATUS_AREA, Color::White));
        assert!(rec.ops.contains(&Op::Image(128, 410, Image::Pause)));
        let texts: Vec<&str, 4> = rec.texts().collect();
        assert_eq!(&texts[..], &["Total:", "23", "min"]);
    }

    #[test]
    fn test_clock_pads_seconds() {
        let mut rec = Recorder::default();
        Renderer::new()
            .render(&UiUpdate::Clock { minutes: 4, seconds: 7 }, &mut rec)
            .unwrap();
        assert_eq!(rec.ops[0], Op::Fill(CLOCK_AREA, Color::White));
        let texts: Vec<&str, 4> = rec.texts().collect();
        assert_eq!(&texts[..], &["4", ":", "07"]);
    }

    #[test]
    fn test_door_indicator() {
        let mut rec = Recorder::default();
        let r = Renderer::new();
        r.render(&UiUpdate::DoorIndicator { open: false }, &mut rec)
            .unwrap();
        assert_eq!(&rec.ops[..], &[Op::Fill(DOOR_AREA, Color::White)]);

        r.render(&UiUpdate::DoorOpenWarning, &mut rec).unwrap();
        assert_eq!(rec.ops[2], Op::Image(0, 0, Image::DoorOpen));
    }

    #[test]
    fn test_pause_restores_recorded_door() {
        let mut machine = ControlStateMachine::new();
        machine.handle(Event::DoorEdge);
        machine.handle(Event::Touch(Action::TogglePlayPause));
        machine.handle(Event::DoorEdge);

        let mut rec = Recorder::default();
        let r = Renderer::new();
        for update in &machine.handle(Event::Touch(Action::TogglePlayPause)) {
            r.render(update, &mut rec).unwrap();
        }

        // Pause wipes the corner, the door report puts the icon back
        let wiped = rec
            .ops
            .iter()
            .position(|op| *op == Op::Fill(DOOR_AREA, Color::White))
            .unwrap();
        let shown = rec
            .ops
            .iter()
            .rposition(|op| *op == Op::Image(0, 0, Image::DoorOpen))
            .unwrap();
        assert!(shown > wiped);
    }

    #[test]
    fn test_completion_sequence() {
        let mut machine = ControlStateMachine::new();
        machine.handle(Event::DoorEdge);
        machine.handle(Event::Touch(Action::SelectPrev));
        machine.handle(Event::Touch(Action::TogglePlayPause));

        let mut last = Default::default();
        while machine.state().is_running() {
            last = machine.handle(Event::Tick);
        }

        let mut rec = Recorder::default();
        let r = Renderer::new();
        for update in &last {
            r.render(update, &mut rec).unwrap();
        }

        assert!(rec.ops.contains(&Op::Redraw(Widget::Lock)));
        assert!(rec.ops.contains(&Op::Image(128, 410, Image::Play)));
        let texts: Vec<&str, 8> = rec.texts().collect();
        assert_eq!(&texts[texts.len() - 2..], &["WASH", "COMPLETE!"]);
    }
}
