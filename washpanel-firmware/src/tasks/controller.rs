//! Main controller task
//!
//! Sole consumer of the event queue. Each event runs through the state
//! machine to completion before the next is taken; the resulting display
//! updates are queued for the panel. The door LED follows the door updates
//! only, so it never changes during a run.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embedded_hal::digital::{OutputPin, PinState};

use washpanel_core::state::{ControlStateMachine, Event, UiUpdate};
use washpanel_core::ui::Renderer;

use crate::channels::{EDGES_PARKED, EDGE_BACKLOG, EVENT_QUEUE};
use crate::panel::LinkSurface;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut door_led: Output<'static>) {
    info!("Controller task started");

    let mut machine = ControlStateMachine::new();
    let renderer = Renderer::new();
    let mut surface = LinkSurface::new();

    if let Err(e) = renderer.render_boot(machine.state(), &mut surface) {
        warn!("Boot screen incomplete: {:?}", e);
    }
    set_led(&mut door_led, machine.state().is_door_open());
    info!("Boot complete, {:?} selected", machine.state().selected_cycle());

    loop {
        match select(EVENT_QUEUE.receive(), EDGES_PARKED.wait()).await {
            Either::First(event) => {
                apply(&mut machine, &renderer, &mut surface, &mut door_led, event)
            }
            Either::Second(()) => {}
        }

        for event in EDGE_BACKLOG.drain() {
            debug!("Replaying parked {:?}", event);
            apply(&mut machine, &renderer, &mut surface, &mut door_led, event);
        }
    }
}

/// Run one event through the machine and show the result
fn apply(
    machine: &mut ControlStateMachine,
    renderer: &Renderer,
    surface: &mut LinkSurface,
    door_led: &mut Output<'static>,
    event: Event,
) {
    if !matches!(event, Event::Tick) {
        debug!("Event: {:?}", event);
    }

    let updates = machine.handle(event);
    for update in &updates {
        trace!("Update: {:?}", update);
        if let Err(e) = renderer.render(update, surface) {
            warn!("Render of {:?} failed: {:?}", update, e);
        }
    }

    if let Some(open) = updates.iter().rev().find_map(UiUpdate::door_led) {
        set_led(door_led, open);
    }
}

/// LED lit while the door is shown open
fn set_led<P: OutputPin>(led: &mut P, open: bool) {
    let _ = led.set_state(PinState::from(open));
}
