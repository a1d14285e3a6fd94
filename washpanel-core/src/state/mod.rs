//! Control state machine
//!
//! The single owner of the operating state. Every event source feeds it
//! through one queue; it answers each event with the display updates to
//! apply.

pub mod events;
pub mod machine;

pub use events::{Action, Event, UiUpdate};
pub use machine::{ControlState, ControlStateMachine, MachineState, Updates, MAX_UPDATES};
