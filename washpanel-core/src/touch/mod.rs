//! Touch input
//!
//! Raw samples come from the panel link; this module maps them to panel
//! coordinates, finds the button under the finger and produces actions.

pub mod dispatcher;
pub mod source;
pub mod zones;

pub use dispatcher::{TouchBatch, TouchDispatcher};
pub use source::{ReadFailure, TouchSample, TouchSource};
pub use zones::{remap, PanelPoint, Zone};
