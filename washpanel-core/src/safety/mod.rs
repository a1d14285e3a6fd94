//! Safety interlock
//!
//! Debounced handling of the door contact and the safety arming button.

pub mod backlog;
pub mod debounce;
pub mod interlock;

pub use backlog::{EdgeBacklog, ParkedEdges};
pub use debounce::EdgeDebouncer;
pub use interlock::{SafetyInterlock, Sensor};
