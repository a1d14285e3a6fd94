//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! board-specific implementations.

pub mod display;

pub use display::{DisplayError, DisplaySurface};
pub use crate::touch::{ReadFailure, TouchSource};
