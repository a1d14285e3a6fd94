//! Board-agnostic control logic for the washing machine touch panel
//!
//! Everything here is plain data and pure transitions, so it runs and is
//! tested on the host:
//!
//! - Fixed wash-cycle catalog
//! - Touch sample mapping and zone dispatch
//! - Door / safety-button edge debouncing
//! - One-second tick generation and run-time accounting
//! - The control state machine
//! - Display surface trait and the screen renderer
//! - Diagnostic line formatting for the serial monitor

#![no_std]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod diag;
pub mod safety;
pub mod state;
pub mod timer;
pub mod touch;
pub mod traits;
pub mod ui;
