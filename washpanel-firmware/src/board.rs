//! Board wiring
//!
//! Raspberry Pi Pico carrier:
//!
//! | Signal          | Pin    | Notes                          |
//! |-----------------|--------|--------------------------------|
//! | Panel UART TX   | GPIO0  | UART0, to panel module RX      |
//! | Panel UART RX   | GPIO1  | UART0, from panel module TX    |
//! | Diag UART TX    | GPIO4  | UART1, serial monitor          |
//! | Door contact    | GPIO14 | rising edge on each transition |
//! | Safety button   | GPIO15 | rising edge on each press      |
//! | Door LED        | GPIO25 | on-board LED, lit = door open  |

/// Panel link baud rate
pub const PANEL_BAUD: u32 = 115_200;

/// Serial monitor baud rate
pub const DIAG_BAUD: u32 = 115_200;

/// Panel UART ring buffer size, each direction
pub const PANEL_BUF_SIZE: usize = 256;
