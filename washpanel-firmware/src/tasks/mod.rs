//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod controller;
pub mod diag;
pub mod interlock;
pub mod panel_rx;
pub mod panel_tx;
pub mod tick;
pub mod touch;

pub use controller::controller_task;
pub use diag::diag_task;
pub use interlock::interlock_task;
pub use panel_rx::panel_rx_task;
pub use panel_tx::panel_tx_task;
pub use tick::tick_task;
pub use touch::touch_task;
