//! Washpanel - Washing Machine Touch-Panel Controller Firmware
//!
//! Main firmware binary for the RP2040 controller board. Runs the wash
//! cycle state machine and drives an external touch panel module over
//! UART.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart, UartTx};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use washpanel_core::config::TimingConfig;

mod board;
mod channels;
mod panel;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; board::PANEL_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; board::PANEL_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Washpanel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let timing = TimingConfig::default();

    // Panel link on UART0
    let mut panel_config = UartConfig::default();
    panel_config.baudrate = board::PANEL_BAUD;

    let tx_buf = TX_BUF.init([0u8; board::PANEL_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; board::PANEL_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, panel_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (panel_tx, panel_rx) = uart.split();

    info!("UART0 initialized for panel link");

    // Serial monitor on UART1, transmit only
    let mut diag_config = UartConfig::default();
    diag_config.baudrate = board::DIAG_BAUD;
    let diag_tx = UartTx::new(p.UART1, p.PIN_4, p.DMA_CH0, diag_config);

    info!("UART1 initialized for serial monitor");

    // Contacts idle low and pulse high on each transition
    let door = Input::new(p.PIN_14, Pull::Down);
    let safety = Input::new(p.PIN_15, Pull::Down);

    // Door starts open, so the LED starts lit
    let door_led = Output::new(p.PIN_25, Level::High);

    // Spawn tasks
    spawner.spawn(tasks::panel_rx_task(panel_rx)).unwrap();
    spawner.spawn(tasks::panel_tx_task(panel_tx)).unwrap();
    spawner.spawn(tasks::diag_task(diag_tx)).unwrap();
    spawner.spawn(tasks::touch_task()).unwrap();
    spawner.spawn(tasks::interlock_task(door, safety, timing)).unwrap();
    spawner.spawn(tasks::tick_task(timing)).unwrap();
    spawner.spawn(tasks::controller_task(door_led)).unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        let dropped = channels::DROPPED_EVENTS.load(portable_atomic::Ordering::Relaxed);
        trace!("Main loop heartbeat, {} events dropped", dropped);
    }
}
