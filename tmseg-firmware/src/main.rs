//! tmseg - TM1637 display demo firmware
//!
//! Brings up a TM1637 seven-segment module on an RP2040 and runs the demo
//! task. Wiring and timing come from display.toml.

#![no_std]
#![no_main]

mod config;
mod tasks;

use defmt::*;
use embassy_executor::Spawner;
use tmseg_driver::Tm1637;
use tmseg_hal_rp2040::{BlockingDelay, FlexLine};
use {defmt_rtt as _, panic_probe as _};

use crate::tasks::Display;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("tmseg firmware starting...");

    let p = embassy_rp::init(Default::default());

    info!(
        "TM1637 on CLK=gpio{} DIO=gpio{}",
        config::CLK_GPIO,
        config::DIO_GPIO
    );
    let (clk, dio) = config::bus_pins(p);

    // Performs port setup, enables the display and blanks it
    let display: Display = Tm1637::with_config(
        FlexLine::new(clk),
        FlexLine::new(dio),
        BlockingDelay,
        config::display_config(),
    );
    info!("Display initialized");

    spawner.spawn(tasks::display_task(display)).unwrap();

    info!("All tasks spawned");
}
