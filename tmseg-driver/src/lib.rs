//! TM1637 seven-segment display driver
//!
//! Drives a TM1637 LED controller over two GPIO lines with a bit-banged,
//! I2C-like protocol:
//!
//! - [`bus`] - start/stop framing, bit clocking and the chip's command set
//! - [`font`] - segment patterns for digits, letters and symbols
//! - [`display`] - numbers (decimal and hex, aligned or padded), text,
//!   decimal points, brightness and a blocking scroll
//! - [`config`] - bus timing and start-up brightness
//!
//! Everything is blocking and single threaded. The pins and the delay are
//! injected through the `tmseg-hal` traits, so the same code runs against
//! real hardware or a simulated chip in host tests.
//!
//! ```ignore
//! let mut display: Tm1637<_, _, _, 4> = Tm1637::new(clk, dio, delay);
//! display.set_number_right(1234);
//! display.scroll("Hello World");
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod config;
pub mod display;
pub mod font;

#[cfg(test)]
mod sim;

pub use config::DisplayConfig;
pub use display::{Align, Tm1637, MAX_DIGITS};
