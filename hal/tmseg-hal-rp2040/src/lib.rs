//! RP2040-specific HAL for the tmseg display driver
//!
//! This crate provides RP2040 implementations of the `tmseg-hal` traits:
//! - Bus lines over embassy-rp flexible GPIO pins
//! - Busy-wait delays on the embassy time driver

#![no_std]

pub mod delay;
pub mod line;

// Re-export shared traits from tmseg-hal for convenience
pub use delay::BlockingDelay;
pub use line::FlexLine;
pub use tmseg_hal::{BusLine, Delay, OutputPin};
