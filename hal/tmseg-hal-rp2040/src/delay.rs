//! Busy-wait delays
//!
//! The display driver is blocking, so its delays spin on the embassy time
//! driver instead of yielding to the executor.

use embassy_time::{block_for, Duration};
use tmseg_hal::Delay;

/// Blocking delay backed by the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn delay_us(&mut self, us: u32) {
        block_for(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(ms as u64));
    }
}
