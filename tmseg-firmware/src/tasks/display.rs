//! Display demo task
//!
//! Counts up through every value the display can show, scrolls the
//! configured banner, then settles on "done" with a blinking decimal point
//! as a heartbeat.

use core::fmt::Write;

use defmt::*;
use embassy_time::{Duration, Ticker, Timer};
use heapless::String;
use tmseg_driver::Tm1637;
use tmseg_hal_rp2040::{BlockingDelay, FlexLine};

use crate::config::{BANNER, DIGITS};

/// The board's display
pub type Display = Tm1637<FlexLine<'static>, FlexLine<'static>, BlockingDelay, { DIGITS }>;

/// Heartbeat blink interval
const HEARTBEAT_MS: u64 = 500;

/// Decimal point that blinks, on the first digit
const HEARTBEAT_DOT: u8 = 0b0001;

/// Count-up stops at this many digits to keep the demo short
const MAX_COUNT_DIGITS: u32 = 4;

#[embassy_executor::task]
pub async fn display_task(mut display: Display) {
    info!("Display task started ({} digits)", DIGITS);

    let count_digits = (DIGITS as u32).min(MAX_COUNT_DIGITS);
    let max = 10u32.pow(count_digits) - 1;
    for n in 0..=max {
        display.set_number_right(n);
    }
    debug!("Counted to {}", max);

    let mut banner: String<64> = String::new();
    if write!(banner, "{} v{}", BANNER, env!("CARGO_PKG_VERSION")).is_err() {
        warn!("Banner truncated to {} bytes", banner.len());
    }
    debug!("Scrolling '{}'", banner.as_str());
    display.scroll(&banner);

    display.clear();
    display.set_chars("done", 0);

    // Brightness sweep
    for level in 0..=7 {
        display.set_brightness(level);
        Timer::after(Duration::from_millis(100)).await;
    }
    display.set_brightness(display.config().brightness);
    info!("Demo finished");

    let mut ticker = Ticker::every(Duration::from_millis(HEARTBEAT_MS));
    loop {
        ticker.next().await;

        display.set_dots(display.dots() ^ HEARTBEAT_DOT);
        // Rewrite the digit so the new mask reaches the chip
        display.set_char(0, 'd');
        trace!("Heartbeat dots={=u8:#x}", display.dots());
    }
}
