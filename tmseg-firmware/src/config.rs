//! Board configuration
//!
//! Constants are generated by build.rs from display.toml, which is
//! validated at build time, so nothing here can fail at runtime.

use tmseg_driver::DisplayConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Driver configuration from display.toml
pub fn display_config() -> DisplayConfig {
    DisplayConfig {
        bit_delay_us: BIT_DELAY_US,
        scroll_frame_ms: SCROLL_FRAME_MS,
        brightness: BRIGHTNESS,
    }
}
