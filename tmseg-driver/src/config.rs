//! Display timing and start-up configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest brightness level the chip supports
pub const MAX_BRIGHTNESS: u8 = 7;

/// Display configuration
///
/// Only affects timing and the brightness used at start-up; the digit count
/// is a const generic on the display itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Settle time after each bus line transition, in microseconds
    pub bit_delay_us: u32,
    /// Pause between scroll frames, in milliseconds
    pub scroll_frame_ms: u32,
    /// Brightness sent at start-up (0-7, higher bits ignored)
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DisplayConfig {
    /// Short wires on the same board as the MCU
    pub const STANDARD: Self = Self {
        bit_delay_us: 1,
        scroll_frame_ms: 250,
        brightness: MAX_BRIGHTNESS,
    };

    /// Modules on long leads, where the line capacitance needs a slower clock
    pub const LONG_WIRES: Self = Self {
        bit_delay_us: 100,
        scroll_frame_ms: 250,
        brightness: MAX_BRIGHTNESS,
    };

    /// Same configuration with a different start-up brightness
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Same configuration with a different scroll frame pause
    pub const fn with_scroll_frame_ms(mut self, ms: u32) -> Self {
        self.scroll_frame_ms = ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_standard() {
        let config = DisplayConfig::default();
        assert_eq!(config, DisplayConfig::STANDARD);
        assert_eq!(config.bit_delay_us, 1);
        assert_eq!(config.scroll_frame_ms, 250);
        assert_eq!(config.brightness, MAX_BRIGHTNESS);
    }

    #[test]
    fn test_builders() {
        let config = DisplayConfig::LONG_WIRES
            .with_brightness(2)
            .with_scroll_frame_ms(100);

        assert_eq!(config.bit_delay_us, 100);
        assert_eq!(config.brightness, 2);
        assert_eq!(config.scroll_frame_ms, 100);
    }
}
