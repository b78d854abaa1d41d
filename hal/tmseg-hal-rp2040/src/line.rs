//! Bus lines on RP2040 GPIO
//!
//! Uses a `Flex` pin so the direction is switched by port setup rather
//! than fixed when the pin is taken.

use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;
use tmseg_hal::{BusLine, OutputPin};

/// Clock or data line of the display bus
pub struct FlexLine<'d> {
    pin: Flex<'d>,
}

impl<'d> FlexLine<'d> {
    /// Take a GPIO for the bus
    ///
    /// The internal pull-up is enabled so the line idles high even before
    /// the driver configures it as an output. Most TM1637 modules also
    /// carry external pull-ups.
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        Self { pin }
    }
}

impl OutputPin for FlexLine<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }
}

impl BusLine for FlexLine<'_> {
    fn set_as_output(&mut self) {
        self.pin.set_as_output();
    }
}
