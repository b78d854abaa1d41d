//! Adapters from `embedded-hal` 1.0
//!
//! Lets the driver run on any HAL that already implements the
//! `embedded-hal` digital and delay traits. Pin errors are dropped: the
//! display bus is open loop and has no way to report or recover from them.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as EhOutputPin;

use crate::delay::Delay;
use crate::gpio::{BusLine, OutputPin};

/// Bus line backed by an `embedded-hal` output pin
///
/// The HAL fixes the pin direction when the pin is created, so
/// [`BusLine::set_as_output`] has nothing to switch.
pub struct EhPin<P> {
    pin: P,
}

impl<P: EhOutputPin> EhPin<P> {
    /// Wrap an already configured output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the wrapped pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: EhOutputPin> OutputPin for EhPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}

impl<P: EhOutputPin> BusLine for EhPin<P> {
    fn set_as_output(&mut self) {}
}

/// Delay backed by an `embedded-hal` delay provider
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> Delay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
