//! GPIO line abstractions
//!
//! The display bus is two open-drain-style lines (clock and data) that idle
//! high. The driver only ever drives them, so no input trait is needed.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip. Driving a line never fails from the driver's point
/// of view; a HAL with fallible pins drops the error (see [`crate::compat`]).
/// The bus never reads a line back, so there is no level query.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// A bus line whose direction is configured once at start-up
///
/// Port setup switches both display lines to outputs before the first
/// transaction. HALs where the direction is fixed when the pin is created
/// can treat [`BusLine::set_as_output`] as a no-op.
pub trait BusLine: OutputPin {
    /// Configure the line as an output
    fn set_as_output(&mut self);
}
