//! Blocking delay abstraction
//!
//! The bus protocol settles every line transition with a busy-wait and the
//! scroll animation pauses between frames. Both go through this trait so
//! host tests can run with zero or recorded delays.

/// Blocking delay provider
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
