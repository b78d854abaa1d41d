//! TM1637 two-wire bus engine
//!
//! The TM1637 speaks an I2C-like protocol without device addresses:
//!
//! - Start: data falls while clock is high
//! - Stop: data rises while clock is high
//! - Bytes go out LSB first, one bit per clock pulse, followed by a ninth
//!   clock in which the chip pulls data low to acknowledge
//!
//! # Known gap
//!
//! The bus is open loop. The acknowledge bit is clocked but never sampled,
//! so a missing or unplugged display, a stuck line or a corrupted byte all
//! go unnoticed. This is acceptable for a write-only LED display; retrying
//! would not change what the user sees.

use tmseg_hal::{BusLine, Delay};

/// TM1637 instruction set
pub mod cmd {
    /// Data command
    pub const DATA_CMD: u8 = 0x40;
    /// Display control command
    pub const DISP_CTRL: u8 = 0x80;
    /// Address command
    pub const ADDR_CMD: u8 = 0xC0;

    /// Data command: write to display RAM with address auto-increment
    pub const WRITE_DISP: u8 = 0x00;
    /// Data command: read key scan data
    pub const READ_KEYS: u8 = 0x02;
    /// Data command: fixed address
    pub const FIXED_ADDR: u8 = 0x04;

    /// Display control: brightness (PWM duty) bits
    pub const DISP_PWM_MASK: u8 = 0x07;
    /// Display control: display on
    pub const DISP_ENABLE: u8 = 0x08;

    /// Address command: grid address bits
    pub const ADDR_MASK: u8 = 0x07;
}

/// Bit-banged TM1637 bus
///
/// Owns the clock line, the data line and the delay used to let each
/// transition settle. One transaction runs at a time and blocks until done.
pub struct Bus<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    /// Settle time after each transition
    settle_us: u32,
}

impl<CLK, DIO, D> Bus<CLK, DIO, D>
where
    CLK: BusLine,
    DIO: BusLine,
    D: Delay,
{
    /// Create a bus; call [`Bus::setup`] before the first transaction
    pub fn new(clk: CLK, dio: DIO, delay: D, settle_us: u32) -> Self {
        Self {
            clk,
            dio,
            delay,
            settle_us,
        }
    }

    /// Switch both lines to outputs and idle them high
    pub fn setup(&mut self) {
        self.clk.set_as_output();
        self.dio.set_as_output();
        self.clk.set_high();
        self.dio.set_high();
    }

    /// Start condition
    pub fn start(&mut self) {
        self.clk.set_high();
        self.dio.set_high();
        self.settle();

        self.dio.set_low();
        self.settle();
    }

    /// Stop condition
    pub fn stop(&mut self) {
        self.clk.set_low();
        self.settle();

        self.clk.set_high();
        self.dio.set_low();
        self.settle();

        self.dio.set_high();
    }

    /// Clock out one byte, LSB first, then the acknowledge slot
    pub fn send(&mut self, byte: u8) {
        for bit in 0..8 {
            self.clk.set_low();
            self.dio.set_state(byte & (1 << bit) != 0);
            self.settle();

            self.clk.set_high();
            self.settle();
        }

        // Clock the ACK bit; not checking if it worked
        self.clk.set_low();
        self.dio.set_low();
        self.settle();

        self.clk.set_high();
        self.settle();
    }

    /// Send a single command byte in its own start/stop frame
    pub fn send_command(&mut self, command: u8) {
        self.start();
        self.send(command);
        self.stop();
    }

    /// Write one byte of display RAM at a fixed address
    ///
    /// Fixed addressing is selected again before every write, so no mode
    /// state is carried between calls.
    pub fn send_data(&mut self, addr: u8, data: u8) {
        self.send_command(cmd::DATA_CMD | cmd::FIXED_ADDR);

        self.start();
        self.send(cmd::ADDR_CMD | (addr & cmd::ADDR_MASK));
        self.send(data);
        self.stop();

        self.settle();
    }

    /// Block for `ms` milliseconds without touching the lines
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.settle_us);
    }
}
