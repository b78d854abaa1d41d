//! Simulated TM1637 for host tests
//!
//! The two simulated lines and the delay share one [`SimChip`]. Every line
//! change and delay is logged, and the chip decodes the wire the way the
//! real part does: start and stop conditions are data edges while the clock
//! is high, data bits are sampled on rising clock edges (LSB first) and the
//! ninth clock of each byte is the acknowledge slot.

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use tmseg_hal::{BusLine, Delay, OutputPin};

/// Display RAM size of the chip
pub const GRIDS: usize = 6;

/// Bytes of one framed transaction (start .. stop)
pub type Transaction = heapless::Vec<u8, 8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Output(Line),
    Clk(bool),
    Dio(bool),
    DelayUs(u32),
    DelayMs(u32),
}

#[derive(Debug, Default)]
pub struct SimChip {
    clk: bool,
    dio: bool,
    /// Everything that happened on the wire, in order
    pub events: Vec<Event>,
    /// Completed transactions
    pub transactions: Vec<Transaction>,
    /// Display RAM writes as (address, data)
    pub writes: Vec<(u8, u8)>,
    /// Display RAM
    pub ram: [u8; GRIDS],
    /// Data command selected fixed addressing
    pub fixed_addr: bool,
    pub display_on: bool,
    pub brightness: u8,
    in_frame: bool,
    shift: u8,
    bit_count: u8,
    current: Transaction,
}

impl SimChip {
    /// Forget the log and the decoded traffic, keep RAM and settings
    pub fn clear_log(&mut self) {
        self.events.clear();
        self.transactions.clear();
        self.writes.clear();
    }

    /// Scroll frames and other millisecond pauses seen so far
    pub fn pauses(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::DelayMs(_)))
            .count()
    }

    fn drive(&mut self, line: Line, high: bool) {
        match line {
            Line::Clk => {
                self.events.push(Event::Clk(high));
                let rising = high && !self.clk;
                self.clk = high;
                if rising && self.in_frame {
                    self.clock_bit();
                }
            }
            Line::Dio => {
                self.events.push(Event::Dio(high));
                let changed = high != self.dio;
                self.dio = high;
                if changed && self.clk {
                    if high {
                        self.stop_condition();
                    } else {
                        self.start_condition();
                    }
                }
            }
        }
    }

    fn start_condition(&mut self) {
        self.in_frame = true;
        self.shift = 0;
        self.bit_count = 0;
        self.current.clear();
    }

    fn clock_bit(&mut self) {
        if self.bit_count < 8 {
            if self.dio {
                self.shift |= 1 << self.bit_count;
            }
            self.bit_count += 1;
        } else {
            // Acknowledge slot
            let _ = self.current.push(self.shift);
            self.shift = 0;
            self.bit_count = 0;
        }
    }

    fn stop_condition(&mut self) {
        if !self.in_frame {
            return;
        }
        self.in_frame = false;
        let transaction = core::mem::take(&mut self.current);
        self.execute(&transaction);
        self.transactions.push(transaction);
    }

    fn execute(&mut self, bytes: &[u8]) {
        let Some((&command, data)) = bytes.split_first() else {
            return;
        };

        match command & 0xC0 {
            0x40 => self.fixed_addr = command & 0x04 != 0,
            0x80 => {
                self.display_on = command & 0x08 != 0;
                self.brightness = command & 0x07;
            }
            0xC0 => {
                let mut addr = command & 0x07;
                for &byte in data {
                    self.writes.push((addr, byte));
                    if let Some(cell) = self.ram.get_mut(addr as usize) {
                        *cell = byte;
                    }
                    if !self.fixed_addr {
                        addr = (addr + 1) & 0x07;
                    }
                }
            }
            _ => {}
        }
    }
}

pub type SharedChip = Rc<RefCell<SimChip>>;

/// One of the two bus lines of a [`SimChip`]
pub struct SimLine {
    chip: SharedChip,
    line: Line,
}

impl OutputPin for SimLine {
    fn set_high(&mut self) {
        self.chip.borrow_mut().drive(self.line, true);
    }

    fn set_low(&mut self) {
        self.chip.borrow_mut().drive(self.line, false);
    }
}

impl BusLine for SimLine {
    fn set_as_output(&mut self) {
        self.chip.borrow_mut().events.push(Event::Output(self.line));
    }
}

/// Delay that only records what was asked for
pub struct SimDelay {
    chip: SharedChip,
}

impl Delay for SimDelay {
    fn delay_us(&mut self, us: u32) {
        self.chip.borrow_mut().events.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.chip.borrow_mut().events.push(Event::DelayMs(ms));
    }
}

/// A fresh chip with both lines idle high, plus the handles to drive it
pub fn sim() -> (SharedChip, SimLine, SimLine, SimDelay) {
    let chip = Rc::new(RefCell::new(SimChip {
        clk: true,
        dio: true,
        ..SimChip::default()
    }));
    let clk = SimLine {
        chip: chip.clone(),
        line: Line::Clk,
    };
    let dio = SimLine {
        chip: chip.clone(),
        line: Line::Dio,
    };
    let delay = SimDelay { chip: chip.clone() };
    (chip, clk, dio, delay)
}
