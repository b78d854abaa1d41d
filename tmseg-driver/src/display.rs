//! TM1637 display: numbers, text and scrolling
//!
//! Everything here computes a segment byte and writes it to one digit with
//! [`Bus::send_data`]. Nothing is buffered locally, so each call costs one
//! bus round trip per digit written.

use tmseg_hal::{BusLine, Delay};

use crate::bus::{cmd, Bus};
use crate::config::DisplayConfig;
use crate::font::{self, BLANK, DOT};

/// Number of grids the TM1637 can drive
pub const MAX_DIGITS: usize = 6;

/// Where a number is anchored relative to its offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Most significant digit at the offset, the rest to its right
    Left,
    /// Least significant digit at the offset, the rest to its left
    #[default]
    Right,
}

/// A TM1637 driven seven-segment display with `N` digits
///
/// Position 0 is the leftmost digit.
pub struct Tm1637<CLK, DIO, D, const N: usize = 4> {
    bus: Bus<CLK, DIO, D>,
    /// Decimal point overlay, one bit per position
    dots: u8,
    config: DisplayConfig,
}

impl<CLK, DIO, D, const N: usize> Tm1637<CLK, DIO, D, N>
where
    CLK: BusLine,
    DIO: BusLine,
    D: Delay,
{
    const VALID_DIGITS: () = assert!(
        N >= 1 && N <= MAX_DIGITS,
        "TM1637 drives between 1 and 6 digits"
    );

    /// Set up the bus and bring the display up blank at full brightness
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self::with_config(clk, dio, delay, DisplayConfig::default())
    }

    /// Set up the bus and bring the display up blank
    ///
    /// Selects auto-increment write mode, switches the display on at the
    /// configured brightness and clears every digit.
    pub fn with_config(clk: CLK, dio: DIO, delay: D, config: DisplayConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_DIGITS;

        let mut bus = Bus::new(clk, dio, delay, config.bit_delay_us);
        bus.setup();
        bus.send_command(cmd::DATA_CMD | cmd::WRITE_DISP);
        bus.send_command(
            cmd::DISP_CTRL | cmd::DISP_ENABLE | (config.brightness & cmd::DISP_PWM_MASK),
        );

        let mut display = Self {
            bus,
            dots: 0,
            config,
        };
        display.clear();
        display
    }

    /// Number of digits
    pub const fn digits(&self) -> usize {
        N
    }

    /// Active configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Blank every digit, left to right
    pub fn clear(&mut self) {
        for position in 0..N as u8 {
            self.bus.send_data(position, BLANK);
        }
    }

    /// Write raw segments, adding the decimal point if the dot mask asks for it
    pub fn set_byte(&mut self, position: u8, segments: u8) {
        let dot = if self.dots & position_bit(position) != 0 {
            DOT
        } else {
            0
        };
        self.bus.send_data(position, segments | dot);
    }

    /// Write a hexadecimal digit; only the low nibble is used
    pub fn set_digit(&mut self, position: u8, digit: u8) {
        self.set_byte(position, font::digit_glyph(digit));
    }

    /// Write a decimal number
    ///
    /// Digits are written from the least significant one at `offset`
    /// leftwards until the number runs out or position 0 has been written.
    /// With [`Align::Left`] the offset is first moved right so the most
    /// significant digit lands on `offset` instead. Zero writes nothing.
    pub fn set_number(&mut self, number: u32, offset: u8, align: Align) {
        let offset = match align {
            Align::Left => offset.saturating_add(extra_digits(number)),
            Align::Right => offset,
        };

        let mut positions = (0..=offset).rev();
        self.write_digits(number, 10, &mut positions);
    }

    /// Write a decimal number right aligned on the last digit
    pub fn set_number_right(&mut self, number: u32) {
        self.set_number(number, (N - 1) as u8, Align::Right);
    }

    /// Write a decimal number into a field of `width` digits ending at `offset`
    ///
    /// Positions the number does not fill get `pad`. A zero fills the whole
    /// field with `pad`; pass the `0` glyph as pad to show it. A number wider
    /// than the field keeps its low digits and nothing outside the field is
    /// written.
    pub fn set_number_pad(&mut self, number: u32, offset: u8, width: u8, pad: u8) {
        self.write_padded(number, 10, offset, width, pad);
    }

    /// Write a hexadecimal number into a field of `width` digits ending at `offset`
    pub fn set_number_hex(&mut self, number: u32, offset: u8, width: u8, pad: u8) {
        self.write_padded(number, 16, offset, width, pad);
    }

    /// Write one character; characters without a glyph leave the digit as is
    pub fn set_char(&mut self, position: u8, ch: char) {
        if let Some(segments) = font::char_glyph(ch) {
            self.set_byte(position, segments);
        }
    }

    /// Write characters from `offset` rightwards
    ///
    /// Stops at the end of `text` or at a NUL. Digits past the text are
    /// left untouched.
    pub fn set_chars(&mut self, text: &str, offset: u8) {
        let text = until_nul(text);
        for (position, ch) in (offset..=u8::MAX).zip(text.chars()) {
            self.set_char(position, ch);
        }
    }

    /// Scroll `text` across the display, one character per frame
    ///
    /// Blocks until the last character has been shown in a frame and that
    /// frame's pause is over. Text that fits the display is shown once,
    /// left aligned. Empty text returns immediately.
    pub fn scroll(&mut self, text: &str) {
        let mut frame = until_nul(text);

        while !frame.is_empty() {
            let mut chars = frame.chars().peekable();
            for position in 0..N as u8 {
                let Some(ch) = chars.next() else {
                    return;
                };
                self.set_char(position, ch);

                if chars.peek().is_none() {
                    self.bus.pause_ms(self.config.scroll_frame_ms);
                    return;
                }
            }

            let mut rest = frame.chars();
            rest.next();
            frame = rest.as_str();
            self.bus.pause_ms(self.config.scroll_frame_ms);
        }
    }

    /// Set which positions show their decimal point
    ///
    /// Bit `n` belongs to position `n`. Takes effect on the next write to
    /// each position; nothing is sent now.
    pub fn set_dots(&mut self, mask: u8) {
        self.dots = mask;
    }

    /// Current decimal point mask
    pub fn dots(&self) -> u8 {
        self.dots
    }

    /// Switch the display on at `brightness` (0-7, higher bits ignored)
    pub fn set_brightness(&mut self, brightness: u8) {
        self.bus.send_command(
            cmd::DISP_CTRL | cmd::DISP_ENABLE | (brightness & cmd::DISP_PWM_MASK),
        );
    }

    fn write_padded(&mut self, number: u32, radix: u32, offset: u8, width: u8, pad: u8) {
        let mut positions = (0..=offset).rev().take(width as usize);
        self.write_digits(number, radix, &mut positions);

        for position in positions {
            self.set_byte(position, pad);
        }
    }

    /// Write digits of `number` least significant first, one per position
    fn write_digits(
        &mut self,
        mut number: u32,
        radix: u32,
        positions: &mut impl Iterator<Item = u8>,
    ) {
        while number != 0 {
            let Some(position) = positions.next() else {
                break;
            };
            self.set_digit(position, (number % radix) as u8);
            number /= radix;
        }
    }
}

/// Dot mask bit for a position; positions past the mask have none
fn position_bit(position: u8) -> u8 {
    1u8.checked_shl(position as u32).unwrap_or(0)
}

/// Digits beyond the first: 0 for 0-9, 1 for 10-99, ...
fn extra_digits(number: u32) -> u8 {
    number.checked_ilog10().unwrap_or(0) as u8
}

fn until_nul(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}
