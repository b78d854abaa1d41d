//! Seven-segment glyph table
//!
//! Segment bytes use the TM1637 wiring: bit 0 is segment `a` (top), going
//! clockwise to bit 5 (`f`), bit 6 is the middle bar `g` and bit 7 is the
//! decimal point.
//!
//! ```text
//!      a
//!     ───
//!  f │   │ b
//!     ─g─
//!  e │   │ c
//!     ───  .dp
//!      d
//! ```

/// All segments off
pub const BLANK: u8 = 0x00;

/// Decimal point segment
pub const DOT: u8 = 0x80;

/// Digits `0`-`9` followed by letters `a`-`z`
///
/// Entries 10-15 double as the hexadecimal digits. Letters that a seven
/// segment display cannot draw are approximated.
pub const GLYPHS: [u8; 36] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x77, // A
    0x7C, // b
    0x39, // C
    0x5E, // d
    0x79, // E
    0x71, // F
    0x3D, // G
    0x74, // h
    0x30, // I
    0x1E, // J
    0x75, // K
    0x38, // L
    0x55, // M
    0x54, // n
    0x5C, // o
    0x73, // P
    0x67, // q
    0x50, // r
    0x6D, // S
    0x78, // t
    0x3E, // U
    0x1C, // v
    0x6A, // W
    0x76, // X
    0x6E, // y
    0x5B, // Z
];

/// Index of the first letter in [`GLYPHS`]
const LETTER_BASE: usize = 10;

/// Glyph for a 4-bit value; higher bits are ignored
pub fn digit_glyph(nibble: u8) -> u8 {
    GLYPHS[(nibble & 0x0F) as usize]
}

/// Glyph for punctuation and symbols
///
/// Returns [`BLANK`] for anything not in the symbol set, which is also the
/// glyph for a space. Callers must tell the two apart themselves.
pub fn map_char(ch: char) -> u8 {
    match ch {
        '-' => 0x40,
        '_' => 0x08,
        '=' => 0x48,
        '"' => 0x22,
        '\'' => 0x20,
        '[' | '(' => 0x39,
        ']' | ')' => 0x0F,
        '?' => 0x53,
        '.' => DOT,
        // Degree sign
        '*' => 0x63,
        _ => BLANK,
    }
}

/// Resolve a character to the byte that `set_char` writes
///
/// Symbols come first, then letters (case-insensitive), then digits.
/// `None` means the character has no glyph and the position is skipped.
pub fn char_glyph(ch: char) -> Option<u8> {
    let symbol = map_char(ch);
    if symbol != BLANK || ch == ' ' {
        return Some(symbol);
    }

    match ch {
        'a'..='z' => Some(GLYPHS[LETTER_BASE + (ch as usize - 'a' as usize)]),
        'A'..='Z' => Some(GLYPHS[LETTER_BASE + (ch as usize - 'A' as usize)]),
        '0'..='9' => Some(GLYPHS[ch as usize - '0' as usize]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(digit_glyph(0), 0x3F);
        assert_eq!(digit_glyph(8), 0x7F);
        assert_eq!(digit_glyph(0xA), 0x77);
        assert_eq!(digit_glyph(0xF), 0x71);
    }

    #[test]
    fn test_digit_glyph_masks_high_bits() {
        assert_eq!(digit_glyph(0x10), digit_glyph(0));
        assert_eq!(digit_glyph(0xFB), digit_glyph(0xB));
    }

    #[test]
    fn test_no_glyph_uses_dot() {
        for glyph in GLYPHS {
            assert_eq!(glyph & DOT, 0);
        }
    }

    #[test]
    fn test_space_is_blank_not_skipped() {
        assert_eq!(map_char(' '), BLANK);
        assert_eq!(char_glyph(' '), Some(BLANK));
    }

    #[test]
    fn test_symbols_take_priority() {
        assert_eq!(char_glyph('-'), Some(0x40));
        assert_eq!(char_glyph('_'), Some(0x08));
        assert_eq!(char_glyph('?'), Some(0x53));
        assert_eq!(char_glyph('.'), Some(DOT));
    }

    #[test]
    fn test_unmapped_chars_are_skipped() {
        assert_eq!(char_glyph('#'), None);
        assert_eq!(char_glyph('\0'), None);
        assert_eq!(char_glyph('~'), None);
        assert_eq!(char_glyph('é'), None);
    }

    #[test]
    fn test_hex_letters_match_digits() {
        for (i, ch) in ('a'..='f').enumerate() {
            assert_eq!(char_glyph(ch), Some(digit_glyph(10 + i as u8)));
        }
        for (i, ch) in ('A'..='F').enumerate() {
            assert_eq!(char_glyph(ch), Some(digit_glyph(10 + i as u8)));
        }
    }

    proptest! {
        #[test]
        fn prop_letters_case_insensitive(offset in 0u8..26) {
            let lower = (b'a' + offset) as char;
            let upper = (b'A' + offset) as char;
            prop_assert_eq!(char_glyph(lower), char_glyph(upper));
            prop_assert_eq!(char_glyph(lower), Some(GLYPHS[10 + offset as usize]));
        }

        #[test]
        fn prop_digit_chars_match_digit_glyphs(d in 0u8..10) {
            prop_assert_eq!(char_glyph((b'0' + d) as char), Some(digit_glyph(d)));
        }

        #[test]
        fn prop_digit_glyph_uses_low_nibble(n in any::<u8>()) {
            prop_assert_eq!(digit_glyph(n), GLYPHS[(n & 0x0F) as usize]);
        }
    }
}
