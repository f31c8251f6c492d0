// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BitVector, Radix, format_radix_prefixed, to_bits};
use crate::InlineString;

/// Shown in place of a character when the byte is not a printable ASCII glyph.
pub const NON_PRINTABLE_PLACEHOLDER: char = '·';

/// Everything the byte toggler prints under its row of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteReadout {
    pub value: u8,
    pub bits: BitVector,
    pub binary: InlineString,
    pub hex: InlineString,
    pub character: char,
}

impl ByteReadout {
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self {
            value,
            bits: to_bits(value),
            binary: format_radix_prefixed(value, Radix::Binary),
            hex: format_radix_prefixed(value, Radix::Hexadecimal),
            character: printable_char(value),
        }
    }
}

/// The glyph for 32..=126, otherwise [`NON_PRINTABLE_PLACEHOLDER`]. Space counts as
/// printable here.
#[must_use]
pub fn printable_char(value: u8) -> char {
    if (32..=126).contains(&value) {
        char::from(value)
    } else {
        NON_PRINTABLE_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_readout_for_letter_a() {
        let it = ByteReadout::new(65);
        assert_eq2!(it.binary.as_str(), "0b01000001");
        assert_eq2!(it.hex.as_str(), "0x41");
        assert_eq2!(it.character, 'A');
        assert_eq2!(it.bits.to_string(), "01000001");
    }

    #[test_case(31, NON_PRINTABLE_PLACEHOLDER)]
    #[test_case(32, ' ')]
    #[test_case(126, '~')]
    #[test_case(127, NON_PRINTABLE_PLACEHOLDER)]
    #[test_case(200, NON_PRINTABLE_PLACEHOLDER)]
    fn test_printable_char(value: u8, expected: char) {
        assert_eq2!(printable_char(value), expected);
    }
}
