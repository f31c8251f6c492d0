// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::Display;

use crate::{BITS_PER_BYTE, BitIndex, InlineString, Radix, format_radix};

/// Structural role of a byte in a UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ByteRole {
    /// The only byte of a 1 byte sequence, prefix `0`.
    Ascii,
    /// First byte of a 2-4 byte sequence, prefix `110`, `1110`, or `11110`.
    Lead,
    /// Every other byte of a multi byte sequence, prefix `10`.
    Continuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedByte {
    pub value: u8,
    pub role: ByteRole,
    /// How many of the low bits carry code point data. The rest is the prefix.
    pub data_bit_width: u8,
}

impl EncodedByte {
    /// Width of the structural prefix, the high bits that are not data.
    #[must_use]
    pub fn prefix_width(&self) -> u8 {
        // The widths of the prefix and the data always add up to a full byte.
        8 - self.data_bit_width
    }

    #[must_use]
    pub fn is_prefix_bit(&self, index: BitIndex) -> bool {
        index.as_u8() < self.prefix_width()
    }

    /// The data bits as a number, the byte with its prefix masked off.
    #[must_use]
    pub fn data_value(&self) -> u8 { self.value & low_mask(self.data_bit_width) }

    /// The data bits as `0`/`1` text, eg: `101001` for the continuation byte `0xA9`.
    #[must_use]
    pub fn data_bits(&self) -> InlineString {
        let binary = format_radix(self.value, Radix::Binary);
        binary[BITS_PER_BYTE - usize::from(self.data_bit_width)..].into()
    }

    #[must_use]
    pub fn binary(&self) -> InlineString { format_radix(self.value, Radix::Binary) }

    #[must_use]
    pub fn hex(&self) -> InlineString { format_radix(self.value, Radix::Hexadecimal) }
}

/// Mask with the low `width` bits set. `width` is at most 7.
pub(crate) fn low_mask(width: u8) -> u8 { (1_u8 << width) - 1 }
