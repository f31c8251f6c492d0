// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use super::{ByteRole, EncodedByte, low_mask};
use crate::{DEFAULT_CHAR_STORAGE_SIZE, InlineString, inline_string};

/// Largest code point a 1, 2, and 3 byte sequence can hold.
pub const MAX_ONE_BYTE: u32 = 0x7F;
pub const MAX_TWO_BYTE: u32 = 0x7FF;
pub const MAX_THREE_BYTE: u32 = 0xFFFF;

const CONTINUATION_DATA_BITS: u8 = 6;
const CONTINUATION_PREFIX: u8 = 0b1000_0000;

/// The 1 to 4 bytes that encode a single code point, lead byte first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSequence {
    pub code_point: u32,
    bytes: SmallVec<[EncodedByte; DEFAULT_CHAR_STORAGE_SIZE]>,
}

impl EncodedSequence {
    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    /// Always `false`, every code point encodes to at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, EncodedByte> { self.bytes.iter() }

    #[must_use]
    pub fn as_slice(&self) -> &[EncodedByte] { &self.bytes }

    /// Just the byte values, eg: `[0xC3, 0xA9]` for `é`.
    #[must_use]
    pub fn values(&self) -> SmallVec<[u8; DEFAULT_CHAR_STORAGE_SIZE]> {
        self.bytes.iter().map(|it| it.value).collect()
    }

    /// Total number of data bits across all the bytes: 7, 11, 16, or 21.
    #[must_use]
    pub fn data_bit_count(&self) -> u8 {
        self.bytes.iter().map(|it| it.data_bit_width).sum()
    }
}

impl<'a> IntoIterator for &'a EncodedSequence {
    type Item = &'a EncodedByte;
    type IntoIter = std::slice::Iter<'a, EncodedByte>;

    fn into_iter(self) -> Self::IntoIter { self.bytes.iter() }
}

/// Encode `code_point` as UTF-8.
///
/// | Range               | Bytes | Lead prefix |
/// | ------------------- | ----- | ----------- |
/// | `0..=0x7F`          | 1     | `0`         |
/// | `0x80..=0x7FF`      | 2     | `110`       |
/// | `0x800..=0xFFFF`    | 3     | `1110`      |
/// | `0x10000..`         | 4     | `11110`     |
///
/// Every byte after the lead is a continuation byte `10xxxxxx`. Surrogates and values
/// above `0x10FFFF` are not rejected, they are encoded with the same bit layout. Data
/// bits above the 21 a 4 byte sequence can carry are dropped.
///
/// ```
/// use byteviz_core::encode_utf8;
///
/// assert_eq!(encode_utf8(0xE9).values().as_slice(), &[0xC3, 0xA9]);
/// assert_eq!(encode_utf8(0x1F389).values().as_slice(), &[0xF0, 0x9F, 0x8E, 0x89]);
/// ```
#[must_use]
pub fn encode_utf8(code_point: u32) -> EncodedSequence {
    let byte_count = byte_count_for(code_point);
    let mut bytes = SmallVec::new();

    if byte_count == 1 {
        bytes.push(EncodedByte {
            value: data_slice(code_point, 0, 7),
            role: ByteRole::Ascii,
            data_bit_width: 7,
        });
        return EncodedSequence { code_point, bytes };
    }

    // 2 bytes: 5 data bits in the lead, 3 bytes: 4, 4 bytes: 3.
    let lead_data_bits = 7 - byte_count;
    let lead_prefix = !low_mask(lead_data_bits + 1);
    let continuation_count = byte_count - 1;

    bytes.push(EncodedByte {
        value: lead_prefix
            | data_slice(
                code_point,
                CONTINUATION_DATA_BITS * continuation_count,
                lead_data_bits,
            ),
        role: ByteRole::Lead,
        data_bit_width: lead_data_bits,
    });

    for remaining in (0..continuation_count).rev() {
        bytes.push(EncodedByte {
            value: CONTINUATION_PREFIX
                | data_slice(
                    code_point,
                    CONTINUATION_DATA_BITS * remaining,
                    CONTINUATION_DATA_BITS,
                ),
            role: ByteRole::Continuation,
            data_bit_width: CONTINUATION_DATA_BITS,
        });
    }

    EncodedSequence { code_point, bytes }
}

fn byte_count_for(code_point: u32) -> u8 {
    if code_point <= MAX_ONE_BYTE {
        1
    } else if code_point <= MAX_TWO_BYTE {
        2
    } else if code_point <= MAX_THREE_BYTE {
        3
    } else {
        4
    }
}

/// `width` bits of `code_point` starting `shift` bits from the bottom.
fn data_slice(code_point: u32, shift: u8, width: u8) -> u8 {
    let masked = (code_point >> shift) & u32::from(low_mask(width));
    // The mask keeps at most 7 bits, which always fit.
    u8::try_from(masked).unwrap_or_default()
}

/// Concatenate the data bits of every byte, lead byte first. For any sequence made by
/// [`encode_utf8`] with a code point up to `0x1FFFFF` this gives the code point back.
#[must_use]
pub fn decode_data_bits(bytes: &[EncodedByte]) -> u32 {
    bytes.iter().fold(0, |acc, byte| {
        (acc << byte.data_bit_width) | u32::from(byte.data_value())
    })
}

/// `U+` and at least 4 uppercase hex digits, eg: `U+00E9`, `U+1F389`.
#[must_use]
pub fn format_code_point(code_point: u32) -> InlineString {
    inline_string!("U+{code_point:04X}")
}

/// The first code point of `text`, or `None` if it is empty. The widget shows one
/// character at a time and ignores the rest of what was typed.
#[must_use]
pub fn first_code_point(text: &str) -> Option<u32> { text.chars().next().map(u32::from) }
