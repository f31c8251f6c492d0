// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CommonError, CommonErrorType, CommonResult};

/// Number of bits in a byte, and the length of every [`BitVector`].
pub const BITS_PER_BYTE: usize = 8;

/// The place value of each column of a [`BitVector`], most significant first. These are
/// the labels printed above the bits by the byte toggler.
pub const BIT_PLACE_VALUES: [u8; BITS_PER_BYTE] = [128, 64, 32, 16, 8, 4, 2, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool { self == Bit::One }

    #[must_use]
    pub fn as_u8(self) -> u8 { u8::from(self.is_set()) }
}

impl From<bool> for Bit {
    fn from(is_set: bool) -> Self { if is_set { Bit::One } else { Bit::Zero } }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.as_u8()) }
}

/// Position of a bit in a [`BitVector`]: 0 is the most significant bit, 7 the least.
///
/// Note that this is the *column* index the widgets use, not the bit's weight. Index 0
/// has a place value of 128, index 7 a place value of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitIndex(u8);

impl BitIndex {
    pub const MAX: u8 = 7;

    /// # Errors
    ///
    /// Returns [`CommonErrorType::ValueOutOfRange`] if `index` is greater than 7.
    pub fn try_new(index: u8) -> CommonResult<Self> {
        if index > Self::MAX {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                &format!("Bit index {index} is out of range 0..={}", Self::MAX),
            );
        }
        Ok(Self(index))
    }

    #[must_use]
    pub fn as_usize(self) -> usize { usize::from(self.0) }

    #[must_use]
    pub fn as_u8(self) -> u8 { self.0 }

    /// The weight of this column, eg: index 0 is 128.
    #[must_use]
    pub fn place_value(self) -> u8 { BIT_PLACE_VALUES[self.as_usize()] }

    /// All eight indices, most significant first.
    pub fn all() -> impl Iterator<Item = BitIndex> { (0..=Self::MAX).map(BitIndex) }
}

impl TryFrom<u8> for BitIndex {
    type Error = miette::Report;

    fn try_from(index: u8) -> CommonResult<Self> { Self::try_new(index) }
}

/// Exactly 8 bits, most significant first. Built with [`to_bits`], turned back into a
/// byte with [`from_bits`].
///
/// A [`BitVector`] is a value. [`BitVector::toggled`] hands back a new vector rather
/// than changing this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitVector {
    bits: [Bit; BITS_PER_BYTE],
}

impl BitVector {
    #[must_use]
    pub fn get(&self, index: BitIndex) -> Bit { self.bits[index.as_usize()] }

    /// Copy of this vector with the bit at `index` inverted.
    #[must_use]
    pub fn toggled(&self, index: BitIndex) -> Self {
        let mut bits = self.bits;
        bits[index.as_usize()] = bits[index.as_usize()].flipped();
        Self { bits }
    }

    #[must_use]
    pub fn as_array(&self) -> &[Bit; BITS_PER_BYTE] { &self.bits }

    pub fn iter(&self) -> std::slice::Iter<'_, Bit> { self.bits.iter() }

    #[must_use]
    pub fn count_ones(&self) -> usize { self.bits.iter().filter(|bit| bit.is_set()).count() }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = &'a Bit;
    type IntoIter = std::slice::Iter<'a, Bit>;

    fn into_iter(self) -> Self::IntoIter { self.bits.iter() }
}

/// Renders as 8 characters of `0` and `1`, eg: `01000001`.
impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl From<u8> for BitVector {
    fn from(value: u8) -> Self { to_bits(value) }
}

impl From<BitVector> for u8 {
    fn from(bits: BitVector) -> Self { from_bits(bits) }
}

/// Bit `i` (0 is the most significant) is `(value >> (7 - i)) & 1`.
#[must_use]
pub fn to_bits(value: u8) -> BitVector {
    let mut bits = [Bit::Zero; BITS_PER_BYTE];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = Bit::from((value >> (BITS_PER_BYTE - 1 - i)) & 1 == 1);
    }
    BitVector { bits }
}

/// Sum of `bit[i] * 2^(7 - i)`. Exact inverse of [`to_bits`].
#[must_use]
pub fn from_bits(bits: BitVector) -> u8 {
    bits.bits
        .iter()
        .fold(0_u8, |acc, bit| (acc << 1) | bit.as_u8())
}

/// Derive a new byte from `value` with the bit at `index` inverted.
#[must_use]
pub fn toggle_bit(value: u8, index: BitIndex) -> u8 {
    from_bits(to_bits(value).toggled(index))
}
