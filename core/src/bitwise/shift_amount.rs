// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{CommonError, CommonErrorType, CommonResult};

/// How far a shift moves the bits, 1..=7. Shifting a byte by 0 or by 8 or more is not
/// something the calculator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftAmount(u8);

impl ShiftAmount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// # Errors
    ///
    /// Returns [`CommonErrorType::ValueOutOfRange`] outside 1..=7.
    pub fn try_new(amount: u8) -> CommonResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&amount) {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                &format!(
                    "Shift amount {amount} is out of range {}..={}",
                    Self::MIN,
                    Self::MAX
                ),
            );
        }
        Ok(Self(amount))
    }

    /// Pin `amount` to 1..=7, the way a slider would.
    #[must_use]
    pub fn clamped(amount: u8) -> Self { Self(amount.clamp(Self::MIN, Self::MAX)) }

    #[must_use]
    pub fn value(self) -> u8 { self.0 }
}

impl Default for ShiftAmount {
    fn default() -> Self { Self(Self::MIN) }
}

impl TryFrom<u8> for ShiftAmount {
    type Error = miette::Report;

    fn try_from(amount: u8) -> CommonResult<Self> { Self::try_new(amount) }
}

impl Display for ShiftAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(0, false)]
    #[test_case(1, true)]
    #[test_case(7, true)]
    #[test_case(8, false)]
    fn test_try_new(amount: u8, is_ok: bool) {
        assert_eq2!(ShiftAmount::try_new(amount).is_ok(), is_ok);
    }

    #[test_case(0, 1)]
    #[test_case(4, 4)]
    #[test_case(200, 7)]
    fn test_clamped(amount: u8, expected: u8) {
        assert_eq2!(ShiftAmount::clamped(amount).value(), expected);
    }
}
