// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::{CommonError, CommonErrorType, CommonResult, TinyInlineString};

/// Standard mnemonics for the control codes 0..=31, in code order.
pub const CONTROL_CODE_NAMES: [&str; 32] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", //
    "BS", "TAB", "LF", "VT", "FF", "CR", "SO", "SI", //
    "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", //
    "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US",
];

pub const SPACE_NAME: &str = "SPC";
pub const DELETE_NAME: &str = "DEL";

/// A 7-bit ASCII code, 0..=127.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AsciiCode(u8);

impl AsciiCode {
    pub const MAX: u8 = 127;
    pub const SPACE: AsciiCode = AsciiCode(32);
    pub const CAPITAL_A: AsciiCode = AsciiCode(65);
    pub const DELETE: AsciiCode = AsciiCode(127);

    /// # Errors
    ///
    /// Returns [`CommonErrorType::ValueOutOfRange`] for codes above 127.
    pub fn try_new(code: u8) -> CommonResult<Self> {
        if code > Self::MAX {
            return CommonError::new_error_result(
                CommonErrorType::ValueOutOfRange,
                &format!("{code} is not a 7-bit ASCII code (0..={})", Self::MAX),
            );
        }
        Ok(Self(code))
    }

    #[must_use]
    pub fn value(self) -> u8 { self.0 }

    /// All 128 codes in ascending order.
    pub fn all() -> impl Iterator<Item = AsciiCode> { (0..=Self::MAX).map(AsciiCode) }
}

impl TryFrom<u8> for AsciiCode {
    type Error = miette::Report;

    fn try_from(code: u8) -> CommonResult<Self> { Self::try_new(code) }
}

impl From<AsciiCode> for u8 {
    fn from(code: AsciiCode) -> Self { code.0 }
}

impl Display for AsciiCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
pub enum AsciiCategory {
    #[strum(to_string = "Control")]
    Control,
    #[strum(to_string = "Printable")]
    Printable,
    #[strum(to_string = "DEL")]
    Delete,
}

/// Below 32 is [`AsciiCategory::Control`], 127 is [`AsciiCategory::Delete`], everything
/// else (including space) is [`AsciiCategory::Printable`].
#[must_use]
pub fn classify(code: AsciiCode) -> AsciiCategory {
    match code.value() {
        0..=31 => AsciiCategory::Control,
        127 => AsciiCategory::Delete,
        _ => AsciiCategory::Printable,
    }
}

/// The label shown in a table cell:
/// - control codes use [`CONTROL_CODE_NAMES`],
/// - space is [`SPACE_NAME`] so that it doesn't look like an empty cell,
/// - 127 is [`DELETE_NAME`],
/// - everything else is the character itself.
#[must_use]
pub fn display_name(code: AsciiCode) -> TinyInlineString {
    match code.value() {
        it @ 0..=31 => CONTROL_CODE_NAMES[usize::from(it)].into(),
        32 => SPACE_NAME.into(),
        127 => DELETE_NAME.into(),
        it => {
            let mut acc = TinyInlineString::new();
            acc.push(char::from(it));
            acc
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn code(it: u8) -> AsciiCode { AsciiCode::try_new(it).unwrap() }

    #[test_case(0, AsciiCategory::Control, "NUL")]
    #[test_case(9, AsciiCategory::Control, "TAB")]
    #[test_case(10, AsciiCategory::Control, "LF")]
    #[test_case(27, AsciiCategory::Control, "ESC")]
    #[test_case(31, AsciiCategory::Control, "US")]
    #[test_case(32, AsciiCategory::Printable, "SPC")]
    #[test_case(48, AsciiCategory::Printable, "0")]
    #[test_case(65, AsciiCategory::Printable, "A")]
    #[test_case(126, AsciiCategory::Printable, "~")]
    #[test_case(127, AsciiCategory::Delete, "DEL")]
    fn test_classify_and_display_name(
        value: u8,
        expected_category: AsciiCategory,
        expected_name: &str,
    ) {
        assert_eq2!(classify(code(value)), expected_category);
        assert_eq2!(display_name(code(value)).as_str(), expected_name);
    }

    #[test]
    fn test_every_code_has_a_non_empty_name() {
        for it in AsciiCode::all() {
            assert!(!display_name(it).is_empty(), "code {it}");
        }
        assert_eq2!(AsciiCode::all().count(), 128);
    }

    #[test]
    fn test_extended_codes_are_rejected() {
        assert!(AsciiCode::try_new(127).is_ok());
        let report = AsciiCode::try_new(128).unwrap_err();
        assert_eq2!(
            CommonError::error_type_of(&report),
            Some(CommonErrorType::ValueOutOfRange)
        );
    }
}
