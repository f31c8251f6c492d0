// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter};

use crate::{CommonError, CommonErrorType, CommonResult, InlineString, inline_string};

/// The number bases the widgets print a byte in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Radix {
    #[strum(to_string = "Binary")]
    Binary,
    #[strum(to_string = "Octal")]
    Octal,
    #[strum(to_string = "Decimal")]
    Decimal,
    #[strum(to_string = "Hex")]
    Hexadecimal,
}

impl Radix {
    #[must_use]
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Fixed zero padded width of a byte in this radix. Decimal is not padded.
    #[must_use]
    pub fn padded_width(self) -> usize {
        match self {
            Radix::Binary => 8,
            Radix::Octal => 3,
            Radix::Decimal => 0,
            Radix::Hexadecimal => 2,
        }
    }

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Decimal => "",
            Radix::Hexadecimal => "0x",
        }
    }
}

/// Zero padded to a fixed width (8 binary, 3 octal, 2 hex), uppercase hex digits.
///
/// ```
/// use byteviz_core::{Radix, format_radix};
///
/// assert_eq!(format_radix(10, Radix::Binary).as_str(), "00001010");
/// assert_eq!(format_radix(10, Radix::Octal).as_str(), "012");
/// assert_eq!(format_radix(10, Radix::Hexadecimal).as_str(), "0A");
/// assert_eq!(format_radix(10, Radix::Decimal).as_str(), "10");
/// ```
#[must_use]
pub fn format_radix(value: u8, radix: Radix) -> InlineString {
    match radix {
        Radix::Binary => inline_string!("{value:08b}"),
        Radix::Octal => inline_string!("{value:03o}"),
        Radix::Decimal => inline_string!("{value}"),
        Radix::Hexadecimal => inline_string!("{value:02X}"),
    }
}

/// Same as [`format_radix`] with the `0b`, `0o`, `0x` prefix the widgets show.
#[must_use]
pub fn format_radix_prefixed(value: u8, radix: Radix) -> InlineString {
    inline_string!("{}{}", radix.prefix(), format_radix(value, radix))
}

/// Parse a byte typed by a user. Accepts the output of [`format_radix_prefixed`]: a
/// `0b`, `0o`, or `0x` prefix (any case) or a bare decimal number. Underscores between
/// digits are ignored, so `0b0100_0001` works.
///
/// # Errors
///
/// - [`CommonErrorType::ParsingError`] if the text is empty or has a bad digit.
/// - [`CommonErrorType::ValueOutOfRange`] if the value does not fit in a byte.
pub fn parse_radix(text: &str) -> CommonResult<u8> {
    let trimmed = text.trim();
    let (radix, digits) = split_prefix(trimmed);
    let digits: String = digits.chars().filter(|it| *it != '_').collect();

    if digits.is_empty() {
        return CommonError::new_error_result(
            CommonErrorType::ParsingError,
            &format!("No digits in '{trimmed}'"),
        );
    }

    // `from_str_radix` takes a leading `+`, which is not a digit.
    let parsed = if digits.starts_with('+') {
        None
    } else {
        u32::from_str_radix(&digits, radix.base()).ok()
    };
    let Some(value) = parsed else {
        return CommonError::new_error_result(
            CommonErrorType::ParsingError,
            &format!("'{trimmed}' is not a valid {radix} number"),
        );
    };

    u8::try_from(value).or_else(|_| {
        CommonError::new_error_result(
            CommonErrorType::ValueOutOfRange,
            &format!("{value} does not fit in a byte (0..=255)"),
        )
    })
}

fn split_prefix(text: &str) -> (Radix, &str) {
    let lowercase_prefix = text.get(..2).map(str::to_ascii_lowercase);
    match lowercase_prefix.as_deref() {
        Some("0b") => (Radix::Binary, &text[2..]),
        Some("0o") => (Radix::Octal, &text[2..]),
        Some("0x") => (Radix::Hexadecimal, &text[2..]),
        _ => (Radix::Decimal, text),
    }
}
