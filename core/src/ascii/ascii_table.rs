// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumIter, EnumString};

use super::{AsciiCategory, AsciiCode, classify, display_name};
use crate::{InlineString, Radix, TinyInlineString, format_radix_prefixed};

/// Which rows of the table to show. There is no filter for DEL alone, it only shows up
/// under [`AsciiFilter::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AsciiFilter {
    #[default]
    #[strum(serialize = "all", to_string = "All (0-127)")]
    All,
    #[strum(serialize = "control", to_string = "Control (0-31)")]
    Control,
    #[strum(serialize = "printable", to_string = "Printable (32-126)")]
    Printable,
}

impl AsciiFilter {
    #[must_use]
    pub fn matches(self, code: AsciiCode) -> bool {
        match self {
            AsciiFilter::All => true,
            AsciiFilter::Control => classify(code) == AsciiCategory::Control,
            AsciiFilter::Printable => classify(code) == AsciiCategory::Printable,
        }
    }
}

/// Table rows for `filter`, ascending.
#[must_use]
pub fn filtered_codes(filter: AsciiFilter) -> Vec<AsciiCode> {
    AsciiCode::all().filter(|it| filter.matches(*it)).collect()
}

/// The detail panel shown for the selected code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiCodeDetail {
    pub code: AsciiCode,
    pub name: TinyInlineString,
    pub category: AsciiCategory,
    pub decimal: InlineString,
    pub hex: InlineString,
    pub binary: InlineString,
    pub octal: InlineString,
}

impl AsciiCodeDetail {
    #[must_use]
    pub fn new(code: AsciiCode) -> Self {
        let value = code.value();
        Self {
            code,
            name: display_name(code),
            category: classify(code),
            decimal: format_radix_prefixed(value, Radix::Decimal),
            hex: format_radix_prefixed(value, Radix::Hexadecimal),
            binary: format_radix_prefixed(value, Radix::Binary),
            octal: format_radix_prefixed(value, Radix::Octal),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(AsciiFilter::All, 128)]
    #[test_case(AsciiFilter::Control, 32)]
    #[test_case(AsciiFilter::Printable, 95)]
    fn test_filtered_row_counts(filter: AsciiFilter, expected: usize) {
        assert_eq2!(filtered_codes(filter).len(), expected);
    }

    #[test]
    fn test_printable_rows_span_space_to_tilde() {
        let rows = filtered_codes(AsciiFilter::Printable);
        assert_eq2!(rows.first().map(|it| it.value()), Some(32));
        assert_eq2!(rows.last().map(|it| it.value()), Some(126));
        assert!(!rows.contains(&AsciiCode::DELETE));
    }

    #[test]
    fn test_filter_parses_case_insensitively() {
        assert_eq2!(AsciiFilter::from_str("Control").unwrap(), AsciiFilter::Control);
        assert_eq2!(AsciiFilter::from_str("all").unwrap(), AsciiFilter::All);
        assert!(AsciiFilter::from_str("extended").is_err());
        assert_eq2!(AsciiFilter::Printable.to_string(), "Printable (32-126)");
    }

    #[test]
    fn test_detail_for_letter_a() {
        let detail = AsciiCodeDetail::new(AsciiCode::try_new(65).unwrap());
        assert_eq2!(detail.name.as_str(), "A");
        assert_eq2!(detail.category, AsciiCategory::Printable);
        assert_eq2!(detail.decimal.as_str(), "65");
        assert_eq2!(detail.hex.as_str(), "0x41");
        assert_eq2!(detail.binary.as_str(), "0b01000001");
        assert_eq2!(detail.octal.as_str(), "0o101");
    }
}
