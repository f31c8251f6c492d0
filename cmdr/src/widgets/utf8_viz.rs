// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use byteviz_core::{CommonError, CommonErrorType, CommonResult, EXAMPLE_CHARS, EncodedByte,
                   EncodingPattern, decode_data_bits, encode_utf8, first_code_point,
                   format_code_point, parse_radix};

use super::{Widget, require_argument, split_command, unknown_action};
use crate::Palette;

pub const DEFAULT_CHAR: char = 'A';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8VizState {
    pub code_point: u32,
}

impl Default for Utf8VizState {
    fn default() -> Self {
        Self {
            code_point: u32::from(DEFAULT_CHAR),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8VizAction {
    SetCodePoint(u32),
}

/// A code point typed as `U+4E2D`, `0x4E2D`, or plain hex digits.
///
/// # Errors
///
/// Returns [`CommonErrorType::ParsingError`] if the text is not hex.
pub fn parse_code_point(text: &str) -> CommonResult<u32> {
    let text = text.trim();
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).or_else(|_| {
        CommonError::new_error_result(
            CommonErrorType::ParsingError,
            &format!("'{text}' is not a code point, expected eg: U+00E9"),
        )
    })
}

impl Widget for Utf8VizState {
    type Action = Utf8VizAction;

    const NAME: &'static str = "utf8";

    const ACTIONS_HELP: &'static str = "  char <text>   show the first character of the text\n  cp <U+XXXX>   show a code point, eg: U+1F389\n  example <1-4> pick one of the example characters";

    fn parse_action(line: &str) -> CommonResult<Self::Action> {
        let (command, argument) = split_command(line);
        match command.as_str() {
            "char" | "c" => {
                let argument = require_argument(&command, argument)?;
                let Some(code_point) = first_code_point(argument) else {
                    return unknown_action(&command, Self::NAME);
                };
                Ok(Utf8VizAction::SetCodePoint(code_point))
            }
            "cp" => Ok(Utf8VizAction::SetCodePoint(parse_code_point(require_argument(
                &command, argument,
            )?)?)),
            "example" | "ex" => {
                let number = parse_radix(require_argument(&command, argument)?)?;
                match EXAMPLE_CHARS.get(usize::from(number).wrapping_sub(1)) {
                    Some(example) => Ok(Utf8VizAction::SetCodePoint(u32::from(example.ch))),
                    None => CommonError::new_error_result(
                        CommonErrorType::ValueOutOfRange,
                        &format!(
                            "Example {number} does not exist, pick 1 to {}",
                            EXAMPLE_CHARS.len()
                        ),
                    ),
                }
            }
            _ => unknown_action(&command, Self::NAME),
        }
    }

    fn reduce(&self, action: &Self::Action) -> Self {
        match *action {
            Utf8VizAction::SetCodePoint(code_point) => Self { code_point },
        }
    }

    fn render(&self, palette: Palette) -> String {
        let sequence = encode_utf8(self.code_point);
        let mut acc = String::new();

        _ = writeln!(acc, "{}", palette.header("UTF-8 Visualizer"));

        let examples = EXAMPLE_CHARS
            .iter()
            .enumerate()
            .map(|(i, example)| {
                let text = format!("{}: {} {}", i + 1, example.ch, example.label);
                if u32::from(example.ch) == self.code_point {
                    palette.emphasis(text)
                } else {
                    palette.dim(text)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        _ = writeln!(acc, "{} {examples}", palette.dim("Examples"));
        _ = writeln!(acc);

        let ch = char::from_u32(self.code_point).unwrap_or(char::REPLACEMENT_CHARACTER);
        for (label, value) in [
            ("Character", ch.to_string()),
            ("Code Point", format_code_point(self.code_point).to_string()),
            ("Decimal", self.code_point.to_string()),
            ("Bytes", sequence.len().to_string()),
        ] {
            _ = writeln!(acc, "{} {}", palette.dim(format!("{label:<11}")), palette.emphasis(value));
        }
        _ = writeln!(acc);

        if let Some(pattern) = EncodingPattern::for_sequence(&sequence) {
            _ = writeln!(acc, "{}", palette.header(pattern.pattern));
            _ = writeln!(acc, "{}", palette.dim(pattern.description));
            _ = writeln!(acc);
        }

        for (i, byte) in sequence.iter().enumerate() {
            _ = writeln!(acc, "{}", render_byte_row(palette, i + 1, byte));
        }
        _ = writeln!(acc);

        let data_bits = sequence
            .iter()
            .map(|byte| byte.data_bits().to_string())
            .collect::<Vec<_>>();
        _ = writeln!(
            acc,
            "{} {}",
            palette.dim("Data bits:"),
            palette.emphasis(data_bits.join(" "))
        );
        let decoded = decode_data_bits(sequence.as_slice());
        _ = writeln!(
            acc,
            "{} 0b{} = {decoded} = {}",
            palette.dim("         ="),
            data_bits.concat(),
            palette.accent(format_code_point(decoded))
        );

        acc
    }
}

/// Eg: `Byte 1  1110|0100  0xE4  228  lead`, prefix bits and data bits painted apart.
fn render_byte_row(palette: Palette, number: usize, byte: &EncodedByte) -> String {
    let binary = byte.binary();
    let (prefix, data) = binary.split_at(usize::from(byte.prefix_width()));
    format!(
        "{label}  {prefix}{separator}{data}  0x{hex}  {decimal:>3}  {role}",
        label = palette.dim(format!("Byte {number}")),
        prefix = palette.marker(prefix),
        separator = palette.dim("|"),
        data = palette.emphasis(data),
        hex = byte.hex(),
        decimal = byte.value,
        role = palette.dim(byte.role),
    )
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;
    use test_case::test_case;

    use super::*;

    #[test_case("char é", 0xE9; "char_two_byte")]
    #[test_case("c 中文", 0x4E2D; "short_alias_takes_first_char")]
    #[test_case("cp U+1F389", 0x1F389)]
    #[test_case("cp 0x41", 0x41)]
    #[test_case("cp e9", 0xE9)]
    #[test_case("example 3", 0x4E2D)]
    #[test_case("ex 4", 0x1F389)]
    fn test_parse_action(line: &str, expected: u32) {
        assert_eq2!(
            Utf8VizState::parse_action(line).unwrap(),
            Utf8VizAction::SetCodePoint(expected)
        );
    }

    #[test_case("cp U+XYZ")]
    #[test_case("example 0")]
    #[test_case("example 5")]
    #[test_case("char")]
    fn test_parse_action_errors(line: &str) {
        assert!(Utf8VizState::parse_action(line).is_err());
    }

    #[test]
    fn test_reduce_replaces_code_point() {
        let state = Utf8VizState::default().reduce(&Utf8VizAction::SetCodePoint(0xE9));
        assert_eq2!(state.code_point, 0xE9);
    }

    #[test]
    fn test_render_ascii() {
        let it = Utf8VizState::default().render(Palette::plain());
        assert!(it.contains("Code Point  U+0041"), "{it}");
        assert!(it.contains("Bytes       1"), "{it}");
        assert!(it.contains("0xxxxxxx"), "{it}");
        assert!(it.contains("Single byte ASCII"), "{it}");
        assert!(it.contains("Byte 1  0|1000001  0x41   65  ascii"), "{it}");
    }

    #[test]
    fn test_render_three_bytes() {
        let it = Utf8VizState { code_point: 0x4E2D }.render(Palette::plain());
        assert!(it.contains("Character   中"), "{it}");
        assert!(it.contains("Decimal     20013"), "{it}");
        assert!(it.contains("1110xxxx 10xxxxxx 10xxxxxx"), "{it}");
        assert!(it.contains("3-byte sequence: 16 data bits"), "{it}");
        assert!(it.contains("Byte 1  1110|0100  0xE4  228  lead"), "{it}");
        assert!(it.contains("Byte 2  10|111000  0xB8  184  continuation"), "{it}");
        assert!(it.contains("Byte 3  10|101101  0xAD  173  continuation"), "{it}");
        assert!(it.contains("Data bits: 0100 111000 101101"), "{it}");
        assert!(it.contains("= 0b0100111000101101 = 20013 = U+4E2D"), "{it}");
    }

    #[test]
    fn test_render_surrogate_does_not_panic() {
        let it = Utf8VizState { code_point: 0xD800 }.render(Palette::plain());
        assert!(it.contains("U+D800"), "{it}");
        assert!(it.contains('\u{FFFD}'), "{it}");
    }

    #[test]
    fn test_render_two_bytes_shows_decimals() {
        let it = Utf8VizState { code_point: 0xE9 }.render(Palette::plain());
        assert!(it.contains("Byte 1  110|00011  0xC3  195  lead"), "{it}");
        assert!(it.contains("Byte 2  10|101001  0xA9  169  continuation"), "{it}");
        assert!(it.contains("= 0b00011101001 = 233 = U+00E9"), "{it}");
    }
}
