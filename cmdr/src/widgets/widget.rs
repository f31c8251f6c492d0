// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use byteviz_core::{Bit, BitIndex, BitVector, CommonError, CommonErrorType, CommonResult,
                   parse_radix};
use clap::ValueEnum;

use crate::Palette;

/// A widget is plain state plus a reducer and a renderer. The state is never changed in
/// place: [`Widget::reduce`] hands back the next state and the caller swaps it in. This
/// keeps every transition easy to test and replay.
pub trait Widget: Clone + Debug + PartialEq {
    type Action: Debug;

    /// Shown in the interactive session's help.
    const NAME: &'static str;

    /// One line per action, eg: `  toggle <0-7>  flip a bit`.
    const ACTIONS_HELP: &'static str;

    /// Turn one line typed in the interactive session into an action.
    ///
    /// # Errors
    ///
    /// Returns [`CommonErrorType::InvalidArguments`] for an unknown command, or the
    /// error from parsing the command's argument.
    fn parse_action(line: &str) -> CommonResult<Self::Action>;

    #[must_use]
    fn reduce(&self, action: &Self::Action) -> Self;

    fn render(&self, palette: Palette) -> String;
}

/// Which widget a subcommand or session works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WidgetKind {
    Ascii,
    #[default]
    Byte,
    Bitwise,
    Utf8,
}

/// Split `line` into a lowercase command word and the rest (trimmed).
#[must_use]
pub fn split_command(line: &str) -> (String, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command.to_ascii_lowercase(), rest.trim()),
        None => (line.to_ascii_lowercase(), ""),
    }
}

/// A bit index typed by the user, in any radix [`parse_radix`] accepts.
///
/// # Errors
///
/// Returns an error if the text is not a number or is not in `0..=7`.
pub fn parse_bit_index(text: &str) -> CommonResult<BitIndex> {
    BitIndex::try_new(parse_radix(text)?)
}

/// # Errors
///
/// Always returns [`CommonErrorType::InvalidArguments`].
pub fn unknown_action<T>(command: &str, widget_name: &str) -> CommonResult<T> {
    CommonError::new_error_result(
        CommonErrorType::InvalidArguments,
        &format!("Unknown command '{command}' for the {widget_name} widget, type `help`"),
    )
}

/// # Errors
///
/// Returns [`CommonErrorType::InvalidArguments`] if `argument` is empty.
pub fn require_argument<'a>(command: &str, argument: &'a str) -> CommonResult<&'a str> {
    if argument.is_empty() {
        return CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &format!("'{command}' needs an argument"),
        );
    }
    Ok(argument)
}

/// Render the 8 bits of `bits` as a row of cells, each painted by `paint`.
pub fn render_bit_cells(
    bits: &BitVector,
    mut paint: impl FnMut(usize, Bit) -> String,
) -> String {
    bits.iter()
        .enumerate()
        .map(|(i, bit)| format!("[{}]", paint(i, *bit)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;
    use test_case::test_case;

    use super::*;

    #[test_case("toggle 3", "toggle", "3")]
    #[test_case("  SET   0x41 ", "set", "0x41")]
    #[test_case("quit", "quit", "")]
    #[test_case("char 中 文", "char", "中 文"; "rest_keeps_inner_spaces")]
    fn test_split_command(line: &str, command: &str, rest: &str) {
        let (actual_command, actual_rest) = split_command(line);
        assert_eq2!(actual_command, command);
        assert_eq2!(actual_rest, rest);
    }

    #[test]
    fn test_parse_bit_index() {
        assert_eq2!(parse_bit_index("7").unwrap().as_u8(), 7);
        assert_eq2!(parse_bit_index("0b11").unwrap().as_u8(), 3);
        assert!(parse_bit_index("8").is_err());
        assert!(parse_bit_index("x").is_err());
    }

    #[test]
    fn test_unknown_action_is_invalid_arguments() {
        let report = unknown_action::<()>("fly", "byte").unwrap_err();
        assert_eq2!(
            CommonError::error_type_of(&report),
            Some(CommonErrorType::InvalidArguments)
        );
    }

    #[test]
    fn test_render_bit_cells() {
        let bits = byteviz_core::to_bits(0b1000_0001);
        let it = render_bit_cells(&bits, |_, bit| bit.to_string());
        assert_eq2!(it, "[1] [0] [0] [0] [0] [0] [0] [1]");
    }

    #[test]
    fn test_require_argument() {
        assert!(require_argument("set", "").is_err());
        assert_eq2!(require_argument("set", "1").unwrap(), "1");
    }
}
