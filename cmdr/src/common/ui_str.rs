// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use byteviz_core::CommonError;

use super::Palette;

pub const PROMPT: &str = "> ";

#[must_use]
pub fn unrecoverable_error_message(palette: Palette, report: &miette::Report) -> String {
    format!(
        "{a}:\n{b:?}",
        a = palette.error("Could not run byteviz due to the following problem"),
        b = report
    )
}

/// The human readable part of `report`: the message of a [`CommonError`], or the
/// report's own text for anything else.
#[must_use]
pub fn error_message_of(report: &miette::Report) -> String {
    match report.downcast_ref::<CommonError>() {
        Some(CommonError {
            error_message: Some(message),
            ..
        }) => message.clone(),
        _ => report.to_string(),
    }
}

#[must_use]
pub fn action_error_message(palette: Palette, report: &miette::Report) -> String {
    format!("{} {}", palette.error("✗"), error_message_of(report))
}

#[must_use]
pub fn session_help_message(palette: Palette, widget_name: &str, widget_help: &str) -> String {
    format!(
        "{header}\n{widget_help}\n  help          show this message\n  quit          leave the session",
        header = palette.header(format!("Commands for the {widget_name} widget:"))
    )
}

#[must_use]
pub fn goodbye_message(palette: Palette) -> String { palette.dim("Goodbye 👋") }

#[cfg(test)]
mod tests {
    use byteviz_core::{CommonErrorType, assert_eq2};

    use super::*;

    #[test]
    fn test_action_error_message_shows_only_the_message() {
        let report = CommonError::new_error_result::<()>(
            CommonErrorType::ParsingError,
            "Unknown operator 'nand'",
        )
        .unwrap_err();
        assert_eq2!(
            action_error_message(Palette::plain(), &report),
            "✗ Unknown operator 'nand'"
        );

        let report = miette::miette!("plain report");
        assert_eq2!(action_error_message(Palette::plain(), &report), "✗ plain report");
    }
}
