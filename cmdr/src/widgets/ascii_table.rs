// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Write as _, str::FromStr};

use byteviz_core::{AsciiCategory, AsciiCode, AsciiCodeDetail, AsciiFilter, CommonError,
                   CommonErrorType, CommonResult, display_name, filtered_codes,
                   parse_radix};
use strum::IntoEnumIterator;

use super::{Widget, require_argument, split_command, unknown_action};
use crate::Palette;

/// Cells per row of the table grid.
const CELLS_PER_ROW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiTableState {
    pub filter: AsciiFilter,
    /// Stays selected even when the filter hides its cell.
    pub selected: AsciiCode,
}

impl Default for AsciiTableState {
    fn default() -> Self {
        Self {
            filter: AsciiFilter::default(),
            selected: AsciiCode::CAPITAL_A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsciiTableAction {
    Select(AsciiCode),
    SetFilter(AsciiFilter),
}

/// # Errors
///
/// Returns [`CommonErrorType::ParsingError`] unless `text` is `all`, `control`, or
/// `printable` (any case).
pub fn parse_ascii_filter(text: &str) -> CommonResult<AsciiFilter> {
    AsciiFilter::from_str(text.trim()).or_else(|_| {
        CommonError::new_error_result(
            CommonErrorType::ParsingError,
            &format!("Unknown filter '{text}', expected one of: all, control, printable"),
        )
    })
}

impl Widget for AsciiTableState {
    type Action = AsciiTableAction;

    const NAME: &'static str = "ascii";

    const ACTIONS_HELP: &'static str = "  select <code> show the details of a code, eg: 65, 0x41\n  filter <name> all, control, or printable";

    fn parse_action(line: &str) -> CommonResult<Self::Action> {
        let (command, argument) = split_command(line);
        match command.as_str() {
            "select" | "sel" => {
                let value = parse_radix(require_argument(&command, argument)?)?;
                Ok(AsciiTableAction::Select(AsciiCode::try_new(value)?))
            }
            "filter" | "f" => Ok(AsciiTableAction::SetFilter(parse_ascii_filter(
                require_argument(&command, argument)?,
            )?)),
            _ => unknown_action(&command, Self::NAME),
        }
    }

    fn reduce(&self, action: &Self::Action) -> Self {
        match *action {
            AsciiTableAction::Select(selected) => Self { selected, ..*self },
            AsciiTableAction::SetFilter(filter) => Self { filter, ..*self },
        }
    }

    fn render(&self, palette: Palette) -> String {
        let mut acc = String::new();

        _ = writeln!(acc, "{}", palette.header("ASCII Table"));
        _ = writeln!(acc, "{} {}", palette.dim("Filter:"), self.render_filter_selector(palette));
        _ = writeln!(acc);
        _ = write!(acc, "{}", render_detail(palette, &AsciiCodeDetail::new(self.selected)));
        _ = writeln!(acc);

        for row in filtered_codes(self.filter).chunks(CELLS_PER_ROW) {
            let cells = row
                .iter()
                .map(|code| self.render_cell(palette, *code))
                .collect::<Vec<_>>()
                .join(" ");
            _ = writeln!(acc, "{}", cells.trim_end());
        }
        _ = writeln!(acc);

        let legend = AsciiCategory::iter()
            .map(|category| paint_category(palette, category, format!("● {category}")))
            .collect::<Vec<_>>()
            .join("  ");
        _ = writeln!(acc, "{legend}");

        acc
    }
}

impl AsciiTableState {
    fn render_filter_selector(&self, palette: Palette) -> String {
        AsciiFilter::iter()
            .map(|filter| {
                if filter == self.filter {
                    palette.emphasis(format!("[{filter}]"))
                } else {
                    palette.dim(format!(" {filter} "))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Eg: `  65 A  `, with a `>` in front of the selected code.
    fn render_cell(&self, palette: Palette, code: AsciiCode) -> String {
        let is_selected = code == self.selected;
        let marker = if is_selected { '>' } else { ' ' };
        let text = format!("{marker}{:>3} {:<3}", code.value(), display_name(code).as_str());
        if is_selected {
            palette.accent(text)
        } else {
            paint_category(palette, byteviz_core::classify(code), text)
        }
    }
}

fn paint_category(palette: Palette, category: AsciiCategory, text: String) -> String {
    match category {
        AsciiCategory::Control => palette.dim(text),
        AsciiCategory::Printable => palette.emphasis(text),
        AsciiCategory::Delete => palette.error(text),
    }
}

fn render_detail(palette: Palette, detail: &AsciiCodeDetail) -> String {
    let mut acc = String::new();
    _ = writeln!(
        acc,
        "{} {}",
        palette.accent(&detail.name),
        palette.dim(format!("({})", detail.category))
    );
    for (label, value) in [
        ("Decimal", &detail.decimal),
        ("Hex", &detail.hex),
        ("Binary", &detail.binary),
        ("Octal", &detail.octal),
    ] {
        _ = writeln!(acc, "  {} {}", palette.dim(format!("{label:<8}")), value);
    }
    acc
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;
    use test_case::test_case;

    use super::*;

    fn code(it: u8) -> AsciiCode { AsciiCode::try_new(it).unwrap() }

    #[test]
    fn test_default_selects_letter_a() {
        let it = AsciiTableState::default();
        assert_eq2!(it.selected.value(), 65);
        assert_eq2!(it.filter, AsciiFilter::All);
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let state = AsciiTableState::default()
            .reduce(&AsciiTableAction::SetFilter(AsciiFilter::Control));
        assert_eq2!(state.filter, AsciiFilter::Control);
        assert_eq2!(state.selected.value(), 65);
    }

    #[test_case("select 0x7F", AsciiTableAction::Select(AsciiCode::DELETE))]
    #[test_case("sel 32", AsciiTableAction::Select(AsciiCode::SPACE))]
    #[test_case("filter Printable", AsciiTableAction::SetFilter(AsciiFilter::Printable))]
    #[test_case("f control", AsciiTableAction::SetFilter(AsciiFilter::Control))]
    fn test_parse_action(line: &str, expected: AsciiTableAction) {
        assert_eq2!(AsciiTableState::parse_action(line).unwrap(), expected);
    }

    #[test_case("select 128")]
    #[test_case("filter extended")]
    #[test_case("select")]
    fn test_parse_action_errors(line: &str) {
        assert!(AsciiTableState::parse_action(line).is_err());
    }

    #[test]
    fn test_render_all() {
        let it = AsciiTableState::default().render(Palette::plain());
        assert!(it.contains("[All (0-127)]"), "{it}");
        assert!(it.contains("A (Printable)"), "{it}");
        assert!(it.contains("  Hex      0x41"), "{it}");
        assert!(it.contains("  Binary   0b01000001"), "{it}");
        assert!(it.contains("  Octal    0o101"), "{it}");
        assert!(it.contains("> 65 A"), "{it}");
        assert!(it.contains("  0 NUL"), "{it}");
        assert!(it.contains("127 DEL"), "{it}");
        assert!(it.contains("● Control  ● Printable  ● DEL"), "{it}");
    }

    #[test]
    fn test_render_control_rows_only() {
        let state = AsciiTableState::default()
            .reduce(&AsciiTableAction::SetFilter(AsciiFilter::Control))
            .reduce(&AsciiTableAction::Select(code(10)));
        let it = state.render(Palette::plain());
        assert!(it.contains("> 10 LF"), "{it}");
        assert!(it.contains(" 31 US"), "{it}");
        assert!(!it.contains(" 32 SPC"), "{it}");
        assert!(!it.contains("127 DEL"), "{it}");
        // 32 codes, 8 per row, and every row ends with a code that is 7 mod 8.
        let row_ends: Vec<_> = it
            .lines()
            .filter_map(|line| line.split_whitespace().last())
            .filter(|last| ["BEL", "SI", "ETB", "US"].contains(last))
            .collect();
        assert_eq2!(row_ends, vec!["BEL", "SI", "ETB", "US"]);
    }
}
