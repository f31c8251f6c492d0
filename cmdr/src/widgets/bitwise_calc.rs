// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use byteviz_core::{BitIndex, BitSignificance, BitwiseOperator, CommonResult, ShiftAmount,
                   evaluate, parse_radix, ruby_snippet, to_bits, toggle_bit};
use strum::IntoEnumIterator;

use super::{Widget, parse_bit_index, render_bit_cells, require_argument, split_command,
            unknown_action};
use crate::Palette;

pub const DEFAULT_OPERAND_A: u8 = 0b1100_1010;
pub const DEFAULT_OPERAND_B: u8 = 0b1011_0101;

/// Width of the `A = 202` style labels in front of each row of bits.
const LABEL_WIDTH: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseCalcState {
    pub operand_a: u8,
    pub operand_b: u8,
    pub operator: BitwiseOperator,
    pub shift_amount: ShiftAmount,
}

impl Default for BitwiseCalcState {
    fn default() -> Self {
        Self {
            operand_a: DEFAULT_OPERAND_A,
            operand_b: DEFAULT_OPERAND_B,
            operator: BitwiseOperator::default(),
            shift_amount: ShiftAmount::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseCalcAction {
    SetOperandA(u8),
    SetOperandB(u8),
    ToggleOperandA(BitIndex),
    ToggleOperandB(BitIndex),
    SetOperator(BitwiseOperator),
    SetShiftAmount(ShiftAmount),
}

impl Widget for BitwiseCalcState {
    type Action = BitwiseCalcAction;

    const NAME: &'static str = "bitwise";

    const ACTIONS_HELP: &'static str = "  a <byte>      set operand A\n  b <byte>      set operand B\n  ta <0-7>      flip a bit of A\n  tb <0-7>      flip a bit of B\n  op <name>     and, or, xor, not, left, right (or &, |, ^, ~, <<, >>)\n  shift <1-7>   set the shift amount";

    fn parse_action(line: &str) -> CommonResult<Self::Action> {
        let (command, argument) = split_command(line);
        if !["a", "b", "ta", "tb", "op", "shift"].contains(&command.as_str()) {
            return unknown_action(&command, Self::NAME);
        }
        let argument = require_argument(&command, argument)?;
        match command.as_str() {
            "a" => Ok(BitwiseCalcAction::SetOperandA(parse_radix(argument)?)),
            "b" => Ok(BitwiseCalcAction::SetOperandB(parse_radix(argument)?)),
            "ta" => Ok(BitwiseCalcAction::ToggleOperandA(parse_bit_index(argument)?)),
            "tb" => Ok(BitwiseCalcAction::ToggleOperandB(parse_bit_index(argument)?)),
            "op" => Ok(BitwiseCalcAction::SetOperator(argument.parse()?)),
            _ => Ok(BitwiseCalcAction::SetShiftAmount(ShiftAmount::try_new(
                parse_radix(argument)?,
            )?)),
        }
    }

    fn reduce(&self, action: &Self::Action) -> Self {
        let mut next = *self;
        match *action {
            BitwiseCalcAction::SetOperandA(value) => next.operand_a = value,
            BitwiseCalcAction::SetOperandB(value) => next.operand_b = value,
            BitwiseCalcAction::ToggleOperandA(index) => {
                next.operand_a = toggle_bit(self.operand_a, index);
            }
            BitwiseCalcAction::ToggleOperandB(index) => {
                next.operand_b = toggle_bit(self.operand_b, index);
            }
            BitwiseCalcAction::SetOperator(operator) => next.operator = operator,
            BitwiseCalcAction::SetShiftAmount(shift_amount) => {
                next.shift_amount = shift_amount;
            }
        }
        next
    }

    fn render(&self, palette: Palette) -> String {
        let evaluation =
            evaluate(self.operand_a, self.operand_b, self.operator, self.shift_amount);
        let mut acc = String::new();

        _ = writeln!(acc, "{}", palette.header("Bitwise Calculator"));
        _ = writeln!(acc, "{}", self.render_operator_selector(palette));
        if self.operator.is_shift() {
            _ = writeln!(
                acc,
                "{} {}",
                palette.dim("Shift by:"),
                palette.emphasis(self.shift_amount)
            );
        }
        _ = writeln!(acc, "{}", palette.accent(self.operator.explanation(self.shift_amount)));
        _ = writeln!(acc);

        _ = writeln!(acc, "{}", render_operand_row(palette, "A", self.operand_a));

        let operator_line = if self.operator.is_shift() {
            format!("{} {}", self.operator.symbol(), self.shift_amount)
        } else {
            self.operator.symbol().to_string()
        };
        _ = writeln!(acc, "{}", palette.header(operator_line));

        if !self.operator.is_unary() {
            _ = writeln!(acc, "{}", render_operand_row(palette, "B", self.operand_b));
        }
        _ = writeln!(acc, "{}", palette.header("="));

        let result_cells = render_bit_cells(&to_bits(evaluation.result), |i, bit| {
            match (evaluation.significance[i], bit.is_set()) {
                (BitSignificance::Significant, _) => palette.accent(bit),
                (BitSignificance::Plain, true) => palette.emphasis(bit),
                (BitSignificance::Plain, false) => palette.dim(bit),
            }
        });
        let result_label = format!("Result = {}", evaluation.result);
        _ = writeln!(acc, "{result_label:<LABEL_WIDTH$}{result_cells}");
        _ = writeln!(acc);

        _ = writeln!(acc, "{}", palette.dim("Ruby"));
        let snippet = ruby_snippet(
            self.operand_a,
            self.operand_b,
            self.operator,
            self.shift_amount,
        );
        for line in snippet.lines() {
            _ = writeln!(acc, "  {line}");
        }

        acc
    }
}

impl BitwiseCalcState {
    fn render_operator_selector(&self, palette: Palette) -> String {
        BitwiseOperator::iter()
            .map(|operator| {
                let text = format!("{} {}", operator.symbol(), operator.label());
                if operator == self.operator {
                    palette.emphasis(format!("[{text}]"))
                } else {
                    palette.dim(format!(" {text} "))
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn render_operand_row(palette: Palette, name: &str, value: u8) -> String {
    let cells = render_bit_cells(&to_bits(value), |_, bit| {
        if bit.is_set() {
            palette.emphasis(bit)
        } else {
            palette.dim(bit)
        }
    });
    let label = format!("{name} = {value}");
    format!("{label:<LABEL_WIDTH$}{cells}")
}

#[cfg(test)]
mod tests {
    use byteviz_core::assert_eq2;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_defaults() {
        let it = BitwiseCalcState::default();
        assert_eq2!(it.operand_a, 202);
        assert_eq2!(it.operand_b, 181);
        assert_eq2!(it.operator, BitwiseOperator::And);
        assert_eq2!(it.shift_amount.value(), 1);
    }

    #[test]
    fn test_operator_change_keeps_operands() {
        let state = BitwiseCalcState::default();
        let next = state.reduce(&BitwiseCalcAction::SetOperator(BitwiseOperator::Xor));
        assert_eq2!(next.operator, BitwiseOperator::Xor);
        assert_eq2!(next.operand_a, state.operand_a);
        assert_eq2!(next.operand_b, state.operand_b);
        assert_eq2!(next.shift_amount, state.shift_amount);
    }

    #[test]
    fn test_toggle_operands() {
        let index = BitIndex::try_new(0).unwrap();
        let state = BitwiseCalcState::default();
        let next = state
            .reduce(&BitwiseCalcAction::ToggleOperandA(index))
            .reduce(&BitwiseCalcAction::ToggleOperandB(index));
        assert_eq2!(next.operand_a, 202 - 128);
        assert_eq2!(next.operand_b, 181 - 128);
    }

    #[test_case("a 0x0F", BitwiseCalcAction::SetOperandA(15))]
    #[test_case("b 7", BitwiseCalcAction::SetOperandB(7))]
    #[test_case("ta 1", BitwiseCalcAction::ToggleOperandA(BitIndex::try_new(1).unwrap()))]
    #[test_case("tb 6", BitwiseCalcAction::ToggleOperandB(BitIndex::try_new(6).unwrap()))]
    #[test_case("op xor", BitwiseCalcAction::SetOperator(BitwiseOperator::Xor))]
    #[test_case("op <<", BitwiseCalcAction::SetOperator(BitwiseOperator::ShiftLeft))]
    #[test_case("shift 3", BitwiseCalcAction::SetShiftAmount(ShiftAmount::try_new(3).unwrap()))]
    fn test_parse_action(line: &str, expected: BitwiseCalcAction) {
        assert_eq2!(BitwiseCalcState::parse_action(line).unwrap(), expected);
    }

    #[test_case("shift 0")]
    #[test_case("shift 8")]
    #[test_case("op nand")]
    #[test_case("a")]
    #[test_case("c 1")]
    fn test_parse_action_errors(line: &str) {
        assert!(BitwiseCalcState::parse_action(line).is_err());
    }

    #[test]
    fn test_render_and() {
        let it = BitwiseCalcState::default().render(Palette::plain());
        assert!(it.contains("[& AND]"), "{it}");
        assert!(it.contains("Result is 1 only when BOTH bits are 1"), "{it}");
        assert!(it.contains("A = 202       [1] [1] [0] [0] [1] [0] [1] [0]"), "{it}");
        assert!(it.contains("B = 181       [1] [0] [1] [1] [0] [1] [0] [1]"), "{it}");
        assert!(it.contains("Result = 128  [1] [0] [0] [0] [0] [0] [0] [0]"), "{it}");
        assert!(it.contains("  a & b  # => 128 (0b10000000)"), "{it}");
        assert!(!it.contains("Shift by:"), "{it}");
    }

    #[test]
    fn test_render_shift_hides_operand_b() {
        let it = BitwiseCalcState::default()
            .reduce(&BitwiseCalcAction::SetOperator(BitwiseOperator::ShiftRight))
            .reduce(&BitwiseCalcAction::SetShiftAmount(ShiftAmount::try_new(2).unwrap()))
            .render(Palette::plain());
        assert!(it.contains("Shift by: 2"), "{it}");
        assert!(it.contains("\n>> 2\n"), "{it}");
        assert!(!it.contains("B = 181"), "{it}");
        assert!(it.contains("Result = 50"), "{it}");
        assert!(it.contains("Shifts bits right, dividing by 2^2"), "{it}");
    }
}
