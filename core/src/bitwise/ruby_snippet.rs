// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BitwiseOperator, ShiftAmount, evaluate};
use crate::{Radix, format_radix};

/// The Ruby code the calculator prints under the result, so the reader can try the same
/// operation in a playground. The `# =>` comment carries the evaluated result.
///
/// ```
/// use byteviz_core::{BitwiseOperator, ShiftAmount, ruby_snippet};
///
/// let it = ruby_snippet(202, 181, BitwiseOperator::And, ShiftAmount::default());
/// assert_eq!(
///     it,
///     "a = 0b11001010  # 202\nb = 0b10110101  # 181\na & b  # => 128 (0b10000000)"
/// );
/// ```
#[must_use]
pub fn ruby_snippet(
    operand_a: u8,
    operand_b: u8,
    operator: BitwiseOperator,
    shift_amount: ShiftAmount,
) -> String {
    let result = evaluate(operand_a, operand_b, operator, shift_amount).result;
    let a_line = assignment_line("a", operand_a);
    let result_comment = format!("# => {result} (0b{})", format_radix(result, Radix::Binary));

    match operator {
        BitwiseOperator::Not => format!("{a_line}\n~a & 0xFF  {result_comment}"),
        BitwiseOperator::ShiftLeft | BitwiseOperator::ShiftRight => format!(
            "{a_line}\na {symbol} {shift_amount}  {result_comment}",
            symbol = operator.symbol()
        ),
        BitwiseOperator::And | BitwiseOperator::Or | BitwiseOperator::Xor => format!(
            "{a_line}\n{b_line}\na {symbol} b  {result_comment}",
            b_line = assignment_line("b", operand_b),
            symbol = operator.symbol()
        ),
    }
}

fn assignment_line(name: &str, value: u8) -> String {
    format!("{name} = 0b{}  # {value}", format_radix(value, Radix::Binary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_not_snippet_masks_to_eight_bits() {
        let it = ruby_snippet(202, 181, BitwiseOperator::Not, ShiftAmount::default());
        assert_eq2!(it, "a = 0b11001010  # 202\n~a & 0xFF  # => 53 (0b00110101)");
    }

    #[test]
    fn test_shift_snippet_uses_amount_and_skips_b() {
        let shift_amount = ShiftAmount::try_new(2).unwrap();
        let it = ruby_snippet(202, 181, BitwiseOperator::ShiftRight, shift_amount);
        assert_eq2!(it, "a = 0b11001010  # 202\na >> 2  # => 50 (0b00110010)");
        assert!(!it.contains("b ="));
    }

    #[test]
    fn test_xor_snippet() {
        let it = ruby_snippet(202, 181, BitwiseOperator::Xor, ShiftAmount::default());
        assert_eq2!(
            it,
            "a = 0b11001010  # 202\nb = 0b10110101  # 181\na ^ b  # => 127 (0b01111111)"
        );
    }
}
