// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{BitwiseOperator, ShiftAmount};
use crate::{BITS_PER_BYTE, Bit, BitVector, to_bits};

/// Display emphasis for one bit of a result. This only drives highlighting, nothing is
/// computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitSignificance {
    Significant,
    #[default]
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseEvaluation {
    pub result: u8,
    /// Indexed like a [`BitVector`], most significant first.
    pub significance: [BitSignificance; BITS_PER_BYTE],
}

impl BitwiseEvaluation {
    #[must_use]
    pub fn result_bits(&self) -> BitVector { to_bits(self.result) }
}

/// Apply `operator` to 8-bit operands. `operand_b` is ignored by unary operators and
/// `shift_amount` is ignored by everything except the shifts.
///
/// - AND / OR / XOR mark the result bits that are 1 as significant.
/// - NOT marks the bits that differ from `operand_a` (which is all of them).
/// - Shifts mark nothing.
///
/// ```
/// use byteviz_core::{BitwiseOperator, ShiftAmount, evaluate};
///
/// let shift_amount = ShiftAmount::try_new(3).unwrap();
/// assert_eq!(evaluate(0b1100_1010, 0, BitwiseOperator::ShiftLeft, shift_amount).result,
///            0b0101_0000);
/// assert_eq!(evaluate(0b1100_1010, 0, BitwiseOperator::Not, shift_amount).result,
///            0b0011_0101);
/// ```
#[must_use]
pub fn evaluate(
    operand_a: u8,
    operand_b: u8,
    operator: BitwiseOperator,
    shift_amount: ShiftAmount,
) -> BitwiseEvaluation {
    let shift = shift_amount.value();
    let result = match operator {
        BitwiseOperator::And => operand_a & operand_b,
        BitwiseOperator::Or => operand_a | operand_b,
        BitwiseOperator::Xor => operand_a ^ operand_b,
        // Stays 8 bits wide, the same as `(~a) & 0xFF` on a wider integer.
        BitwiseOperator::Not => !operand_a,
        // Bits shifted past bit 7 are dropped, not wrapped around.
        BitwiseOperator::ShiftLeft => operand_a << shift,
        // Logical shift, `u8` has no sign to extend.
        BitwiseOperator::ShiftRight => operand_a >> shift,
    };

    BitwiseEvaluation {
        result,
        significance: significance_of(operand_a, result, operator),
    }
}

fn significance_of(
    operand_a: u8,
    result: u8,
    operator: BitwiseOperator,
) -> [BitSignificance; BITS_PER_BYTE] {
    let result_bits = to_bits(result);
    let operand_a_bits = to_bits(operand_a);

    let mut acc = [BitSignificance::Plain; BITS_PER_BYTE];
    for (i, (result_bit, operand_a_bit)) in
        result_bits.iter().zip(operand_a_bits.iter()).enumerate()
    {
        let is_significant = match operator {
            BitwiseOperator::And | BitwiseOperator::Or | BitwiseOperator::Xor => {
                *result_bit == Bit::One
            }
            BitwiseOperator::Not => result_bit != operand_a_bit,
            BitwiseOperator::ShiftLeft | BitwiseOperator::ShiftRight => false,
        };
        if is_significant {
            acc[i] = BitSignificance::Significant;
        }
    }
    acc
}
