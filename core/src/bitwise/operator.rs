// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum_macros::{Display, EnumIter};

use super::ShiftAmount;
use crate::{CommonError, CommonErrorType, CommonResult};

/// The six operations the calculator offers. [`BitwiseOperator::Not`] and the shifts
/// only use the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum BitwiseOperator {
    #[default]
    #[strum(to_string = "AND")]
    And,
    #[strum(to_string = "OR")]
    Or,
    #[strum(to_string = "XOR")]
    Xor,
    #[strum(to_string = "NOT")]
    Not,
    #[strum(to_string = "LEFT")]
    ShiftLeft,
    #[strum(to_string = "RIGHT")]
    ShiftRight,
}

impl BitwiseOperator {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            BitwiseOperator::And => "&",
            BitwiseOperator::Or => "|",
            BitwiseOperator::Xor => "^",
            BitwiseOperator::Not => "~",
            BitwiseOperator::ShiftLeft => "<<",
            BitwiseOperator::ShiftRight => ">>",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BitwiseOperator::And => "AND",
            BitwiseOperator::Or => "OR",
            BitwiseOperator::Xor => "XOR",
            BitwiseOperator::Not => "NOT",
            BitwiseOperator::ShiftLeft => "Left Shift",
            BitwiseOperator::ShiftRight => "Right Shift",
        }
    }

    #[must_use]
    pub fn is_shift(self) -> bool {
        matches!(self, BitwiseOperator::ShiftLeft | BitwiseOperator::ShiftRight)
    }

    /// Unary operators ignore operand B.
    #[must_use]
    pub fn is_unary(self) -> bool { self == BitwiseOperator::Not || self.is_shift() }

    /// One line explanation of what the operator does to each bit.
    #[must_use]
    pub fn explanation(self, shift_amount: ShiftAmount) -> String {
        match self {
            BitwiseOperator::And => "Result is 1 only when BOTH bits are 1".into(),
            BitwiseOperator::Or => "Result is 1 when EITHER bit is 1".into(),
            BitwiseOperator::Xor => "Result is 1 when bits are DIFFERENT".into(),
            BitwiseOperator::Not => "Flips every bit (0→1, 1→0)".into(),
            BitwiseOperator::ShiftLeft => {
                format!("Shifts bits left, multiplying by 2^{shift_amount}")
            }
            BitwiseOperator::ShiftRight => {
                format!("Shifts bits right, dividing by 2^{shift_amount}")
            }
        }
    }
}

/// Case-insensitive. Accepts the [`std::fmt::Display`] names, the symbols, and the
/// common `shl` / `shr` spellings.
impl FromStr for BitwiseOperator {
    type Err = miette::Report;

    fn from_str(text: &str) -> CommonResult<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "and" | "&" => Ok(BitwiseOperator::And),
            "or" | "|" => Ok(BitwiseOperator::Or),
            "xor" | "^" => Ok(BitwiseOperator::Xor),
            "not" | "~" => Ok(BitwiseOperator::Not),
            "left" | "shl" | "<<" => Ok(BitwiseOperator::ShiftLeft),
            "right" | "shr" | ">>" => Ok(BitwiseOperator::ShiftRight),
            other => CommonError::new_error_result(
                CommonErrorType::ParsingError,
                &format!(
                    "Unknown operator '{other}', expected one of: and, or, xor, not, left, right"
                ),
            ),
        }
    }
}
