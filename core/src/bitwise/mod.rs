// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 8-bit bitwise operations, as shown by the bitwise calculator.

// Attach sources.
pub mod evaluate;
pub mod operator;
pub mod ruby_snippet;
pub mod shift_amount;

// Re-export.
pub use evaluate::*;
pub use operator::*;
pub use ruby_snippet::*;
pub use shift_amount::*;
