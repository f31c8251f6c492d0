// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bit-string codec: a byte as 8 individual bits (most significant first), and as
//! binary, octal, decimal, and hex text.

// Attach sources.
pub mod bit_vector;
pub mod byte_readout;
pub mod radix;

// Re-export.
pub use bit_vector::*;
pub use byte_readout::*;
pub use radix::*;
