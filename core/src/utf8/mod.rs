// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! UTF-8 encoding of a single code point, byte by byte, with the structural role of each
//! byte and the data bits it carries. Multi-character strings and decoding of arbitrary
//! byte streams are out of scope; use [`str`] and [`char`] for those.

// Attach sources.
pub mod encode;
pub mod encoded_byte;
pub mod pattern;

// Re-export.
pub use encode::*;
pub use encoded_byte::*;
pub use pattern::*;
