// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Character classifier for the 7-bit ASCII table.

// Attach sources.
pub mod ascii_code;
pub mod ascii_table;

// Re-export.
pub use ascii_code::*;
pub use ascii_table::*;
