// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ascii_table;
pub mod bitwise_calc;
pub mod byte_toggler;
pub mod utf8_viz;
pub mod widget;

// Re-export.
pub use ascii_table::*;
pub use bitwise_calc::*;
pub use byte_toggler::*;
pub use utf8_viz::*;
pub use widget::*;
