// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod palette;
pub mod ui_str;

// Re-export.
pub use palette::*;
pub use ui_str::*;
