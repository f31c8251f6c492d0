// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod script_runner;

// Re-export.
pub use script_runner::*;
