// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod app_config;
pub mod config_folder;

// Re-export.
pub use app_config::*;
pub use config_folder::*;
