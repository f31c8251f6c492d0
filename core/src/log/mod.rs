// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. Nothing is written anywhere until one of
//! [`try_initialize_logging_global`] or [`TracingConfig::install_thread_local`] is called
//! with a level other than [`tracing_core::LevelFilter::OFF`]. After that, the usual
//! [`tracing::info!`], [`tracing::debug!`], etc. macros produce output.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
