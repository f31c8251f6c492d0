// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # byteviz-cmdr
//!
//! The terminal front end for [`byteviz_core`]. Each widget is a small state value, a
//! set of actions, a reducer that turns `(state, action)` into the next state, and a
//! renderer that prints the state through the core computations.
//!
//! | Widget                            | Shows                                                  |
//! | --------------------------------- | ------------------------------------------------------ |
//! | [`widgets::AsciiTableState`]      | the 128 ASCII codes, filtered, with a detail panel     |
//! | [`widgets::ByteTogglerState`]     | one byte as 8 toggleable bits plus binary, hex, char   |
//! | [`widgets::BitwiseCalcState`]     | two operands, an operator, the result and Ruby snippet |
//! | [`widgets::Utf8VizState`]         | one character split into its UTF-8 bytes               |
//!
//! The `byteviz` binary renders a widget once (one subcommand per widget), or runs an
//! [`interactive`] session that reads one action per line. The [`playground`] runs Ruby
//! snippets through a [`byteviz_core::ScriptExecutor`].

// Production code is not allowed to use .unwrap() in functions returning Result, test
// code is (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod clap_config;
pub mod common;
pub mod config;
pub mod interactive;
pub mod launcher;
pub mod playground;
pub mod widgets;

// Re-export.
pub use clap_config::*;
pub use common::*;
pub use config::*;
pub use interactive::*;
pub use launcher::*;
pub use playground::*;
pub use widgets::*;
