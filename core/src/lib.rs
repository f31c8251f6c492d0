// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # byteviz_core
//!
//! The computation core behind the `byteviz` widgets. Every widget holds a small piece of
//! state (a byte, an operator, a character) and on each change asks this crate for the
//! values to display. All of the functions here are pure: they take a complete input
//! snapshot and return a fresh value.
//!
//! | Module      | What it computes                                                      |
//! | ----------- | --------------------------------------------------------------------- |
//! | [`bits`]    | 8-bit value to and from an MSB-first [`BitVector`], radix text         |
//! | [`ascii`]   | [`AsciiCategory`] and display name of a 7-bit code, table filtering    |
//! | [`bitwise`] | [`BitwiseOperator`] evaluation on 8-bit operands, per-bit significance |
//! | [`utf8`]    | single code point to a 1-4 byte [`EncodedSequence`]                    |
//!
//! The crate also carries the ambient pieces that the `byteviz-cmdr` shell shares:
//!
//! - [`script`] - the [`ScriptExecutor`] capability used by the playground, backed by an
//!   interpreter process with a timeout.
//! - [`log`] - `tracing` subscriber setup.
//! - [`common`] - [`CommonResult`], [`CommonError`], and the `miette` report hook.
//!
//! # Example
//!
//! ```
//! use byteviz_core::{BitwiseOperator, ShiftAmount, encode_utf8, evaluate, to_bits,
//!                    from_bits};
//!
//! let bits = to_bits(0b1100_1010);
//! assert_eq!(from_bits(bits), 202);
//!
//! let it = evaluate(202, 181, BitwiseOperator::And, ShiftAmount::default());
//! assert_eq!(it.result, 202 & 181);
//!
//! let bytes = encode_utf8(0x4E2D);
//! assert_eq!(bytes.values().as_slice(), &[0xE4, 0xB8, 0xAD]);
//! ```

// Production code is not allowed to use .unwrap() in functions returning Result, test
// code is (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ascii;
pub mod bits;
pub mod bitwise;
pub mod common;
pub mod decl_macros;
pub mod log;
pub mod script;
pub mod utf8;

// Re-export.
pub use ascii::*;
pub use bits::*;
pub use bitwise::*;
pub use common::*;
pub use log::*;
pub use script::*;
pub use utf8::*;
