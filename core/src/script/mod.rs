// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run a snippet of source code in an interpreter and capture what it prints. The
//! widgets never evaluate code themselves, they go through [`ScriptExecutor`] so that
//! the interpreter can be swapped out (or faked in tests).

// Attach sources.
pub mod process_script_executor;
pub mod script_executor;

// Re-export.
pub use process_script_executor::*;
pub use script_executor::*;
