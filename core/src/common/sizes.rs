// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated storage for the short strings that the widgets produce (radix text,
//! mnemonics, code point labels). None of them get longer than a handful of bytes, so
//! they almost never spill to the heap.

use smallstr::SmallString;

// PERF: The longest string that fits here is `0b11111111` plus a little headroom. Do not
// grow this without a reason, every `InlineString` pays for it on the stack.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated tiny string storage, big enough for one UTF-8 encoded `char`.
pub type TinyInlineString = SmallString<[u8; DEFAULT_CHAR_STORAGE_SIZE]>;
pub const DEFAULT_CHAR_STORAGE_SIZE: usize = 4;
