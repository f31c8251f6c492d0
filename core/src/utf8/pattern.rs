// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::EncodedSequence;

/// The bit layout of a 1-4 byte sequence, `x` marks a data bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingPattern {
    pub pattern: &'static str,
    pub description: &'static str,
}

impl EncodingPattern {
    /// `None` unless `byte_count` is 1 to 4.
    #[must_use]
    pub fn for_len(byte_count: usize) -> Option<Self> {
        let (pattern, description) = match byte_count {
            1 => ("0xxxxxxx", "Single byte ASCII"),
            2 => ("110xxxxx 10xxxxxx", "2-byte sequence: 11 data bits"),
            3 => ("1110xxxx 10xxxxxx 10xxxxxx", "3-byte sequence: 16 data bits"),
            4 => (
                "11110xxx 10xxxxxx 10xxxxxx 10xxxxxx",
                "4-byte sequence: 21 data bits",
            ),
            _ => return None,
        };
        Some(Self {
            pattern,
            description,
        })
    }

    #[must_use]
    pub fn for_sequence(sequence: &EncodedSequence) -> Option<Self> {
        Self::for_len(sequence.len())
    }
}

/// A character with a short label, offered as a quick pick by the visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleChar {
    pub ch: char,
    pub label: &'static str,
}

/// One example for each sequence length.
pub const EXAMPLE_CHARS: [ExampleChar; 4] = [
    ExampleChar {
        ch: 'A',
        label: "ASCII (1 byte)",
    },
    ExampleChar {
        ch: 'é',
        label: "Latin (2 bytes)",
    },
    ExampleChar {
        ch: '中',
        label: "CJK (3 bytes)",
    },
    ExampleChar {
        ch: '🎉',
        label: "Emoji (4 bytes)",
    },
];
