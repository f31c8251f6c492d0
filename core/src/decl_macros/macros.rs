// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given block or stmt so that it returns a `Result<()>`. It is just syntactic
/// sugar that helps having to write `Ok(())` repeatedly at the end of each function.
///
/// # Example
///
/// ```
/// use byteviz_core::{CommonResult, parse_radix, throws};
///
/// fn print_parsed(text: &str) -> CommonResult<()> {
///     throws!({
///         let value = parse_radix(text)?;
///         println!("{value}");
///     });
/// }
///
/// assert!(print_parsed("0x41").is_ok());
/// assert!(print_parsed("0x4G").is_err());
/// ```
#[macro_export]
macro_rules! throws {
    ($it: block) => {{
        $it
        return Ok(())
    }};
    ($it: stmt) => {{
        $it
        return Ok(())
    }};
}

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Format into an [`crate::InlineString`] instead of a heap allocated [`String`].
///
/// # Example
///
/// ```
/// use byteviz_core::inline_string;
///
/// let value = 65;
/// let it = inline_string!("0x{value:02X}");
/// assert_eq!(it.as_str(), "0x41");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // Writing into an in memory buffer can't fail.
        _ = write!(&mut acc, $($format)*);
        acc
    }};
}
