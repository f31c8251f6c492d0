// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
///
/// # Example
///
/// ```
/// use byteviz_core::{CommonError, CommonErrorType, CommonResult};
///
/// pub fn try_percent(value: u8) -> CommonResult<u8> {
///     if value > 100 {
///         let err_msg = format!("Percent out of range: {value}");
///         return CommonError::new_error_result(CommonErrorType::ValueOutOfRange, &err_msg);
///     }
///     Ok(value)
/// }
///
/// assert!(try_percent(50).is_ok());
/// assert!(try_percent(150).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. Read custom error docs
/// [here](https://learning-rust.github.io/docs/e7.custom_error_types.html).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// Some common errors that can occur.
#[non_exhaustive]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    #[default]
    General,
    InvalidArguments,
    ValueOutOfRange,
    ParsingError,
    IOError,
    NotFound,
    ConfigFolderCouldNotBeCreated,
    ConfigFolderPathCouldNotBeAccessed,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Only [`CommonError::error_type`] available, and no
    /// [`CommonError::error_message`].
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result_with_only_type<T>(
        err_type: CommonErrorType,
    ) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: None,
        }))
    }

    /// Only [`CommonError::error_message`] available, and no
    /// [`CommonError::error_type`].
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result_with_only_msg<T>(msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: CommonErrorType::default(),
            error_message: Some(msg.to_string()),
        }))
    }

    /// Pull the [`CommonErrorType`] back out of a [`miette::Report`], if the report
    /// wraps a [`CommonError`].
    #[must_use]
    pub fn error_type_of(report: &miette::Report) -> Option<CommonErrorType> {
        report
            .downcast_ref::<CommonError>()
            .map(|common_error| common_error.error_type)
    }
}
