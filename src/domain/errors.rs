// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the property schema crate.
//!
//! This module defines `ValueParseError`, the single error kind produced by
//! value parsers. The rendered message follows a fixed template that log and
//! diagnostic consumers rely on, so it is part of the external contract and
//! covered by tests below.

use thiserror::Error;

/// The error returned when a raw value cannot be coerced into its target type.
///
/// A `ValueParseError` carries the offending raw string verbatim, the
/// human-facing name of the target type, an optional additional message, and
/// an optional underlying cause (for example a numeric format error). The
/// rendered message is always:
///
/// ```text
/// Unable to parse raw value '<raw>' and coerce it into type '<typeName>'. <additionalMessage>
/// ```
///
/// with `<additionalMessage>` the empty string when none was supplied.
///
/// # Examples
///
/// ```
/// use propdef::domain::errors::ValueParseError;
///
/// let err = ValueParseError::new("abc", "Int");
/// assert_eq!(
///     err.to_string(),
///     "Unable to parse raw value 'abc' and coerce it into type 'Int'. "
/// );
/// ```
#[derive(Debug, Error)]
#[error("Unable to parse raw value '{raw}' and coerce it into type '{type_name}'. {message}")]
pub struct ValueParseError {
    raw: String,
    type_name: String,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ValueParseError {
    /// Creates a parse error for the given raw value and target type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::domain::errors::ValueParseError;
    ///
    /// let err = ValueParseError::new("not_a_number", "Integer");
    /// assert_eq!(err.raw(), "not_a_number");
    /// assert_eq!(err.type_name(), "Integer");
    /// ```
    pub fn new(raw: impl Into<String>, type_name: impl Into<String>) -> Self {
        ValueParseError {
            raw: raw.into(),
            type_name: type_name.into(),
            message: String::new(),
            source: None,
        }
    }

    /// Attaches an additional human-readable explanation of the failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attaches the underlying error that caused the failure.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the raw value that failed to parse, verbatim.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the name of the target type.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Returns the additional message, empty when none was supplied.
    pub fn additional_message(&self) -> &str {
        &self.message
    }
}

/// A specialized Result type for value parsing operations.
pub type Result<T> = std::result::Result<T, ValueParseError>;
