// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic parser adapter over `std::str::FromStr`.
//!
//! Most value types already know how to parse themselves; this adapter lifts
//! a `FromStr` implementation into the [`ValueParser`] contract and attaches
//! the human-facing type name rendered into failure messages.

use crate::domain::errors::{Result, ValueParseError};
use crate::ports::ValueParser;
use std::marker::PhantomData;
use std::str::FromStr;

/// A [`ValueParser`] backed by the target type's `FromStr` implementation.
///
/// The type name shown in failure messages is supplied at construction,
/// because the Rust type path (`i64`, `std::path::PathBuf`) is rarely the
/// name end users should see.
///
/// # Examples
///
/// ```
/// use propdef::adapters::FromStrParser;
/// use propdef::ports::ValueParser;
///
/// let parser = FromStrParser::<u16>::new("Port");
/// assert_eq!(parser.parse("8080").unwrap(), 8080);
///
/// let err = parser.parse("eighty").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Unable to parse raw value 'eighty' and coerce it into type 'Port'. "
/// );
/// ```
pub struct FromStrParser<T> {
    type_name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FromStrParser<T> {
    /// Creates a parser that reports failures under the given type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        FromStrParser {
            type_name: type_name.into(),
            _marker: PhantomData,
        }
    }
}

impl<T> ValueParser<T> for FromStrParser<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn parse(&self, raw: &str) -> Result<T> {
        raw.parse::<T>().map_err(|e| {
            tracing::debug!(
                raw = raw,
                type_name = %self.type_name,
                "raw value failed to parse"
            );
            ValueParseError::new(raw, &self.type_name).with_source(e)
        })
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl<T> std::fmt::Debug for FromStrParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromStrParser")
            .field("type_name", &self.type_name)
            .finish()
    }
}
