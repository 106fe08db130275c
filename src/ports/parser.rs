// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value parser trait definition.
//!
//! This module defines the `ValueParser` trait, the per-type strategy that
//! coerces one raw textual value into one strongly typed value. Concrete
//! parsers live in the adapters layer; typed properties fix one parser at
//! construction and keep it for their entire lifetime.

use crate::domain::errors::Result;

/// A per-type strategy converting a raw string into a typed value.
///
/// Parsers are stateless: `parse` is a pure function of the raw input, has no
/// side effects beyond computation, and produces either a fully constructed
/// value or a [`ValueParseError`](crate::domain::errors::ValueParseError),
/// never a partial result. The raw input is passed exactly as obtained from
/// the external value source; no trimming or normalization is guaranteed, so
/// each parser decides its own tolerance.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; parse calls may be issued
/// concurrently and repeatedly once the property schema is assembled.
///
/// # Examples
///
/// ```
/// use propdef::ports::ValueParser;
/// use propdef::domain::errors::{Result, ValueParseError};
///
/// struct PortParser;
///
/// impl ValueParser<u16> for PortParser {
///     fn parse(&self, raw: &str) -> Result<u16> {
///         raw.parse::<u16>()
///             .map_err(|e| ValueParseError::new(raw, self.type_name()).with_source(e))
///     }
///
///     fn type_name(&self) -> &str {
///         "Port"
///     }
/// }
///
/// let parser = PortParser;
/// assert_eq!(parser.parse("8080").unwrap(), 8080);
/// assert!(parser.parse("eighty").is_err());
/// ```
pub trait ValueParser<T>: Send + Sync {
    /// Coerces the raw value into a `T`.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw value, verbatim from the external source
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The fully constructed typed value
    /// * `Err(ValueParseError)` - The raw value could not be coerced; the
    ///   error carries the raw value verbatim and this parser's type name
    fn parse(&self, raw: &str) -> Result<T>;

    /// Returns the human-facing name of the target type.
    ///
    /// This is the name rendered into parse failure messages and help
    /// output, e.g. `"Boolean"` or `"Integer"`.
    fn type_name(&self) -> &str;
}
