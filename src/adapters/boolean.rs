// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean parser adapter with tolerant input handling.
//!
//! Configuration sources spell booleans many ways; this parser accepts the
//! common spellings case-insensitively instead of only `true`/`false`.

use crate::domain::errors::{Result, ValueParseError};
use crate::ports::ValueParser;

/// A [`ValueParser`] for booleans.
///
/// Recognizes the following raw values (case-insensitive):
///
/// - `true`: "true", "yes", "1", "on"
/// - `false`: "false", "no", "0", "off"
///
/// # Examples
///
/// ```
/// use propdef::adapters::BooleanParser;
/// use propdef::ports::ValueParser;
///
/// let parser = BooleanParser;
/// assert!(parser.parse("YES").unwrap());
/// assert!(!parser.parse("off").unwrap());
/// assert!(parser.parse("maybe").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BooleanParser;

impl ValueParser<bool> for BooleanParser {
    fn parse(&self, raw: &str) -> Result<bool> {
        match raw.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => {
                tracing::debug!(raw = raw, "raw value is not a recognized boolean");
                Err(ValueParseError::new(raw, self.type_name())
                    .with_message("Expected one of: true, false, yes, no, 1, 0, on, off."))
            }
        }
    }

    fn type_name(&self) -> &str {
        "Boolean"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_variants() {
        for raw in ["true", "True", "TRUE", "yes", "YES", "1", "on", "On"] {
            assert!(BooleanParser.parse(raw).unwrap(), "failed for: {}", raw);
        }
    }

    #[test]
    fn test_false_variants() {
        for raw in ["false", "False", "FALSE", "no", "NO", "0", "off", "Off"] {
            assert!(!BooleanParser.parse(raw).unwrap(), "failed for: {}", raw);
        }
    }

    #[test]
    fn test_invalid_value() {
        let err = BooleanParser.parse("maybe").unwrap_err();
        assert_eq!(err.raw(), "maybe");
        assert_eq!(err.type_name(), "Boolean");
        assert_eq!(
            err.to_string(),
            "Unable to parse raw value 'maybe' and coerce it into type 'Boolean'. \
             Expected one of: true, false, yes, no, 1, 0, on, off."
        );
    }

    #[test]
    fn test_no_trimming() {
        assert!(BooleanParser.parse(" true ").is_err());
    }

    #[test]
    fn test_round_trip_canonical_forms() {
        for value in [true, false] {
            assert_eq!(BooleanParser.parse(&value.to_string()).unwrap(), value);
        }
    }
}
