// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify that keys, failure messages, and parsers hold their
//! contracts for arbitrary inputs.

use propdef::adapters::{BooleanParser, FromStrParser};
use propdef::domain::{Category, Group, Property, PropertyDescription, PropertyKey, ValueParseError};
use propdef::ports::ValueParser;
use proptest::prelude::*;

// Test that PropertyKey preserves any string
proptest! {
    #[test]
    fn test_property_key_from_any_string(s in "\\PC*") {
        let key = PropertyKey::from(s.clone());
        prop_assert_eq!(key.as_str(), s.as_str());
    }
}

// Test that the key survives arbitrary builder chains unchanged
proptest! {
    #[test]
    fn test_key_unchanged_by_builders(
        key in "\\PC*",
        name in "\\PC*",
        origin in "\\PC*",
        help in "\\PC*",
        group in "\\PC*",
        advanced in prop::bool::ANY,
    ) {
        let category = if advanced { Category::Advanced } else { Category::Simple };
        let property = Property::bare(key.as_str())
            .info(name, origin)
            .help(help, None)
            .groups(Group::from(group.as_str()), [])
            .with_category(category);
        prop_assert_eq!(property.key().as_str(), key.as_str());
    }
}

// Test that the failure message template holds for any raw value and type name
proptest! {
    #[test]
    fn test_failure_message_template(raw in "\\PC*", type_name in "\\PC*") {
        let err = ValueParseError::new(raw.clone(), type_name.clone());
        prop_assert_eq!(
            err.to_string(),
            format!(
                "Unable to parse raw value '{}' and coerce it into type '{}'. ",
                raw, type_name
            )
        );
    }
}

// Test that the additional message is appended verbatim
proptest! {
    #[test]
    fn test_failure_message_with_additional(raw in "\\PC*", message in "\\PC*") {
        let err = ValueParseError::new(raw.clone(), "T").with_message(message.clone());
        prop_assert_eq!(
            err.to_string(),
            format!(
                "Unable to parse raw value '{}' and coerce it into type 'T'. {}",
                raw, message
            )
        );
    }
}

// Test that last-write-wins holds for repeated info calls
proptest! {
    #[test]
    fn test_last_info_call_wins(
        first in "\\PC*",
        second in "\\PC*",
    ) {
        let property = Property::bare("k")
            .info(first, "one")
            .info(second.clone(), "two");
        prop_assert_eq!(property.name(), Some(second.as_str()));
        prop_assert_eq!(property.origin(), Some("two"));
    }
}

// Test integer render/parse round-trips
proptest! {
    #[test]
    fn test_i64_round_trip(n in prop::num::i64::ANY) {
        let parser = FromStrParser::<i64>::new("Integer");
        prop_assert_eq!(parser.parse(&n.to_string()).unwrap(), n);
    }
}

// Test that a failing parse carries the raw value verbatim
proptest! {
    #[test]
    fn test_failed_parse_keeps_raw_verbatim(s in "[a-zA-Z][a-zA-Z ]*") {
        let parser = FromStrParser::<i64>::new("Integer");
        let err = parser.parse(&s).unwrap_err();
        prop_assert_eq!(err.raw(), s.as_str());
    }
}

// Test that the required default is returned unchanged for any default
proptest! {
    #[test]
    fn test_required_default_round_trip(default in prop::num::i64::ANY) {
        let property = Property::required(
            "detect.timeout",
            FromStrParser::<i64>::new("Integer"),
            default,
        );
        prop_assert_eq!(*property.default_value(), default);
        prop_assert_eq!(property.resolve(None).unwrap(), default);
        prop_assert_eq!(
            property.describe_default(),
            Some(default.to_string())
        );
    }
}

// Test boolean canonical round-trips
proptest! {
    #[test]
    fn test_bool_round_trip(b in prop::bool::ANY) {
        prop_assert_eq!(BooleanParser.parse(&b.to_string()).unwrap(), b);
    }
}
