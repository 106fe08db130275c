// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared descriptive metadata embedded in every property variant.

use crate::domain::group::{Category, Group};
use crate::domain::property_key::PropertyKey;

/// The metadata common to all property variants.
///
/// The key is fixed at construction; everything else starts unset (or at its
/// documented default) and is populated through the fluent builder methods on
/// the property. "No additional groups" and "groups never configured" are not
/// distinguished: `additional_groups` is simply empty until `groups` is
/// called, and `primary_group` stays `None` until then.
#[derive(Debug)]
pub(crate) struct PropertyMetadata {
    pub(crate) key: PropertyKey,
    pub(crate) name: Option<String>,
    pub(crate) origin: Option<String>,
    pub(crate) help_short: Option<String>,
    pub(crate) help_long: Option<String>,
    pub(crate) primary_group: Option<Group>,
    pub(crate) additional_groups: Vec<Group>,
    pub(crate) category: Category,
    pub(crate) case_sensitive: bool,
    pub(crate) only_example_values: bool,
    pub(crate) example_values: Vec<String>,
}

impl PropertyMetadata {
    pub(crate) fn new(key: PropertyKey) -> Self {
        PropertyMetadata {
            key,
            name: None,
            origin: None,
            help_short: None,
            help_long: None,
            primary_group: None,
            additional_groups: Vec::new(),
            category: Category::default(),
            case_sensitive: false,
            only_example_values: false,
            example_values: Vec::new(),
        }
    }
}
