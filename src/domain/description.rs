// SPDX-License-Identifier: MIT OR Apache-2.0

//! The read interface shared by all property variants.
//!
//! Bare, optional, and required properties are distinct types; this trait is
//! the object-safe view that lets catalogs and help renderers hold and
//! inspect them uniformly, without access to parsing or typed values.

use crate::domain::group::{Category, Group};
use crate::domain::property_key::PropertyKey;

/// Uniform, read-only access to a property's descriptive metadata.
///
/// Implemented by every property variant. The four descriptive hooks at the
/// bottom have safe defaults so that custom implementors only override the
/// ones that matter to them.
///
/// # Examples
///
/// ```
/// use propdef::domain::description::PropertyDescription;
/// use propdef::domain::property::Property;
///
/// let property = Property::bare("detect.phone.home.passthrough");
/// let description: &dyn PropertyDescription = &property;
///
/// assert_eq!(description.key().as_str(), "detect.phone.home.passthrough");
/// assert!(description.list_example_values().is_empty());
/// assert!(!description.is_only_example_values());
/// ```
pub trait PropertyDescription {
    /// Returns the property's immutable key.
    fn key(&self) -> &PropertyKey;

    /// Returns the display name, if `info` has been applied.
    fn name(&self) -> Option<&str>;

    /// Returns where/why the property exists, if `info` has been applied.
    fn origin(&self) -> Option<&str>;

    /// Returns the short help text, if `help` has been applied.
    fn help_short(&self) -> Option<&str>;

    /// Returns the long help text, if one has been applied.
    fn help_long(&self) -> Option<&str>;

    /// Returns the primary group, if `groups` has been applied.
    fn primary_group(&self) -> Option<&Group>;

    /// Returns the additional groups, in the order they were given.
    fn additional_groups(&self) -> &[Group];

    /// Returns the documentation category.
    fn category(&self) -> Category;

    /// Whether raw-value matching for this property is case-sensitive.
    fn is_case_sensitive(&self) -> bool {
        false
    }

    /// Whether [`list_example_values`](Self::list_example_values) enumerates
    /// the complete legal value set rather than illustrative examples.
    fn is_only_example_values(&self) -> bool {
        false
    }

    /// Example raw values, for help output.
    fn list_example_values(&self) -> Vec<String> {
        Vec::new()
    }

    /// A human-readable rendering of the default value, if the property has
    /// one. Only required properties do.
    fn describe_default(&self) -> Option<String> {
        None
    }
}
