// SPDX-License-Identifier: MIT OR Apache-2.0

//! The property variant hierarchy.
//!
//! A property is a named, documented unit of configuration. Three variants
//! exist, distinguished by whether a typed value can be retrieved:
//!
//! - [`BareProperty`]: no retrievable value. Useful for keys that only appear
//!   in generated help or pass-through documentation.
//! - [`OptionalProperty`]: a typed value may be present; no default exists.
//! - [`RequiredProperty`]: a typed value is always resolvable because a
//!   default is fixed at construction.
//!
//! The variants share one embedded metadata struct rather than an
//! inheritance chain: [`Property<V>`] pairs the metadata with a variant
//! payload ([`Bare`], [`Optional<T>`], or [`Required<T>`]), and each payload
//! carries only the fields its variant needs.
//!
//! # Assembly discipline
//!
//! Properties are assembled once, by a catalog builder, before being
//! published for concurrent reads. The fluent builder methods consume and
//! return the property by value, so a not-yet-published property is updated
//! in place and a published one cannot be touched. After assembly every
//! operation is a pure function of the construction-time configuration.
//!
//! # Examples
//!
//! ```
//! use propdef::prelude::*;
//!
//! let timeout = Property::required("detect.timeout", FromStrParser::<u64>::new("Integer"), 300)
//!     .info("Detect Timeout", "CLI")
//!     .help("The number of seconds to wait before aborting.", None)
//!     .groups(Group::from("general"), [Group::from("global")])
//!     .with_category(Category::Advanced);
//!
//! assert_eq!(timeout.key().as_str(), "detect.timeout");
//! assert_eq!(timeout.parse("45").unwrap(), 45);
//! assert_eq!(*timeout.default_value(), 300);
//! ```

use crate::domain::description::PropertyDescription;
use crate::domain::errors::Result;
use crate::domain::group::{Category, Group};
use crate::domain::metadata::PropertyMetadata;
use crate::domain::property_key::PropertyKey;
use crate::ports::ValueParser;
use std::fmt;

/// The payload of a property with no retrievable value.
#[derive(Debug, Default)]
pub struct Bare;

/// The payload of a typed property whose value may be absent.
pub struct Optional<T> {
    parser: Box<dyn ValueParser<T>>,
}

/// The payload of a typed property with a mandatory default.
pub struct Required<T> {
    parser: Box<dyn ValueParser<T>>,
    default: T,
}

/// Variant-specific behavior hooks, implemented once per payload type.
pub trait PropertyVariant {
    /// A human-readable rendering of the variant's default value, if any.
    fn describe_default(&self) -> Option<String> {
        None
    }
}

impl PropertyVariant for Bare {}

impl<T> PropertyVariant for Optional<T> {}

impl<T: fmt::Display> PropertyVariant for Required<T> {
    fn describe_default(&self) -> Option<String> {
        Some(self.default.to_string())
    }
}

/// A named, documented configuration property.
///
/// `V` selects the variant payload: [`Bare`], [`Optional<T>`], or
/// [`Required<T>`]. The key is fixed at construction and never changes; all
/// descriptive metadata is attached afterwards through the fluent builder
/// methods, each of which returns the updated property for chaining. Later
/// calls overwrite earlier ones for the same attribute.
///
/// # Examples
///
/// ```
/// use propdef::prelude::*;
///
/// let passthrough = Property::bare("detect.phone.home.passthrough")
///     .info("Phone Home Passthrough", "docs")
///     .help("Additional values sent along with phone-home data.", None);
///
/// assert_eq!(passthrough.key().as_str(), "detect.phone.home.passthrough");
/// assert_eq!(passthrough.name(), Some("Phone Home Passthrough"));
/// ```
pub struct Property<V> {
    metadata: PropertyMetadata,
    variant: V,
}

/// A property with no retrievable value.
pub type BareProperty = Property<Bare>;

/// A typed property whose value may be absent.
pub type OptionalProperty<T> = Property<Optional<T>>;

/// A typed property that always resolves to a value, via its default.
pub type RequiredProperty<T> = Property<Required<T>>;

impl Property<Bare> {
    /// Creates a property that carries only a key and metadata.
    ///
    /// Bare properties expose no parse operation; they exist purely to be
    /// discoverable and documented.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::domain::property::Property;
    ///
    /// let property = Property::bare("detect.phone.home.passthrough");
    /// assert_eq!(property.key().as_str(), "detect.phone.home.passthrough");
    /// ```
    pub fn bare(key: impl Into<PropertyKey>) -> Self {
        Property {
            metadata: PropertyMetadata::new(key.into()),
            variant: Bare,
        }
    }
}

impl<T> Property<Optional<T>> {
    /// Creates a typed property whose value may be absent.
    ///
    /// The parser is the single coercion rule for this property for its
    /// entire lifetime.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::prelude::*;
    ///
    /// let proxy = Property::optional("proxy.host", FromStrParser::<String>::new("String"));
    /// assert_eq!(proxy.parse("example.com").unwrap(), "example.com");
    /// ```
    pub fn optional(key: impl Into<PropertyKey>, parser: impl ValueParser<T> + 'static) -> Self {
        Property {
            metadata: PropertyMetadata::new(key.into()),
            variant: Optional {
                parser: Box::new(parser),
            },
        }
    }

    /// Coerces a raw value into this property's type.
    pub fn parse(&self, raw: &str) -> Result<T> {
        self.variant.parser.parse(raw)
    }

    /// Returns the human-facing name of this property's value type.
    pub fn value_type_name(&self) -> &str {
        self.variant.parser.type_name()
    }
}

impl<T> Property<Required<T>> {
    /// Creates a typed property with a mandatory default.
    ///
    /// A value is always resolvable for a required property: the default is
    /// fixed at construction and returned whenever no raw input is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::prelude::*;
    ///
    /// let retries = Property::required("detect.retries", FromStrParser::<u32>::new("Integer"), 3);
    /// assert_eq!(*retries.default_value(), 3);
    /// assert_eq!(retries.parse("5").unwrap(), 5);
    /// ```
    pub fn required(
        key: impl Into<PropertyKey>,
        parser: impl ValueParser<T> + 'static,
        default: T,
    ) -> Self {
        Property {
            metadata: PropertyMetadata::new(key.into()),
            variant: Required {
                parser: Box::new(parser),
                default,
            },
        }
    }

    /// Coerces a raw value into this property's type.
    pub fn parse(&self, raw: &str) -> Result<T> {
        self.variant.parser.parse(raw)
    }

    /// Returns the default value fixed at construction.
    pub fn default_value(&self) -> &T {
        &self.variant.default
    }

    /// Parses the raw value when one is supplied, otherwise returns a copy
    /// of the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::prelude::*;
    ///
    /// let retries = Property::required("detect.retries", FromStrParser::<u32>::new("Integer"), 3);
    /// assert_eq!(retries.resolve(Some("7")).unwrap(), 7);
    /// assert_eq!(retries.resolve(None).unwrap(), 3);
    /// ```
    pub fn resolve(&self, raw: Option<&str>) -> Result<T>
    where
        T: Clone,
    {
        match raw {
            Some(raw) => self.variant.parser.parse(raw),
            None => Ok(self.variant.default.clone()),
        }
    }

    /// Returns the human-facing name of this property's value type.
    pub fn value_type_name(&self) -> &str {
        self.variant.parser.type_name()
    }
}

impl<V> Property<V> {
    /// Returns the property's immutable key.
    pub fn key(&self) -> &PropertyKey {
        &self.metadata.key
    }

    /// Sets the display name and the origin of the property.
    pub fn info(mut self, name: impl Into<String>, origin: impl Into<String>) -> Self {
        self.metadata.name = Some(name.into());
        self.metadata.origin = Some(origin.into());
        self
    }

    /// Sets the short help text and, when given, the long help text.
    ///
    /// Both fields are overwritten on every call: passing `None` for the
    /// long text clears any previously set value.
    pub fn help(mut self, short: impl Into<String>, long: Option<&str>) -> Self {
        self.metadata.help_short = Some(short.into());
        self.metadata.help_long = long.map(str::to_string);
        self
    }

    /// Sets the primary group and replaces the additional groups.
    ///
    /// The additional groups keep the order they are given in.
    pub fn groups(mut self, primary: Group, additional: impl IntoIterator<Item = Group>) -> Self {
        self.metadata.primary_group = Some(primary);
        self.metadata.additional_groups = additional.into_iter().collect();
        self
    }

    /// Overwrites the documentation category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.metadata.category = category;
        self
    }

    /// Marks raw-value matching for this property as case-sensitive or not.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.metadata.case_sensitive = case_sensitive;
        self
    }

    /// Replaces the example raw values shown in help output.
    pub fn example_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata.example_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Declares whether the example values enumerate the complete legal
    /// value set rather than illustrative examples.
    pub fn only_example_values(mut self, only: bool) -> Self {
        self.metadata.only_example_values = only;
        self
    }
}

impl<V: PropertyVariant> PropertyDescription for Property<V> {
    fn key(&self) -> &PropertyKey {
        &self.metadata.key
    }

    fn name(&self) -> Option<&str> {
        self.metadata.name.as_deref()
    }

    fn origin(&self) -> Option<&str> {
        self.metadata.origin.as_deref()
    }

    fn help_short(&self) -> Option<&str> {
        self.metadata.help_short.as_deref()
    }

    fn help_long(&self) -> Option<&str> {
        self.metadata.help_long.as_deref()
    }

    fn primary_group(&self) -> Option<&Group> {
        self.metadata.primary_group.as_ref()
    }

    fn additional_groups(&self) -> &[Group] {
        &self.metadata.additional_groups
    }

    fn category(&self) -> Category {
        self.metadata.category
    }

    fn is_case_sensitive(&self) -> bool {
        self.metadata.case_sensitive
    }

    fn is_only_example_values(&self) -> bool {
        self.metadata.only_example_values
    }

    fn list_example_values(&self) -> Vec<String> {
        self.metadata.example_values.clone()
    }

    fn describe_default(&self) -> Option<String> {
        self.variant.describe_default()
    }
}

impl<T> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optional")
            .field("type_name", &self.parser.type_name())
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Required<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Required")
            .field("type_name", &self.parser.type_name())
            .field("default", &self.default)
            .finish()
    }
}

impl<V: fmt::Debug> fmt::Debug for Property<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("metadata", &self.metadata)
            .field("variant", &self.variant)
            .finish()
    }
}
