// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property key newtype for type-safe key handling.
//!
//! This module provides the `PropertyKey` type, a newtype wrapper around
//! `String` that identifies a property and prevents accidental string
//! confusion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for property keys.
///
/// `PropertyKey` is the immutable identity of a property. It is set exactly
/// once, at construction of the property, and never changes afterwards.
/// Uniqueness across a catalog is the catalog's responsibility, not the
/// key's.
///
/// # Examples
///
/// ```
/// use propdef::domain::property_key::PropertyKey;
///
/// let key = PropertyKey::from("detect.timeout");
/// assert_eq!(key.as_str(), "detect.timeout");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyKey(String);

impl PropertyKey {
    /// Creates a new `PropertyKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use propdef::domain::property_key::PropertyKey;
    ///
    /// let key = PropertyKey::new("app.name".to_string());
    /// assert_eq!(key.as_str(), "app.name");
    /// ```
    pub fn new(key: String) -> Self {
        PropertyKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `PropertyKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey(s)
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey(s.to_string())
    }
}

impl From<PropertyKey> for String {
    fn from(key: PropertyKey) -> Self {
        key.0
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
