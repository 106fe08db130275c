// SPDX-License-Identifier: MIT OR Apache-2.0

//! A flat collection of assembled properties.
//!
//! `Properties` holds the fully assembled schema as trait objects so that
//! bare, optional, and required properties of any value type can sit side by
//! side. It only enumerates; key uniqueness, raw-value precedence, and
//! cross-property validation are the owning application's concern.

use crate::domain::description::PropertyDescription;
use crate::domain::property_key::PropertyKey;

/// An ordered collection of properties, held behind their shared read
/// interface.
///
/// # Examples
///
/// ```
/// use propdef::prelude::*;
///
/// let properties = Properties::new(vec![
///     Box::new(Property::bare("b.key")),
///     Box::new(Property::bare("a.key")),
/// ]);
///
/// assert_eq!(properties.len(), 2);
/// let sorted: Vec<&str> = properties
///     .sorted_property_keys()
///     .iter()
///     .map(|k| k.as_str())
///     .collect();
/// assert_eq!(sorted, vec!["a.key", "b.key"]);
/// ```
pub struct Properties {
    properties: Vec<Box<dyn PropertyDescription>>,
}

impl Properties {
    /// Creates a collection from already assembled properties.
    ///
    /// Insertion order is preserved.
    pub fn new(properties: Vec<Box<dyn PropertyDescription>>) -> Self {
        Properties { properties }
    }

    /// Returns the keys of all properties, in insertion order.
    pub fn property_keys(&self) -> Vec<&PropertyKey> {
        self.properties.iter().map(|p| p.key()).collect()
    }

    /// Returns the keys of all properties, sorted lexicographically.
    pub fn sorted_property_keys(&self) -> Vec<&PropertyKey> {
        let mut keys = self.property_keys();
        keys.sort();
        keys
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PropertyDescription> {
        self.properties.iter().map(AsRef::as_ref)
    }

    /// Returns the number of properties in the collection.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` when the collection holds no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::Property;

    fn catalog() -> Properties {
        Properties::new(vec![
            Box::new(Property::bare("c.third")),
            Box::new(Property::bare("a.first")),
            Box::new(Property::bare("b.second")),
        ])
    }

    #[test]
    fn test_property_keys_in_insertion_order() {
        let properties = catalog();
        let keys: Vec<&str> = properties
            .property_keys()
            .iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(keys, vec!["c.third", "a.first", "b.second"]);
    }

    #[test]
    fn test_sorted_property_keys() {
        let properties = catalog();
        let sorted: Vec<&str> = properties
            .sorted_property_keys()
            .iter()
            .map(|k| k.as_str())
            .collect();
        assert_eq!(sorted, vec!["a.first", "b.second", "c.third"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        assert_eq!(catalog().len(), 3);
        assert!(!catalog().is_empty());
        assert!(Properties::new(vec![]).is_empty());
    }

    #[test]
    fn test_iter_exposes_descriptions() {
        let properties = catalog();
        let count = properties.iter().filter(|p| p.name().is_none()).count();
        assert_eq!(count, 3);
    }
}
