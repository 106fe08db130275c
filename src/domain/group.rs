// SPDX-License-Identifier: MIT OR Apache-2.0

//! Organizational tags for properties.
//!
//! Properties are grouped for documentation and help purposes using `Group`
//! tags and a coarse `Category`. Neither carries behavior; both are consumed
//! by external help renderers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An organizational tag used to group related properties in help output.
///
/// # Examples
///
/// ```
/// use propdef::domain::group::Group;
///
/// let group = Group::from("paths");
/// assert_eq!(group.as_str(), "paths");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group(String);

impl Group {
    /// Creates a new `Group` from a `String`.
    pub fn new(name: String) -> Self {
        Group(name)
    }

    /// Returns the group name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Group {
    fn from(s: String) -> Self {
        Group(s)
    }
}

impl From<&str> for Group {
    fn from(s: &str) -> Self {
        Group(s.to_string())
    }
}

impl AsRef<str> for Group {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The coarse documentation category of a property.
///
/// Every property starts out as [`Category::Simple`]; catalogs move the less
/// commonly used ones to [`Category::Advanced`] via the builder.
///
/// # Examples
///
/// ```
/// use propdef::domain::group::Category;
///
/// assert_eq!(Category::default(), Category::Simple);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Commonly used properties, shown in basic help output.
    #[default]
    Simple,
    /// Less commonly used properties, shown only in extended help output.
    Advanced,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Simple => write!(f, "simple"),
            Category::Advanced => write!(f, "advanced"),
        }
    }
}
