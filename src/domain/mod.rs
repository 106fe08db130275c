// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core property schema types.
//!
//! This module contains the property variant hierarchy, its descriptive
//! metadata, and the parse error type. It is independent of any external
//! concerns; raw-value sources and help renderers live outside this crate
//! and only consume the interfaces defined here.

pub mod catalog;
pub mod description;
pub mod errors;
pub mod group;
mod metadata;
pub mod property;
pub mod property_key;

// Re-export commonly used types
pub use catalog::Properties;
pub use description::PropertyDescription;
pub use errors::{Result, ValueParseError};
pub use group::{Category, Group};
pub use property::{BareProperty, OptionalProperty, Property, RequiredProperty};
pub use property_key::PropertyKey;
