// SPDX-License-Identifier: MIT OR Apache-2.0

//! A declarative schema for typed application configuration properties.
//!
//! Each property carries an identifying key and human-facing metadata
//! (display name, origin, help text, grouping, category). Properties that
//! carry a value also fix a parsing rule that coerces a raw textual input
//! into a strongly typed value.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The property variant hierarchy, its metadata, the
//!   parse error type, and the `Properties` catalog
//! - **Ports**: The `ValueParser` trait defining the per-type coercion seam
//! - **Adapters**: Concrete parsers for common value types
//!
//! # Property variants
//!
//! - [`BareProperty`](domain::BareProperty): key and metadata only, no
//!   retrievable value, for keys that only appear in generated help
//! - [`OptionalProperty`](domain::OptionalProperty): a typed value may be
//!   present
//! - [`RequiredProperty`](domain::RequiredProperty): always resolvable,
//!   falling back to a default fixed at construction
//!
//! # Quick Start
//!
//! ```rust
//! use propdef::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let timeout = Property::required("detect.timeout", FromStrParser::<u64>::new("Integer"), 300)
//!     .info("Detect Timeout", "CLI")
//!     .help("The number of seconds to wait before aborting.", None);
//!
//! assert_eq!(timeout.parse("45")?, 45);
//! assert_eq!(timeout.resolve(None)?, 300);
//! # Ok(())
//! # }
//! ```
//!
//! Supplying raw values (from environment variables, files, or flags),
//! resolving precedence between sources, and rendering help output are all
//! external responsibilities; this crate only defines the schema and the
//! parsing contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{BooleanParser, FromStrParser};
    pub use crate::domain::{
        BareProperty, Category, Group, OptionalProperty, Properties, Property,
        PropertyDescription, PropertyKey, RequiredProperty, Result, ValueParseError,
    };
    pub use crate::ports::ValueParser;
}
