// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete value parsers.
//!
//! These implement the [`ValueParser`](crate::ports::ValueParser) port for
//! common value types. Applications define their own parsers for
//! domain-specific types (enumerations, paths with policy, URLs) against the
//! same trait.

pub mod boolean;
pub mod from_str;

// Re-export commonly used types
pub use boolean::BooleanParser;
pub use from_str::FromStrParser;
