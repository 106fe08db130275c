// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait seams of the crate. The only port is the
//! value parser: the per-type strategy that typed properties fix at
//! construction. Concrete parsers are implemented in the adapters layer.

pub mod parser;

// Re-export commonly used types
pub use parser::ValueParser;
