//! Core string toolkit for the bric utility library.
//!
//! This crate provides the pure text transformations shared across the
//! bric ecosystem:
//!
//! - [`capitalize`], [`to_camel_case`], [`to_kebab_case`],
//!   [`to_pascal_case`], [`to_snake_case`] - word-boundary detection and
//!   case conversion
//! - [`dedent`], [`dedent_raw`], [`dedent_parts`], [`dedent_parts_raw`] -
//!   indentation normalization for multi-line text
//! - [`format_str`] - positional `%`-specifier message formatting
//! - [`sanitize_identifier`] - identifier repair
//! - [`invariant`] - truthiness assertion backed by the formatter
//!
//! Every operation is synchronous and allocation-only; nothing here
//! touches the filesystem or keeps state between calls.

mod case;
mod dedent;
mod error;
mod format;
mod ident;
mod invariant;

pub use case::{capitalize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
pub use dedent::{dedent, dedent_parts, dedent_parts_raw, dedent_raw};
pub use error::{Error, Result};
pub use format::format_str;
pub use ident::sanitize_identifier;
pub use invariant::invariant;
