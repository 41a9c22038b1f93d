//! Small, dependable building blocks for everyday string and value
//! plumbing.
//!
//! This crate re-exports the whole bric toolkit so a single dependency
//! covers it all:
//!
//! - case conversion: [`capitalize`], [`to_camel_case`],
//!   [`to_kebab_case`], [`to_pascal_case`], [`to_snake_case`]
//! - multi-line text: [`dedent`], [`dedent_raw`], [`dedent_parts`],
//!   [`dedent_parts_raw`]
//! - message formatting: [`format_str`], [`invariant`]
//! - identifiers: [`sanitize_identifier`]
//! - URL paths: [`join_url`] and the slash helpers
//! - JSON objects: [`has_own`], [`get_own`], [`changed_keys`], [`omit`],
//!   [`is_truthy`], [`is_nullish`]
//! - numbers: [`clamp`]
//!
//! Everything is a pure, synchronous function; there is no I/O, no
//! shared state, and no `unsafe`.

pub use bric_core::{
    Error, Result, capitalize, dedent, dedent_parts, dedent_parts_raw, dedent_raw, format_str,
    invariant, sanitize_identifier, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case,
};
pub use bric_util::{
    append_trailing_slash, changed_keys, clamp, get_own, has_own, is_nullish, is_truthy, join_url,
    omit, prepend_leading_slash, trim_leading_slash, trim_trailing_slash,
};
