//! Companion helpers for the bric utility library.
//!
//! Small, self-contained collaborators around the [`bric-core`] text
//! toolkit:
//!
//! - [`join_url`] and the slash helpers - URL path assembly
//! - [`has_own`], [`get_own`], [`changed_keys`], [`omit`] - property
//!   helpers over JSON object values
//! - [`is_truthy`], [`is_nullish`] - truthiness predicates
//! - [`clamp`] - numeric range clamping
//!
//! [`bric-core`]: bric_core

mod guards;
mod num;
mod object;
mod path;

pub use guards::{is_nullish, is_truthy};
pub use num::clamp;
pub use object::{changed_keys, get_own, has_own, omit};
pub use path::{
    append_trailing_slash, join_url, prepend_leading_slash, trim_leading_slash,
    trim_trailing_slash,
};
