//! Truthiness assertion backed by the message formatter.

use serde_json::Value;

use crate::error::{Error, Result};

/// Asserts that `predicate` holds.
///
/// On failure the message template is rendered with the positional
/// `args` through [`format_str`](crate::format_str) and returned as
/// [`Error::Invariant`].
///
/// # Example
///
/// ```
/// use bric_core::invariant;
/// use serde_json::json;
///
/// invariant(true, "never rendered", &[]).unwrap();
///
/// let err = invariant(false, "Value %s is not valid", &[json!("foo")]).unwrap_err();
/// assert_eq!(err.to_string(), "Value foo is not valid");
/// ```
pub fn invariant(predicate: bool, message: &str, args: &[Value]) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        Err(Error::invariant(message, args))
    }
}
