//! Error contract shared by the bric crates.

use serde_json::Value;
use thiserror::Error;

use crate::format::format_str;

/// Result type for fallible bric operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A dynamically-typed value of the wrong kind was supplied.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// An asserted invariant did not hold. The message is already
    /// rendered through [`format_str`].
    #[error("{message}")]
    Invariant { message: String },
}

impl Error {
    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create an `Invariant` error, rendering the message template with
    /// the positional `args` through [`format_str`].
    pub fn invariant(message: &str, args: &[Value]) -> Self {
        Error::Invariant {
            message: format_str(message, args),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_invariant_message_is_formatted() {
        let err = Error::invariant("Hello %s", &[json!("world")]);
        assert_eq!(
            err,
            Error::Invariant {
                message: "Hello world".to_string()
            }
        );
    }

    #[test]
    fn test_display_is_the_formatted_message() {
        let err = Error::invariant("Count: %d", &[json!(5)]);
        assert_eq!(err.to_string(), "Count: 5");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = Error::invalid_argument("expected an object value");
        assert_eq!(
            err.to_string(),
            "invalid argument: expected an object value"
        );
    }
}
