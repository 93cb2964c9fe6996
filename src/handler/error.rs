//! Error type for option value validation.

use thiserror::Error;

/// A raw option value was rejected by its handler.
///
/// Every variant is a validation failure; the variants only exist to give
/// callers a precise message (what was given, what was expected). A handler
/// that returns this error has not written anything to the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is neither the true token nor the false token.
    #[error("'{value}' is not a boolean: expected '{expected_true}' or '{expected_false}'")]
    NotBoolean {
        /// The rejected value
        value: String,
        /// Accepted true token
        expected_true: &'static str,
        /// Accepted false token
        expected_false: &'static str,
    },

    /// Value is not a base-10 integer.
    #[error("'{value}' is not an integer")]
    NotInteger {
        /// The rejected value
        value: String,
    },

    /// Value is not a decimal floating-point number.
    #[error("'{value}' is not a finite decimal number")]
    NotFloat {
        /// The rejected value
        value: String,
    },

    /// Parsed value is smaller than the inclusive minimum.
    #[error("{value} is below the minimum of {min}")]
    BelowMinimum {
        /// Parsed value, formatted
        value: String,
        /// Configured minimum, formatted
        min: String,
    },

    /// Parsed value is larger than the inclusive maximum.
    #[error("{value} is above the maximum of {max}")]
    AboveMaximum {
        /// Parsed value, formatted
        value: String,
        /// Configured maximum, formatted
        max: String,
    },

    /// Trailing unit character is not `K` or `M`.
    #[error("'{value}' has unknown unit suffix '{suffix}': expected K or M")]
    UnknownUnit {
        /// The rejected value
        value: String,
        /// The unrecognized suffix
        suffix: char,
    },

    /// Value or its unit expansion does not fit in 64 bits.
    #[error("'{value}' is out of range")]
    Overflow {
        /// The rejected value
        value: String,
    },

    /// Value is not one of the enumerated choices.
    #[error("'{value}' is not one of: {}", expected.join(", "))]
    NotInList {
        /// The rejected value
        value: String,
        /// Accepted values, in declaration order
        expected: Vec<String>,
    },

    /// `host:port` value with no `:` or with more than one.
    #[error("'{value}' is not in HOST:PORT format")]
    MissingSeparator {
        /// The rejected value
        value: String,
    },

    /// `host:port` value where host or port is empty.
    #[error("'{value}' must have a non-empty host and port")]
    EmptyHostOrPort {
        /// The rejected value
        value: String,
    },

    /// Port part of a `host:port` value is not a number in 0-65535.
    #[error("'{port}' is not a valid port number")]
    InvalidPort {
        /// The rejected port substring
        port: String,
    },
}
