//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::registry::ApplyError;

/// Error type for configuration operations.
///
/// Covers errors from CLI tokenization, TOML parsing, option-table
/// validation and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The same option name is declared twice in the config file.
    #[error("Option '{name}' is declared more than once")]
    DuplicateOption {
        /// The duplicated option name
        name: String,
    },

    /// An option declaration has an empty name.
    #[error("Option declarations must have a non-empty name")]
    EmptyOptionName,

    /// Declared minimum is greater than declared maximum.
    #[error("Invalid bounds for '{option}': min {min} is greater than max {max}")]
    InvalidBounds {
        /// Option being declared
        option: String,
        /// Declared minimum, formatted
        min: String,
        /// Declared maximum, formatted
        max: String,
    },

    /// A declared bound cannot be compared with values (a float `nan`).
    #[error("Invalid bound for '{option}': {bound} cannot be compared with values")]
    IncomparableBound {
        /// Option being declared
        option: String,
        /// The offending bound, formatted
        bound: String,
    },

    /// A parameter option declares no accepted values.
    #[error("Parameter option '{option}' must list at least one value")]
    EmptyParameterList {
        /// Option being declared
        option: String,
    },

    /// A `--name` token on the command line has no value after it.
    #[error("Missing value for option '--{option}'")]
    MissingValue {
        /// Option without a value
        option: String,
    },

    /// A token where an option name was expected does not start with `--`.
    #[error("Unexpected argument '{value}': expected '--name value' or '--name=value'")]
    UnexpectedArgument {
        /// The offending token
        value: String,
    },

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected json or toml")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },

    /// A preset value from the config file was rejected.
    #[error("Invalid preset: {0}")]
    Preset(#[source] ApplyError),
}
