//! Configuration layer for optval.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`]) and option-pair tokenizing
//!   ([`parse_option_args`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values and the built-in option table ([`defaults`])
//!
//! # Priority
//!
//! Option values are resolved with the following priority (highest to lowest):
//!
//! 1. **Command-line pairs** - `--name value` given after `--`
//! 2. **TOML preset** - values from the `[preset]` table
//! 3. **Unset** - the key is absent from the store
//!
//! Both sources go through the same handlers, in that order, so a CLI value
//! simply overwrites the preset value for the same key.
//!
//! # Option Table
//!
//! The built-in option table is loaded unless `--no-builtin` is given or
//! `registry.include_builtin = false` is set. `[[option]]` declarations in
//! the config file are added on top and replace built-in options that share
//! a name. Duplicate declarations within one file are an error.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FormatArg, parse_option_args};
pub use error::ConfigError;
pub use toml::{OptionDecl, OptionKind, TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, write_default_config};
