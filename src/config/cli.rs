//! CLI argument parsing using clap.
//!
//! Defines the command-line interface and the tokenizer that turns the
//! trailing `--name value` list into [`OptionArg`] pairs.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::registry::OptionArg;

use super::error::ConfigError;

/// optval: command-line option validator
///
/// Runs `--name value` pairs through their option handlers and prints the
/// resulting canonical option store.
#[derive(Debug, Parser)]
#[command(name = "optval")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for the option store
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Do not load the built-in option table
    #[arg(long = "no-builtin", global = true)]
    pub no_builtin: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Option pairs to validate, given after `--` (e.g. `-- --split 4 --log -`)
    #[arg(last = true, value_name = "OPTIONS", allow_hyphen_values = true)]
    pub options: Vec<String>,
}

/// Subcommands for optval
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "optval.toml")]
        output: PathBuf,
    },

    /// List every registered option and its handler kind
    List,
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON object
    #[value(name = "json")]
    Json,
    /// Flat TOML table
    #[value(name = "toml")]
    Toml,
}

impl From<FormatArg> for super::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Toml => Self::Toml,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if this is the list command.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.command, Some(Command::List))
    }

    /// Tokenizes the trailing option list into pairs.
    ///
    /// # Errors
    ///
    /// See [`parse_option_args`].
    pub fn option_args(&self) -> Result<Vec<OptionArg>, ConfigError> {
        parse_option_args(self.options.as_slice())
    }
}

/// Splits `--name value` and `--name=value` tokens into pairs.
///
/// The token after a bare `--name` is always its value, even if it starts
/// with a dash (`--log -`, `--max-tries -1`).
///
/// # Errors
///
/// Returns [`ConfigError::UnexpectedArgument`] for a token that should be an
/// option name but is not `--name`, and [`ConfigError::MissingValue`] for a
/// trailing `--name` with nothing after it.
pub fn parse_option_args<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<OptionArg>, ConfigError> {
    let mut args = Vec::with_capacity(tokens.len() / 2);
    let mut tokens = tokens.iter().map(AsRef::<str>::as_ref);

    while let Some(token) = tokens.next() {
        let flag = token
            .strip_prefix("--")
            .filter(|flag| !flag.is_empty() && !flag.starts_with('='))
            .ok_or_else(|| ConfigError::UnexpectedArgument {
                value: token.to_string(),
            })?;

        if let Some((name, value)) = flag.split_once('=') {
            args.push(OptionArg::new(name, value));
            continue;
        }

        let value = tokens.next().ok_or_else(|| ConfigError::MissingValue {
            option: flag.to_string(),
        })?;
        args.push(OptionArg::new(flag, value));
    }

    Ok(args)
}
