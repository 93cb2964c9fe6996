//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use optval::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - bad CLI usage, unreadable or invalid config file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Validation error (exit code 2) - an option value was rejected.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn validation_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    match error {
        ConfigError::MissingValue { .. } | ConfigError::UnexpectedArgument { .. } => {
            eprintln!("\nOptions go after '--', e.g. 'optval -- --split 4 --log -'.");
        }
        ConfigError::FileRead { .. } => {
            eprintln!("\nRun 'optval init' to generate a configuration template.");
        }
        ConfigError::Preset(_) => {
            eprintln!("\nCheck the [preset] table in your configuration file.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the option store.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
