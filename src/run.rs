//! Application execution logic.
//!
//! Runs the configured option pairs through the registry and renders the
//! resulting option store.

use thiserror::Error;

use optval::config::{OutputFormat, ValidatedConfig};
use optval::registry::{ApplyError, HandlerRegistry};
use optval::store::MemoryOptionStore;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// An option value was rejected or the option is unknown.
    #[error(transparent)]
    Apply(#[from] ApplyError),

    /// Failed to render the option store.
    #[error("Failed to serialize option store: {0}")]
    Serialize(String),
}

/// Executes one validation pass and returns the rendered store.
///
/// This function:
/// 1. Applies the preset pairs from the config file
/// 2. Applies the command-line pairs, which overwrite preset values
/// 3. Renders the store in the configured format
///
/// # Errors
///
/// Returns an error if any pair is rejected or the store cannot be rendered.
pub fn execute(config: &ValidatedConfig) -> Result<String, RunError> {
    let store = build_store(config)?;
    tracing::info!(
        "Validated {} option(s), {} key(s) set",
        config.pairs().count(),
        store.len()
    );
    render(&store, config.format)
}

/// Applies every preset and command-line pair to a fresh store.
///
/// # Errors
///
/// Returns the first [`ApplyError`] encountered.
pub fn build_store(config: &ValidatedConfig) -> Result<MemoryOptionStore, ApplyError> {
    let mut store = MemoryOptionStore::new();
    config.registry.apply_all(&mut store, config.pairs())?;
    Ok(store)
}

/// Renders the store as JSON or TOML.
///
/// # Errors
///
/// Returns [`RunError::Serialize`] if the serializer fails.
pub fn render(store: &MemoryOptionStore, format: OutputFormat) -> Result<String, RunError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(store).map_err(|e| RunError::Serialize(e.to_string()))
        }
        OutputFormat::Toml => {
            toml::to_string(store).map_err(|e| RunError::Serialize(e.to_string()))
        }
    }
}

/// Formats the option table, one `name<TAB>kind` line per option.
#[must_use]
pub fn list_options(registry: &HandlerRegistry) -> String {
    registry
        .iter()
        .map(|(name, handler)| format!("{name}\t{}\n", handler.kind()))
        .collect()
}
