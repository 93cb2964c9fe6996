//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::collections::HashSet;
use std::fmt::{self, Display};
use std::path::Path;

use crate::handler::{
    BooleanHandler, Bounds, DefaultHandler, FloatNumberHandler, HttpProxyHandler, LogHandler,
    NullHandler, NumberHandler, OptionHandler, ParameterHandler, UnitNumberHandler,
};
use crate::registry::{HandlerRegistry, OptionArg};
use crate::store::MemoryOptionStore;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::{OptionDecl, OptionKind, TomlConfig};

/// Output format for the resulting option store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    Json,
    /// Flat TOML table
    Toml,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Option name -> handler table
    pub registry: HandlerRegistry,

    /// Preset pairs from the config file, applied first
    pub preset: Vec<OptionArg>,

    /// Pairs from the command line, applied after the preset
    pub args: Vec<OptionArg>,

    /// Output format for the option store
    pub format: OutputFormat,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ options: {}, preset: {}, args: {}, format: {} }}",
            self.registry.len(),
            self.preset.len(),
            self.args.len(),
            self.format,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An option declaration is invalid (duplicate, empty name, bad bounds)
    /// - A preset value is rejected by its handler
    /// - The trailing option list cannot be tokenized
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let registry = Self::build_registry(cli, toml)?;

        let preset = Self::resolve_preset(&registry, toml)?;

        let args = cli.option_args()?;

        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            registry,
            preset,
            args,
            format,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns preset pairs followed by command-line pairs.
    pub fn pairs(&self) -> impl Iterator<Item = &OptionArg> {
        self.preset.iter().chain(&self.args)
    }

    fn build_registry(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<HandlerRegistry, ConfigError> {
        // Built-in table unless disabled by CLI flag or TOML setting
        let include_builtin = !cli.no_builtin
            && toml
                .and_then(|t| t.registry.include_builtin)
                .unwrap_or(true);

        let mut registry = if include_builtin {
            HandlerRegistry::builtin()
        } else {
            HandlerRegistry::new()
        };

        // Declared options replace built-in ones
        if let Some(toml) = toml {
            registry.extend(build_declared(&toml.options)?);
        }

        Ok(registry)
    }

    fn resolve_preset(
        registry: &HandlerRegistry,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<OptionArg>, ConfigError> {
        let preset: Vec<OptionArg> = toml
            .map(|t| {
                t.preset
                    .iter()
                    .map(|(name, value)| OptionArg::new(name.as_str(), value.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        // Dry run so a bad preset fails at load time, not mid-run
        registry
            .apply_all(&mut MemoryOptionStore::new(), &preset)
            .map_err(ConfigError::Preset)?;

        Ok(preset)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // Priority: CLI explicit > TOML > default
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let format_str = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(format_str)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "toml" => Ok(OutputFormat::Toml),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}

fn build_declared(decls: &[OptionDecl]) -> Result<HandlerRegistry, ConfigError> {
    let mut seen = HashSet::new();
    let mut registry = HandlerRegistry::new();

    for decl in decls {
        if decl.name.is_empty() {
            return Err(ConfigError::EmptyOptionName);
        }
        if !seen.insert(decl.name.as_str()) {
            return Err(ConfigError::DuplicateOption {
                name: decl.name.clone(),
            });
        }
        registry.insert(decl.name.clone(), build_handler(decl)?);
    }

    Ok(registry)
}

fn build_handler(decl: &OptionDecl) -> Result<OptionHandler, ConfigError> {
    let name = decl.name.as_str();

    let handler: OptionHandler = match &decl.kind {
        OptionKind::Null => NullHandler.into(),
        OptionKind::Boolean => BooleanHandler::new(name).into(),
        OptionKind::Number { min, max } => {
            NumberHandler::with_bounds(name, ordered_bounds(name, *min, *max)?).into()
        }
        OptionKind::UnitNumber { min, max } => {
            UnitNumberHandler::with_bounds(name, ordered_bounds(name, *min, *max)?).into()
        }
        OptionKind::FloatNumber { min, max } => {
            FloatNumberHandler::with_bounds(name, ordered_bounds(name, *min, *max)?).into()
        }
        OptionKind::Parameter { values } => {
            if values.is_empty() {
                return Err(ConfigError::EmptyParameterList {
                    option: name.to_string(),
                });
            }
            ParameterHandler::new(name, values.iter().map(String::as_str)).into()
        }
        OptionKind::Default => DefaultHandler::new(name).into(),
        OptionKind::Log => LogHandler::new(name).into(),
        OptionKind::HttpProxy => HttpProxyHandler::new(name).into(),
    };

    Ok(handler)
}

fn ordered_bounds<T: PartialOrd + Display>(
    option: &str,
    min: Option<T>,
    max: Option<T>,
) -> Result<Bounds<T>, ConfigError> {
    let bounds = Bounds::new(min, max);
    if let Some(bound) = bounds.incomparable() {
        return Err(ConfigError::IncomparableBound {
            option: option.to_string(),
            bound: bound.to_string(),
        });
    }
    if let (false, Some(min), Some(max)) = (bounds.is_ordered(), &bounds.min, &bounds.max) {
        return Err(ConfigError::InvalidBounds {
            option: option.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(bounds)
}
