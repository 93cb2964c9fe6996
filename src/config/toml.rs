//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde: extra option
//! declarations, preset values and output settings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Registry configuration section
    #[serde(default)]
    pub registry: RegistrySection,

    /// Option declarations (`[[option]]` array of tables)
    #[serde(default, rename = "option")]
    pub options: Vec<OptionDecl>,

    /// Values applied before the command-line pairs
    #[serde(default)]
    pub preset: BTreeMap<String, String>,

    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,
}

/// Registry configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Load the built-in option table (default: true)
    pub include_builtin: Option<bool>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "json" or "toml"
    pub format: Option<String>,
}

/// One `[[option]]` entry.
///
/// Read through a flat table that rejects unknown keys, then checked so that
/// `min`/`max` only appear on numeric kinds and `values` only on parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawOptionDecl")]
pub struct OptionDecl {
    /// Option name as used on the command line, without dashes
    pub name: String,

    /// Handler kind and its constraints
    pub kind: OptionKind,
}

/// Handler kind selected by the `type` key, with per-kind constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    /// Recognized and ignored
    Null,
    /// `true` / `false`
    Boolean,
    /// Integer with optional inclusive bounds
    Number {
        /// Inclusive minimum
        min: Option<i64>,
        /// Inclusive maximum
        max: Option<i64>,
    },
    /// Byte count with `K`/`M` suffix and optional inclusive bounds
    UnitNumber {
        /// Inclusive minimum, in bytes
        min: Option<u64>,
        /// Inclusive maximum, in bytes
        max: Option<u64>,
    },
    /// Float with optional inclusive bounds
    FloatNumber {
        /// Inclusive minimum
        min: Option<f64>,
        /// Inclusive maximum
        max: Option<f64>,
    },
    /// One of a fixed list of values
    Parameter {
        /// Accepted values
        values: Vec<String>,
    },
    /// Free-form string
    Default,
    /// Log destination (`-` for stdout)
    Log,
    /// `host:port` HTTP proxy
    HttpProxy,
}

/// `[[option]]` table as written in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptionDecl {
    name: String,
    #[serde(rename = "type")]
    kind: KindTag,
    min: Option<toml::Value>,
    max: Option<toml::Value>,
    values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum KindTag {
    Null,
    Boolean,
    Number,
    UnitNumber,
    FloatNumber,
    Parameter,
    Default,
    Log,
    HttpProxy,
}

impl KindTag {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::UnitNumber => "unit-number",
            Self::FloatNumber => "float-number",
            Self::Parameter => "parameter",
            Self::Default => "default",
            Self::Log => "log",
            Self::HttpProxy => "http-proxy",
        }
    }

    const fn takes_bounds(self) -> bool {
        matches!(self, Self::Number | Self::UnitNumber | Self::FloatNumber)
    }
}

impl TryFrom<RawOptionDecl> for OptionDecl {
    type Error = String;

    fn try_from(raw: RawOptionDecl) -> Result<Self, Self::Error> {
        let RawOptionDecl {
            name,
            kind,
            min,
            max,
            values,
        } = raw;

        let misplaced = [
            ("min", min.is_some() && !kind.takes_bounds()),
            ("max", max.is_some() && !kind.takes_bounds()),
            ("values", values.is_some() && kind != KindTag::Parameter),
        ]
        .into_iter()
        .find_map(|(key, misplaced)| misplaced.then_some(key));
        if let Some(key) = misplaced {
            return Err(format!(
                "option '{name}': key `{key}` does not apply to type `{}`",
                kind.as_str()
            ));
        }

        let kind = match kind {
            KindTag::Null => OptionKind::Null,
            KindTag::Boolean => OptionKind::Boolean,
            KindTag::Number => OptionKind::Number {
                min: integer_bound(&name, "min", min)?,
                max: integer_bound(&name, "max", max)?,
            },
            KindTag::UnitNumber => OptionKind::UnitNumber {
                min: byte_bound(&name, "min", min)?,
                max: byte_bound(&name, "max", max)?,
            },
            KindTag::FloatNumber => OptionKind::FloatNumber {
                min: float_bound(&name, "min", min)?,
                max: float_bound(&name, "max", max)?,
            },
            KindTag::Parameter => OptionKind::Parameter {
                values: values.unwrap_or_default(),
            },
            KindTag::Default => OptionKind::Default,
            KindTag::Log => OptionKind::Log,
            KindTag::HttpProxy => OptionKind::HttpProxy,
        };

        Ok(Self { name, kind })
    }
}

fn integer_bound(
    option: &str,
    key: &str,
    value: Option<toml::Value>,
) -> Result<Option<i64>, String> {
    match value {
        None => Ok(None),
        Some(toml::Value::Integer(n)) => Ok(Some(n)),
        Some(other) => Err(format!(
            "option '{option}': `{key}` must be an integer, found {}",
            other.type_str()
        )),
    }
}

fn byte_bound(option: &str, key: &str, value: Option<toml::Value>) -> Result<Option<u64>, String> {
    integer_bound(option, key, value)?
        .map(|n| {
            u64::try_from(n)
                .map_err(|_| format!("option '{option}': `{key}` must not be negative, found {n}"))
        })
        .transpose()
}

#[allow(clippy::cast_precision_loss)]
fn float_bound(option: &str, key: &str, value: Option<toml::Value>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(toml::Value::Float(f)) => Ok(Some(f)),
        Some(toml::Value::Integer(n)) => Ok(Some(n as f64)),
        Some(other) => Err(format!(
            "option '{option}': `{key}` must be a number, found {}",
            other.type_str()
        )),
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# optval configuration file

[registry]
# Load the built-in option table (default: true)
# Can also be disabled with the --no-builtin CLI flag
# include_builtin = true

# Extra options. Declarations replace built-in options of the same name.
# type: null | boolean | number | unit-number | float-number
#       | parameter | default | log | http-proxy
#
# [[option]]
# name = "max-connections"
# type = "number"
# min = 1
# max = 16
#
# [[option]]
# name = "disk-cache"
# type = "unit-number"        # accepts K and M suffixes
# max = 268435456
#
# [[option]]
# name = "file-allocation"
# type = "parameter"
# values = ["none", "prealloc", "falloc"]

[preset]
# Values applied before command-line options (CLI values win)
# split = "4"
# log = "-"

[output]
# Output format: "json" or "toml" (default: json)
# format = "json"
"#
    .to_string()
}
