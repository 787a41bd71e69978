//! Declarative configuration loading from YAML, TOML, and environment variables.
//!
//! This module provides file-based configuration support through a mirror struct
//! that can be deserialized with serde. It is then converted into the programmatic
//! [`CodecConfig`](crate::config::CodecConfig) using the builder API.
//!
//! # Supported Formats
//!
//! - **YAML** (requires `config-file` feature): `CodecConfig::from_yaml("codec.yaml")`
//! - **TOML** (requires `config-file` feature): `CodecConfig::from_toml("codec.toml")`
//! - **Environment Variables** (always available): `CodecConfig::from_env()`
//!
//! # Example YAML
//!
//! ```yaml
//! max-depth: 64
//! pretty: false
//! initial-capacity: 1024
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{CodecConfig, CodecConfigBuilder, ConfigError};

/// Environment variable for the maximum nesting depth.
pub const ENV_MAX_DEPTH: &str = "SF_CODEC_MAX_DEPTH";
/// Environment variable for pretty printing (`"true"` or `"false"`).
pub const ENV_PRETTY: &str = "SF_CODEC_PRETTY";
/// Environment variable for the initial output buffer capacity.
pub const ENV_INITIAL_CAPACITY: &str = "SF_CODEC_INITIAL_CAPACITY";

/// File-based codec configuration.
///
/// This struct mirrors [`CodecConfig`](crate::config::CodecConfig) with every
/// setting optional. It can be deserialized from YAML or TOML and then converted
/// to `CodecConfig` via [`TryFrom`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct FileConfig {
    /// Maximum container nesting depth accepted on decode.
    pub max_depth: Option<usize>,
    /// Whether encoded bodies are pretty printed.
    pub pretty: Option<bool>,
    /// Initial output buffer capacity in bytes.
    pub initial_capacity: Option<usize>,
}

impl TryFrom<FileConfig> for CodecConfig {
    type Error = ConfigError;

    fn try_from(file: FileConfig) -> Result<Self, Self::Error> {
        let mut builder = CodecConfigBuilder::new();

        if let Some(depth) = file.max_depth {
            builder = builder.max_depth(depth);
        }

        if let Some(pretty) = file.pretty {
            builder = builder.pretty(pretty);
        }

        if let Some(capacity) = file.initial_capacity {
            builder = builder.initial_capacity(capacity);
        }

        builder.build()
    }
}

impl CodecConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Requires the `config-file` feature.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = CodecConfig::from_yaml("servicefabric-codec.yaml")?;
    /// let marshaller = Marshaller::new(config);
    /// ```
    #[cfg(feature = "config-file")]
    pub fn from_yaml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("failed to read YAML config file: {e}"))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses configuration from YAML text.
    ///
    /// Requires the `config-file` feature.
    #[cfg(feature = "config-file")]
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let file_config: FileConfig = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::new(format!("failed to parse YAML config: {e}")))?;
        file_config.try_into()
    }

    /// Loads configuration from a TOML file.
    ///
    /// Requires the `config-file` feature.
    #[cfg(feature = "config-file")]
    pub fn from_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("failed to read TOML config file: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// Requires the `config-file` feature.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file_config: FileConfig = toml_crate::from_str(content)
            .map_err(|e| ConfigError::new(format!("failed to parse TOML config: {e}")))?;
        file_config.try_into()
    }

    /// Loads configuration from environment variables.
    ///
    /// This method is always available (no feature flag required).
    ///
    /// # Supported Environment Variables
    ///
    /// | Variable | Maps to |
    /// |----------|---------|
    /// | `SF_CODEC_MAX_DEPTH` | `max_depth` |
    /// | `SF_CODEC_PRETTY` | `"true"` or `"false"` |
    /// | `SF_CODEC_INITIAL_CAPACITY` | `initial_capacity` in bytes |
    ///
    /// Unset variables keep their defaults; a set variable that does not parse is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut file_config = FileConfig::default();

        if let Some(val) = lookup(ENV_MAX_DEPTH) {
            file_config.max_depth = Some(parse_number(ENV_MAX_DEPTH, &val)?);
        }

        if let Some(val) = lookup(ENV_PRETTY) {
            file_config.pretty = Some(val.trim().eq_ignore_ascii_case("true"));
        }

        if let Some(val) = lookup(ENV_INITIAL_CAPACITY) {
            file_config.initial_capacity = Some(parse_number(ENV_INITIAL_CAPACITY, &val)?);
        }

        file_config.try_into()
    }
}

fn parse_number(key: &str, val: &str) -> Result<usize, ConfigError> {
    val.trim()
        .parse::<usize>()
        .map_err(|e| ConfigError::new(format!("invalid value for {key}: `{val}` ({e})")))
}

/// Convenience function to load a configuration file, auto-detecting format by extension.
///
/// Supports `.yaml`, `.yml`, and `.toml` extensions.
/// Requires the `config-file` feature.
#[cfg(feature = "config-file")]
pub fn load_config<P: AsRef<std::path::Path>>(path: P) -> Result<CodecConfig, ConfigError> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => CodecConfig::from_yaml(path),
        Some("toml") => CodecConfig::from_toml(path),
        Some(ext) => Err(ConfigError::new(format!(
            "unsupported config file extension: .{ext} (expected .yaml, .yml, or .toml)"
        ))),
        None => Err(ConfigError::new(
            "config file has no extension; expected .yaml, .yml, or .toml",
        )),
    }
}
