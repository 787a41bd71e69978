//! Codec configuration types and builders.

use servicefabric_core::codec::DEFAULT_MAX_DEPTH;
use servicefabric_core::FabricError;

/// Default initial capacity of the output buffer in bytes.
const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Largest `max_depth` a [`CodecConfig`] accepts.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Configuration error returned when validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the validation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for FabricError {
    fn from(err: ConfigError) -> Self {
        FabricError::Configuration(err.message)
    }
}

/// Settings shared by every body encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    max_depth: usize,
    pretty: bool,
    initial_capacity: usize,
}

impl CodecConfig {
    /// Creates a new codec configuration builder.
    pub fn builder() -> CodecConfigBuilder {
        CodecConfigBuilder::new()
    }

    /// Returns the maximum container nesting depth accepted on decode.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns whether encoded bodies are pretty printed.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Returns the initial output buffer capacity in bytes.
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            pretty: false,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

/// Builder for `CodecConfig`.
#[derive(Debug, Clone, Default)]
pub struct CodecConfigBuilder {
    max_depth: Option<usize>,
    pretty: Option<bool>,
    initial_capacity: Option<usize>,
}

impl CodecConfigBuilder {
    /// Creates a new codec configuration builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum container nesting depth accepted on decode.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Enables or disables pretty printed output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = Some(pretty);
        self
    }

    /// Sets the initial output buffer capacity in bytes.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Builds the configuration, returning an error if validation fails.
    pub fn build(self) -> Result<CodecConfig, ConfigError> {
        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        let initial_capacity = self.initial_capacity.unwrap_or(DEFAULT_INITIAL_CAPACITY);

        if max_depth == 0 {
            return Err(ConfigError::new("max_depth must be greater than zero"));
        }
        if max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::new(format!(
                "max_depth must not exceed {MAX_DEPTH_LIMIT}, got {max_depth}"
            )));
        }

        if initial_capacity == 0 {
            return Err(ConfigError::new(
                "initial_capacity must be greater than zero",
            ));
        }

        Ok(CodecConfig {
            max_depth,
            pretty: self.pretty.unwrap_or(false),
            initial_capacity,
        })
    }
}
