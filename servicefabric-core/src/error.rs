//! Error types for Service Fabric DTO encoding and decoding.

use std::io;
use thiserror::Error;

/// Classification of a [`FabricError`], independent of any context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token stream is not the JSON structure a converter expected.
    MalformedInput,
    /// A polymorphic object did not start with its discriminator property.
    SchemaViolation,
    /// A discriminator value is not registered for its family.
    UnknownVariant,
    /// An enum member without a wire string was presented for encoding.
    UnsupportedEnumValue,
    /// A family member whose tag is missing from the variant table was presented for encoding.
    UnsupportedVariant,
    /// Invalid codec configuration.
    Configuration,
    /// I/O failure from the standard library.
    Io,
}

/// The main error type for the codec layer.
#[derive(Debug, Error)]
pub enum FabricError {
    /// The token stream does not conform to the structure a converter expects.
    #[error("malformed input at offset {offset}: {message}")]
    MalformedInput {
        /// Byte offset into the input where the problem was detected.
        offset: usize,
        /// Description of what was expected.
        message: String,
    },

    /// A discriminated family's first property is not the discriminator.
    #[error(
        "schema violation: {family} requires `{expected}` as its first property, found `{found}`"
    )]
    SchemaViolation {
        /// Family being decoded.
        family: &'static str,
        /// Discriminator property name the family requires.
        expected: &'static str,
        /// Property name (or token) found instead.
        found: String,
    },

    /// A discriminator value matched no registered variant.
    #[error("unknown variant `{tag}` for {family}")]
    UnknownVariant {
        /// Family being decoded.
        family: &'static str,
        /// Discriminator value read from the input.
        tag: String,
    },

    /// An enum value outside the wire table was presented for encoding.
    #[error("unsupported enum value {value} for {enum_name}")]
    UnsupportedEnumValue {
        /// Enum type name.
        enum_name: &'static str,
        /// Debug rendering of the rejected member.
        value: String,
    },

    /// A family member outside the variant table was presented for encoding.
    #[error("unsupported variant `{tag}` for {family}")]
    UnsupportedVariant {
        /// Family being encoded.
        family: &'static str,
        /// Tag reported by the value.
        tag: String,
    },

    /// Decoding failed while reading the named DTO type.
    #[error("failed to decode {type_name}: {source}")]
    Decode {
        /// DTO type being decoded.
        type_name: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<FabricError>,
    },

    /// Encoding failed while writing the named DTO type.
    #[error("failed to encode {type_name}: {source}")]
    Encode {
        /// DTO type being encoded.
        type_name: &'static str,
        /// Underlying failure.
        #[source]
        source: Box<FabricError>,
    },

    /// Configuration errors (invalid settings).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// I/O errors from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FabricError {
    /// Creates a [`FabricError::MalformedInput`] at the given offset.
    pub fn malformed(offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            offset,
            message: message.into(),
        }
    }

    /// Wraps this error with the name of the DTO type being decoded.
    pub fn decoding(self, type_name: &'static str) -> Self {
        Self::Decode {
            type_name,
            source: Box::new(self),
        }
    }

    /// Wraps this error with the name of the DTO type being encoded.
    pub fn encoding(self, type_name: &'static str) -> Self {
        Self::Encode {
            type_name,
            source: Box::new(self),
        }
    }

    /// Returns the kind of the innermost error, looking through context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::SchemaViolation { .. } => ErrorKind::SchemaViolation,
            Self::UnknownVariant { .. } => ErrorKind::UnknownVariant,
            Self::UnsupportedEnumValue { .. } => ErrorKind::UnsupportedEnumValue,
            Self::UnsupportedVariant { .. } => ErrorKind::UnsupportedVariant,
            Self::Decode { source, .. } | Self::Encode { source, .. } => source.kind(),
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the DTO type named by the outermost context wrapper, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Self::Decode { type_name, .. } | Self::Encode { type_name, .. } => Some(*type_name),
            _ => None,
        }
    }
}

/// A specialized `Result` type for codec operations.
pub type Result<T> = std::result::Result<T, FabricError>;
