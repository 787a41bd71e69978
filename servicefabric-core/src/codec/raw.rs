//! Pass-through support for JSON fragments the codec does not model.

use std::fmt;

use super::traits::DtoType;
use super::{JsonDecode, JsonEncode, JsonRead, JsonReader, JsonWrite};
use crate::error::Result;

/// A JSON value kept as its source text.
///
/// Decoding captures the exact text of one value; encoding splices it back
/// into the output unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawJson {
    json: String,
}

impl RawJson {
    /// Creates a `RawJson` from a JSON string.
    ///
    /// Note: This does not validate that the string is valid JSON; see [`RawJson::parse`].
    pub fn from_string(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }

    /// Creates a `RawJson` after checking that the text is exactly one JSON value.
    pub fn parse(json: &str) -> Result<Self> {
        let mut reader = JsonReader::from_str(json);
        reader.skip_value()?;
        reader.finish()?;
        Ok(Self::from_string(json.trim()))
    }

    /// Returns the JSON string as a reference.
    pub fn as_str(&self) -> &str {
        &self.json
    }

    /// Consumes the wrapper and returns the inner JSON string.
    pub fn into_string(self) -> String {
        self.json
    }
}

impl RawJson {
    /// Creates a `RawJson` from a serde_json `Value`.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let json = serde_json::to_string(value).map_err(|e| {
            crate::error::FabricError::malformed(0, format!("serde_json serialize failed: {e}"))
        })?;
        Ok(Self { json })
    }

    /// Parses the JSON string into a serde_json `Value`.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.json).map_err(|e| {
            crate::error::FabricError::malformed(e.column(), format!("invalid JSON: {e}"))
        })
    }
}

impl fmt::Display for RawJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.json)
    }
}

impl DtoType for RawJson {
    const TYPE_NAME: &'static str = "RawJson";
}

impl JsonDecode for RawJson {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        let json = reader.read_raw_value()?;
        Ok(Self { json })
    }
}

impl JsonEncode for RawJson {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_raw(&self.json)
    }
}

impl From<String> for RawJson {
    fn from(json: String) -> Self {
        Self::from_string(json)
    }
}

impl From<&str> for RawJson {
    fn from(json: &str) -> Self {
        Self::from_string(json)
    }
}
