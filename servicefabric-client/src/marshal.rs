//! Request and response body marshalling.
//!
//! [`Marshaller`] is the seam an HTTP layer calls once per operation: it decodes a
//! response body into the operation's DTO type and encodes request DTOs, applying
//! the configured limits and naming the DTO type in any error.

use servicefabric_core::codec::{DtoType, JsonDecode, JsonEncode, JsonReader, JsonWriter};
use servicefabric_core::{FabricError, Result};
use tracing::{debug, warn};

use crate::config::CodecConfig;

/// Encodes and decodes complete JSON bodies.
#[derive(Debug, Clone, Default)]
pub struct Marshaller {
    config: CodecConfig,
}

impl Marshaller {
    /// Creates a marshaller with the given configuration.
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decodes a complete body. Anything but whitespace after the value is an error.
    pub fn decode<T: JsonDecode + DtoType>(&self, body: &[u8]) -> Result<T> {
        let mut reader = JsonReader::new(body).with_max_depth(self.config.max_depth());
        let result = T::decode(&mut reader).and_then(|value| {
            reader.finish()?;
            Ok(value)
        });

        match result {
            Ok(value) => {
                debug!(type_name = T::TYPE_NAME, bytes = body.len(), "decoded body");
                Ok(value)
            }
            Err(e) => {
                warn!(type_name = T::TYPE_NAME, error = %e, "failed to decode body");
                Err(e.decoding(T::TYPE_NAME))
            }
        }
    }

    /// Decodes a complete body from text.
    pub fn decode_str<T: JsonDecode + DtoType>(&self, body: &str) -> Result<T> {
        self.decode(body.as_bytes())
    }

    /// Encodes a value as a complete body.
    pub fn encode<T: JsonEncode + DtoType + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let mut writer = JsonWriter::with_capacity(self.config.initial_capacity())
            .with_pretty(self.config.pretty());
        let result = value.encode(&mut writer).and_then(|()| {
            if writer.is_complete() {
                Ok(())
            } else {
                Err(FabricError::malformed(
                    writer.len(),
                    "encoder did not produce exactly one complete value",
                ))
            }
        });

        match result {
            Ok(()) => {
                debug!(type_name = T::TYPE_NAME, bytes = writer.len(), "encoded body");
                Ok(writer.into_bytes())
            }
            Err(e) => {
                warn!(type_name = T::TYPE_NAME, error = %e, "failed to encode body");
                Err(e.encoding(T::TYPE_NAME))
            }
        }
    }

    /// Encodes a value as a complete body and returns it as text.
    pub fn encode_to_string<T: JsonEncode + DtoType + ?Sized>(&self, value: &T) -> Result<String> {
        let bytes = self.encode(value)?;
        String::from_utf8(bytes)
            .map_err(|e| FabricError::malformed(e.utf8_error().valid_up_to(), "output is not UTF-8"))
    }
}
