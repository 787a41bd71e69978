//! Serde integration for types outside the DTO model.
//!
//! [`SerdeJson<T>`] lets any `serde::Serialize + DeserializeOwned` type sit inside
//! a DTO field. The value is captured as raw JSON text and handed to serde_json.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use servicefabric_core::codec::{JsonDecode, SerdeJson};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Annotation {
//!     owner: String,
//!     ttl: u32,
//! }
//!
//! let wrapped = SerdeJson::<Annotation>::from_json_str(r#"{"owner":"ops","ttl":30}"#)?;
//! assert_eq!(wrapped.owner, "ops");
//! ```

use std::ops::{Deref, DerefMut};

use serde::{de::DeserializeOwned, Serialize};

use super::{JsonDecode, JsonEncode, JsonRead, JsonWrite};
use crate::error::{FabricError, Result};

/// A wrapper that encodes and decodes its inner value through serde_json.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SerdeJson<T>(T);

impl<T> SerdeJson<T> {
    /// Creates a new `SerdeJson` wrapper around the given value.
    pub fn new(value: T) -> Self {
        SerdeJson(value)
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for SerdeJson<T> {
    fn from(value: T) -> Self {
        SerdeJson::new(value)
    }
}

impl<T> Deref for SerdeJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for SerdeJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Serialize> JsonEncode for SerdeJson<T> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        let json = serde_json::to_string(&self.0).map_err(|e| {
            FabricError::malformed(0, format!("serde_json serialize failed: {e}"))
        })?;
        writer.write_raw(&json)
    }
}

impl<T: DeserializeOwned> JsonDecode for SerdeJson<T> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        let offset = reader.offset();
        let json = reader.read_raw_value()?;
        let value = serde_json::from_str(&json).map_err(|e| {
            FabricError::malformed(offset, format!("serde_json deserialize failed: {e}"))
        })?;
        Ok(SerdeJson(value))
    }
}
