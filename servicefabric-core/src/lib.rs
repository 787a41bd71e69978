//! Core codec types for the Service Fabric REST client.
//!
//! Provides a streaming JSON token reader and writer, the converter traits every
//! DTO implements, and the machinery for the three DTO shapes: flat objects,
//! string-carried enums, and discriminated families.

#![warn(missing_docs)]

pub mod codec;
pub mod error;

pub use codec::{
    ByteArray, DtoType, FamilyMember, JsonDecode, JsonEncode, JsonObject, JsonRead, JsonReader,
    JsonWrite, JsonWriter, PagedList, Polymorphic, RawJson, WireEnum,
};
pub use error::{ErrorKind, FabricError, Result};

#[cfg(feature = "serde")]
pub use codec::SerdeJson;

#[cfg(feature = "derive")]
pub use servicefabric_derive::{JsonObject, Polymorphic, WireEnum};
