//! Streaming JSON codec for Service Fabric DTOs.

mod enums;
mod object;
mod paged;
mod polymorphic;
mod raw;
mod reader;
mod traits;
mod writer;

#[cfg(feature = "serde")]
mod serde;

pub use enums::{decode_enum, encode_enum, WireEnum};
pub use object::{
    read_discriminator, read_field, read_object, same_discriminator, skip_unknown_property,
    write_discriminator, write_field, write_nullable_field, write_object, write_optional_field,
    FamilyMember, JsonObject,
};
pub use paged::PagedList;
pub use polymorphic::{
    decode_polymorphic, encode_polymorphic, DecodeFn, Polymorphic, Variant, VariantTable,
};
pub use raw::RawJson;
pub use reader::{JsonRead, JsonReader, TokenKind, DEFAULT_MAX_DEPTH};
pub use traits::{ByteArray, DtoType, JsonDecode, JsonEncode};
pub use writer::{JsonWrite, JsonWriter};

#[cfg(feature = "serde")]
pub use self::serde::SerdeJson;
