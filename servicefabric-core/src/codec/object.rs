//! Flat-object codec support.
//!
//! A flat object is decoded by reading property names until the end of the object,
//! dispatching each known name to the field's decoder and skipping unknown names.
//! The caller positions the reader at the opening `{`; [`read_object`] consumes it
//! and hands over to [`JsonObject::read_fields`]. Polymorphic dispatch calls
//! `read_fields` directly after consuming the discriminator.

use super::traits::DtoType;
use super::{JsonDecode, JsonEncode, JsonRead, JsonWrite};
use crate::error::{FabricError, Result};

/// Trait for DTOs encoded as a JSON object with a fixed field list.
///
/// Usually derived with `#[derive(JsonObject)]`.
pub trait JsonObject: DtoType + Sized {
    /// Reads the remaining properties of an already opened object, up to and
    /// including the closing `}`.
    fn read_fields(reader: &mut dyn JsonRead) -> Result<Self>;

    /// Writes this value's properties in declaration order, without braces.
    fn write_fields(&self, writer: &mut dyn JsonWrite) -> Result<()>;
}

/// A flat object that is one member of a discriminated family.
///
/// Its `write_fields` writes the discriminator first. Its `read_fields` accepts the
/// discriminator property if present and rejects any value other than [`Self::TAG`].
pub trait FamilyMember: JsonObject {
    /// Name of the family's discriminator property.
    const DISCRIMINATOR: &'static str;

    /// Discriminator value identifying this member.
    const TAG: &'static str;
}

/// Decodes a complete object: `{`, the fields, and `}`.
pub fn read_object<T: JsonObject>(reader: &mut dyn JsonRead) -> Result<T> {
    reader.read_begin_object()?;
    T::read_fields(reader)
}

/// Encodes a complete object: `{`, the fields, and `}`.
pub fn write_object<T: JsonObject>(value: &T, writer: &mut dyn JsonWrite) -> Result<()> {
    writer.begin_object()?;
    value.write_fields(writer)?;
    writer.end_object()
}

/// Skips the value of a property the type does not know.
pub fn skip_unknown_property(
    reader: &mut dyn JsonRead,
    type_name: &'static str,
    property: &str,
) -> Result<()> {
    tracing::trace!(type_name, property, "skipping unknown property");
    reader.skip_value()
}

/// Decodes a field value; used by generated `read_fields` bodies.
pub fn read_field<T: JsonDecode>(reader: &mut dyn JsonRead) -> Result<Option<T>> {
    T::decode(reader).map(Some)
}

/// Writes a property that is always emitted.
pub fn write_field<T: JsonEncode + ?Sized>(
    writer: &mut dyn JsonWrite,
    name: &str,
    value: &T,
) -> Result<()> {
    writer.property(name)?;
    value.encode(writer)
}

/// Writes a property only when the value is present.
pub fn write_optional_field<T: JsonEncode>(
    writer: &mut dyn JsonWrite,
    name: &str,
    value: &Option<T>,
) -> Result<()> {
    match value {
        Some(value) => write_field(writer, name, value),
        None => Ok(()),
    }
}

/// Writes a property whose absent value is an explicit `null`.
pub fn write_nullable_field<T: JsonEncode>(
    writer: &mut dyn JsonWrite,
    name: &str,
    value: &Option<T>,
) -> Result<()> {
    writer.property(name)?;
    value.encode(writer)
}

/// Reads the discriminator value met while decoding a member's own fields.
///
/// A value naming a different member fails with [`FabricError::UnknownVariant`].
pub fn read_discriminator<T: FamilyMember>(reader: &mut dyn JsonRead) -> Result<()> {
    let tag = reader.read_string()?;
    if tag == T::TAG {
        Ok(())
    } else {
        Err(FabricError::UnknownVariant {
            family: T::TYPE_NAME,
            tag,
        })
    }
}

/// `const` string equality; derived families use it to check each member's
/// discriminator name at compile time.
pub const fn same_discriminator(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Writes the discriminator property of a family member.
pub fn write_discriminator(writer: &mut dyn JsonWrite, name: &str, tag: &str) -> Result<()> {
    writer.property(name)?;
    writer.write_string(tag)
}
