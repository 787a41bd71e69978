//! Discriminated-union (polymorphic family) codec support.
//!
//! Each family keeps its variants in a static [`VariantTable`] mapping the
//! discriminator string to the variant's field reader. On the wire the
//! discriminator must be the first property of the object; decoding reads it,
//! looks it up, and hands the rest of the object to the variant without buffering.

use std::fmt;

use super::traits::DtoType;
use super::{JsonRead, JsonWrite};
use crate::error::{FabricError, Result};

/// Reads the remaining fields of a variant after its discriminator was consumed.
pub type DecodeFn<T> = fn(&mut dyn JsonRead) -> Result<T>;

/// One entry of a [`VariantTable`].
pub struct Variant<T: 'static> {
    tag: &'static str,
    decode: DecodeFn<T>,
}

impl<T> Variant<T> {
    /// Creates a table entry for the given discriminator value.
    pub const fn new(tag: &'static str, decode: DecodeFn<T>) -> Self {
        Self { tag, decode }
    }

    /// Returns the discriminator value of this variant.
    pub fn tag(&self) -> &'static str {
        self.tag
    }
}

impl<T> fmt::Debug for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("tag", &self.tag).finish()
    }
}

/// Static mapping from discriminator value to variant decoder for one family.
pub struct VariantTable<T: 'static> {
    family: &'static str,
    discriminator: &'static str,
    variants: &'static [Variant<T>],
}

impl<T> VariantTable<T> {
    /// Creates a table; usable in `static` initialisers.
    pub const fn new(
        family: &'static str,
        discriminator: &'static str,
        variants: &'static [Variant<T>],
    ) -> Self {
        Self {
            family,
            discriminator,
            variants,
        }
    }

    /// Returns the family name.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Returns the discriminator property name.
    pub fn discriminator(&self) -> &'static str {
        self.discriminator
    }

    /// Returns the registered discriminator values in table order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.iter().map(|variant| variant.tag)
    }

    /// Returns the entry for an exact discriminator value.
    pub fn find(&self, tag: &str) -> Option<&Variant<T>> {
        self.variants.iter().find(|variant| variant.tag == tag)
    }

    /// Returns `true` if the discriminator value is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.find(tag).is_some()
    }

    /// Returns the number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the table has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Decodes a complete object of this family, starting at its `{`.
    pub fn decode(&self, reader: &mut dyn JsonRead) -> Result<T> {
        reader.read_begin_object()?;
        self.decode_fields(reader)
    }

    /// Decodes an already opened object whose next property must be the discriminator.
    pub fn decode_fields(&self, reader: &mut dyn JsonRead) -> Result<T> {
        let name = match reader.next_property()? {
            Some(name) => name,
            None => {
                return Err(self.schema_violation("}"));
            }
        };
        if name != self.discriminator {
            return Err(self.schema_violation(name));
        }

        let tag = reader.read_string()?;
        let variant = self.find(&tag).ok_or_else(|| FabricError::UnknownVariant {
            family: self.family,
            tag: tag.clone(),
        })?;
        tracing::trace!(family = self.family, tag = %tag, "dispatching variant");
        (variant.decode)(reader)
    }

    fn schema_violation(&self, found: impl Into<String>) -> FabricError {
        FabricError::SchemaViolation {
            family: self.family,
            expected: self.discriminator,
            found: found.into(),
        }
    }
}

impl<T> fmt::Debug for VariantTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantTable")
            .field("family", &self.family)
            .field("discriminator", &self.discriminator)
            .field("variants", &self.variants)
            .finish()
    }
}

/// Trait for families modelled as a closed enum of variant structs.
///
/// Usually derived with `#[derive(Polymorphic)]`.
pub trait Polymorphic: DtoType + Sized + 'static {
    /// Returns the family's static variant table.
    fn variant_table() -> &'static VariantTable<Self>;

    /// Returns the discriminator value of the active variant.
    fn tag(&self) -> &'static str;

    /// Writes the active variant as a complete object, discriminator first.
    fn write_variant(&self, writer: &mut dyn JsonWrite) -> Result<()>;
}

/// Decodes a family member by discriminator.
pub fn decode_polymorphic<T: Polymorphic>(reader: &mut dyn JsonRead) -> Result<T> {
    T::variant_table().decode(reader)
}

/// Encodes a family member after checking its tag against the variant table.
pub fn encode_polymorphic<T: Polymorphic>(value: &T, writer: &mut dyn JsonWrite) -> Result<()> {
    let table = T::variant_table();
    let tag = value.tag();
    if !table.contains(tag) {
        return Err(FabricError::UnsupportedVariant {
            family: table.family(),
            tag: tag.to_string(),
        });
    }
    value.write_variant(writer)
}
