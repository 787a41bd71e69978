//! Enum-string codec support.
//!
//! Enums are carried as strings. Decoding is lenient: a string missing from the wire
//! table yields the enum's sentinel member, since the server adds members faster
//! than clients are regenerated. Encoding is strict: the sentinel has no wire
//! string and is rejected.

use std::fmt::Debug;

use super::traits::DtoType;
use super::{JsonRead, JsonWrite};
use crate::error::{FabricError, Result};

/// Trait for closed enums carried as exact, case-sensitive wire strings.
///
/// Usually derived with `#[derive(WireEnum)]`.
pub trait WireEnum: DtoType + Copy + PartialEq + Debug + 'static {
    /// Member used for any unrecognised wire string. Never encodable.
    const UNKNOWN: Self;

    /// Ordinal-exact mapping between wire strings and members.
    const WIRE_TABLE: &'static [(&'static str, Self)];

    /// Looks up a wire string, returning `None` when it is not in the table.
    fn lookup(wire: &str) -> Option<Self> {
        Self::WIRE_TABLE
            .iter()
            .find(|(name, _)| *name == wire)
            .map(|(_, member)| *member)
    }

    /// Maps a wire string to a member, falling back to [`Self::UNKNOWN`].
    fn from_wire(wire: &str) -> Self {
        Self::lookup(wire).unwrap_or(Self::UNKNOWN)
    }

    /// Maps a member to its wire string.
    fn to_wire(self) -> Result<&'static str> {
        Self::WIRE_TABLE
            .iter()
            .find(|(_, member)| *member == self)
            .map(|(name, _)| *name)
            .ok_or_else(|| FabricError::UnsupportedEnumValue {
                enum_name: Self::TYPE_NAME,
                value: format!("{self:?}"),
            })
    }
}

/// Reads one string scalar and maps it through the enum's wire table.
pub fn decode_enum<E: WireEnum>(reader: &mut dyn JsonRead) -> Result<E> {
    let wire = reader.read_string()?;
    match E::lookup(&wire) {
        Some(member) => Ok(member),
        None => {
            tracing::debug!(
                enum_name = E::TYPE_NAME,
                wire = %wire,
                "unrecognised enum value mapped to sentinel"
            );
            Ok(E::UNKNOWN)
        }
    }
}

/// Writes the wire string of a member.
pub fn encode_enum<E: WireEnum>(value: E, writer: &mut dyn JsonWrite) -> Result<()> {
    writer.write_string(value.to_wire()?)
}
