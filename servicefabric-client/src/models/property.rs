//! Naming service property DTOs.

use chrono::{DateTime, Utc};
use servicefabric_core::codec::ByteArray;
use servicefabric_core::{JsonObject, Polymorphic};
use uuid::Uuid;

use super::enums::PropertyValueKind;

/// Value of a naming service property, discriminated by `Kind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "Kind")]
pub enum PropertyValue {
    /// Raw bytes.
    Binary(BinaryPropertyValue),
    /// A 64-bit integer.
    Int64(Int64PropertyValue),
    /// A double.
    Double(DoublePropertyValue),
    /// A string.
    String(StringPropertyValue),
    /// A GUID.
    Guid(GuidPropertyValue),
}

impl PropertyValue {
    /// Returns the value kind matching the active variant.
    pub fn kind(&self) -> PropertyValueKind {
        match self {
            Self::Binary(_) => PropertyValueKind::Binary,
            Self::Int64(_) => PropertyValueKind::Int64,
            Self::Double(_) => PropertyValueKind::Double,
            Self::String(_) => PropertyValueKind::String,
            Self::Guid(_) => PropertyValueKind::Guid,
        }
    }
}

/// Binary property value. An absent payload is written as `null`.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Binary")]
pub struct BinaryPropertyValue {
    /// Payload, carried as an array of byte values.
    #[fabric(nullable)]
    pub data: Option<ByteArray>,
}

/// Int64 property value.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Int64")]
pub struct Int64PropertyValue {
    /// Value as a decimal string; the service does not send it as a JSON number.
    pub data: String,
}

impl Int64PropertyValue {
    /// Parses the value.
    pub fn value(&self) -> Option<i64> {
        self.data.parse().ok()
    }
}

/// Double property value.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Double")]
pub struct DoublePropertyValue {
    /// The value.
    pub data: f64,
}

/// String property value.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "String")]
pub struct StringPropertyValue {
    /// The value.
    pub data: String,
}

/// GUID property value.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Guid")]
pub struct GuidPropertyValue {
    /// The value.
    pub data: Uuid,
}

/// Metadata of a naming service property.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct PropertyMetadata {
    /// Kind of the stored value.
    pub type_id: Option<PropertyValueKind>,
    /// Application-defined type tag.
    pub custom_type_id: Option<String>,
    /// Name of the parent naming entity.
    pub parent: Option<String>,
    /// Size of the value in bytes.
    pub size_in_bytes: Option<i32>,
    /// Last modification time.
    pub last_modified_utc_timestamp: Option<DateTime<Utc>>,
    /// Version of the property, as a decimal string.
    pub sequence_number: Option<String>,
}

/// A naming service property: name, value and metadata.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct PropertyInfo {
    /// Property name.
    pub name: String,
    /// Property value; absent when only metadata was requested.
    pub value: Option<PropertyValue>,
    /// Property metadata.
    pub metadata: PropertyMetadata,
}

/// One page of properties under a naming entity.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct PagedPropertyInfoList {
    /// Token to pass back for the next page.
    pub continuation_token: Option<String>,
    /// Whether all properties on the page belong to the same version of the entity.
    pub is_consistent: Option<bool>,
    /// Properties on this page.
    pub properties: Option<Vec<PropertyInfo>>,
}

impl PagedPropertyInfoList {
    /// Returns `true` if the server has more results.
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}
