//! Derive macros for Service Fabric DTO converters.
//!
//! This crate provides three derive macros:
//!
//! - [`JsonObject`]: generates the flat-object converter (field dispatch by exact
//!   property name, unknown properties skipped).
//! - [`WireEnum`]: generates the enum-string converter with its sentinel member.
//! - [`Polymorphic`]: generates the static variant table and discriminator
//!   dispatch for a family of objects.
//!
//! # Example
//!
//! ```ignore
//! use servicefabric_core::{JsonObject, Polymorphic};
//!
//! #[derive(Debug, Default, JsonObject)]
//! #[fabric(discriminator = "Kind", tag = "Service")]
//! struct ServiceBackupConfigurationInfo {
//!     policy_name: String,
//!     service_name: String,
//! }
//!
//! #[derive(Debug, Polymorphic)]
//! #[fabric(discriminator = "Kind")]
//! enum BackupConfigurationInfo {
//!     Service(ServiceBackupConfigurationInfo),
//! }
//! ```

extern crate proc_macro;

mod attrs;
mod object;
mod polymorphic;
mod wire_enum;

use proc_macro::TokenStream;

/// Derives `JsonObject`, `JsonDecode`, `JsonEncode` and `DtoType` for a struct.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[fabric(type_name = "...")]`: schema name used in errors (defaults to the
///   Rust struct name).
/// - `#[fabric(discriminator = "...", tag = "...")]`: marks the struct as a family
///   member; also implements `FamilyMember`. The discriminator is always written
///   first. On decode it may appear anywhere, but its value must equal the tag or
///   decoding fails with `UnknownVariant`.
///
/// ## Field-level
/// - `#[fabric(rename = "...")]`: overrides the wire name (defaults to the
///   PascalCase form of the field name).
/// - `#[fabric(nullable)]`: on an `Option<T>` field, writes `null` instead of
///   omitting the property when the value is `None`.
/// - `#[fabric(skip)]`: never read or written; left at `Default::default()`.
///
/// `Option<T>` fields are optional and omitted when `None`. Every other field is
/// always written and left at `Default::default()` when absent from the input, so
/// field types must implement `Default`.
#[proc_macro_derive(JsonObject, attributes(fabric))]
pub fn derive_json_object(input: TokenStream) -> TokenStream {
    object::derive_object_impl(input)
}

/// Derives `WireEnum`, `JsonDecode`, `JsonEncode`, `DtoType` and `Display` for a
/// fieldless enum. The enum must also derive `Clone`, `Copy`, `PartialEq` and `Debug`.
///
/// # Attributes
///
/// ## Enum-level
/// - `#[fabric(type_name = "...")]`: schema name (defaults to the Rust enum name).
///
/// ## Member-level
/// - `#[fabric(unknown)]`: **required on exactly one member**. The sentinel used for
///   unrecognised wire strings; it has no wire string and cannot be encoded.
/// - `#[fabric(rename = "...")]`: overrides the wire string (defaults to the
///   member name).
/// - `#[fabric(skip)]`: member has no wire string.
#[proc_macro_derive(WireEnum, attributes(fabric))]
pub fn derive_wire_enum(input: TokenStream) -> TokenStream {
    wire_enum::derive_wire_enum_impl(input)
}

/// Derives `Polymorphic`, `JsonDecode`, `JsonEncode` and `DtoType` for an enum whose
/// variants each wrap one family member struct (see [`JsonObject`]).
///
/// # Attributes
///
/// ## Enum-level
/// - `#[fabric(discriminator = "...")]`: **required**. The discriminator property.
/// - `#[fabric(type_name = "...")]`: family name (defaults to the Rust enum name).
///
/// ## Variant-level
/// - `#[fabric(skip)]`: leaves the variant out of the variant table: its tag is
///   rejected on decode (`UnknownVariant`) and on encode (`UnsupportedVariant`).
///
/// Each variant's tag is the `FamilyMember::TAG` of the struct it wraps.
#[proc_macro_derive(Polymorphic, attributes(fabric))]
pub fn derive_polymorphic(input: TokenStream) -> TokenStream {
    polymorphic::derive_polymorphic_impl(input)
}
