//! Codec traits and implementations for scalar and collection types.

use std::collections::BTreeMap;
use std::ops::Deref;

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

use super::{JsonRead, JsonReader, JsonWrite, JsonWriter, TokenKind};
use crate::error::{FabricError, Result};

/// Names a schema type for error context and logging.
pub trait DtoType {
    /// The schema name of the type, e.g. `BackupConfigurationInfo`.
    const TYPE_NAME: &'static str;
}

/// Trait for types that can be decoded from a JSON token stream.
pub trait JsonDecode: Sized {
    /// Decodes one value starting at the reader's current token.
    fn decode(reader: &mut dyn JsonRead) -> Result<Self>;

    /// Convenience method: decodes a value from a complete JSON document.
    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = JsonReader::new(data);
        let value = Self::decode(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }

    /// Convenience method: decodes a value from a JSON string.
    fn from_json_str(json: &str) -> Result<Self> {
        Self::from_bytes(json.as_bytes())
    }
}

/// Trait for types that can be encoded to a JSON writer.
pub trait JsonEncode {
    /// Encodes this value as exactly one JSON value.
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()>;

    /// Convenience method: encodes this value to a byte vector.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = JsonWriter::new();
        self.encode(&mut writer)?;
        Ok(writer.into_bytes())
    }

    /// Convenience method: encodes this value to a string.
    fn to_json_string(&self) -> Result<String> {
        let mut writer = JsonWriter::new();
        self.encode(&mut writer)?;
        writer.into_string()
    }
}

impl JsonDecode for String {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_string()
    }
}

impl JsonEncode for String {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_string(self)
    }
}

impl JsonEncode for str {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_string(self)
    }
}

impl JsonDecode for bool {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_bool()
    }
}

impl JsonEncode for bool {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_bool(*self)
    }
}

impl JsonDecode for u8 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_u8()
    }
}

impl JsonEncode for u8 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_u64(u64::from(*self))
    }
}

impl JsonDecode for i32 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_i32()
    }
}

impl JsonEncode for i32 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_i64(i64::from(*self))
    }
}

impl JsonDecode for i64 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_i64()
    }
}

impl JsonEncode for i64 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_i64(*self)
    }
}

impl JsonDecode for u32 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        let offset = reader.offset();
        let value = reader.read_u64()?;
        u32::try_from(value)
            .map_err(|_| FabricError::malformed(offset, format!("{value} does not fit in u32")))
    }
}

impl JsonEncode for u32 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_u64(u64::from(*self))
    }
}

impl JsonDecode for u64 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_u64()
    }
}

impl JsonEncode for u64 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_u64(*self)
    }
}

impl JsonDecode for f64 {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_f64()
    }
}

impl JsonEncode for f64 {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_f64(*self)
    }
}

// ============================================================================
// GUIDs and timestamps
// ============================================================================

impl JsonDecode for Uuid {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        let offset = reader.offset();
        let text = reader.read_string()?;
        Uuid::parse_str(&text)
            .map_err(|e| FabricError::malformed(offset, format!("invalid GUID `{text}`: {e}")))
    }
}

impl JsonEncode for Uuid {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_string(&self.hyphenated().to_string())
    }
}

impl JsonDecode for DateTime<Utc> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        let offset = reader.offset();
        let text = reader.read_string()?;
        DateTime::parse_from_rfc3339(&text)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(|e| FabricError::malformed(offset, format!("invalid timestamp `{text}`: {e}")))
    }
}

impl JsonEncode for DateTime<Utc> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.write_string(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

// ============================================================================
// Option<T> and collections
// ============================================================================

impl<T: JsonDecode> JsonDecode for Option<T> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        if reader.peek()? == TokenKind::Null {
            reader.read_null()?;
            Ok(None)
        } else {
            T::decode(reader).map(Some)
        }
    }
}

impl<T: JsonEncode> JsonEncode for Option<T> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        match self {
            Some(value) => value.encode(writer),
            None => writer.write_null(),
        }
    }
}

impl<T: JsonDecode> JsonDecode for Vec<T> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_begin_array()?;
        let mut items = Vec::new();
        while reader.has_next_element()? {
            items.push(T::decode(reader)?);
        }
        Ok(items)
    }
}

impl<T: JsonEncode> JsonEncode for Vec<T> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: JsonEncode> JsonEncode for [T] {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.begin_array()?;
        for item in self {
            item.encode(writer)?;
        }
        writer.end_array()
    }
}

impl<T: JsonDecode> JsonDecode for BTreeMap<String, T> {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_begin_object()?;
        let mut map = BTreeMap::new();
        while let Some(key) = reader.next_property()? {
            let value = T::decode(reader)?;
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<T: JsonEncode> JsonEncode for BTreeMap<String, T> {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.begin_object()?;
        for (key, value) in self {
            writer.property(key)?;
            value.encode(writer)?;
        }
        writer.end_object()
    }
}

impl<T: DtoType> DtoType for Vec<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}

impl<T: DtoType> DtoType for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;
}

// ============================================================================
// Byte arrays
// ============================================================================

/// A byte sequence carried on the wire as a JSON array of integers in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ByteArray(Vec<u8>);

impl ByteArray {
    /// Creates a byte array from owned bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the wrapper and returns the inner bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for ByteArray {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteArray {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl JsonDecode for ByteArray {
    fn decode(reader: &mut dyn JsonRead) -> Result<Self> {
        reader.read_begin_array()?;
        let mut bytes = Vec::new();
        while reader.has_next_element()? {
            bytes.push(reader.read_u8()?);
        }
        Ok(Self(bytes))
    }
}

impl JsonEncode for ByteArray {
    fn encode(&self, writer: &mut dyn JsonWrite) -> Result<()> {
        writer.begin_array()?;
        for byte in &self.0 {
            writer.write_u64(u64::from(*byte))?;
        }
        writer.end_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    fn round_trip<T: JsonEncode + JsonDecode + PartialEq + std::fmt::Debug>(value: T) {
        let bytes = value.to_bytes().unwrap();
        let result = T::from_bytes(&bytes).unwrap();
        assert_eq!(value, result);
    }

    #[test]
    fn test_scalar_round_trips() {
        round_trip(String::from("Hello, World!"));
        round_trip(String::from("fabric:/App/Svc"));
        round_trip(true);
        round_trip(i32::MIN);
        round_trip(i64::MAX);
        round_trip(u32::MAX);
        round_trip(u64::MAX);
        round_trip(-273.15f64);
        round_trip(0u8);
    }

    #[test]
    fn test_i32_out_of_range() {
        let err = i32::from_json_str("4294967296").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_u32_out_of_range() {
        assert!(u32::from_json_str("4294967296").is_err());
        assert_eq!(u32::from_json_str("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_uuid_round_trip() {
        let id = Uuid::parse_str("6f2ea9b4-7c1e-4b1f-8a0e-2d2f1c3b4a59").unwrap();
        assert_eq!(
            id.to_json_string().unwrap(),
            r#""6f2ea9b4-7c1e-4b1f-8a0e-2d2f1c3b4a59""#
        );
        round_trip(id);
    }

    #[test]
    fn test_uuid_accepts_uppercase() {
        let id = Uuid::from_json_str(r#""6F2EA9B4-7C1E-4B1F-8A0E-2D2F1C3B4A59""#).unwrap();
        assert_eq!(id.to_string(), "6f2ea9b4-7c1e-4b1f-8a0e-2d2f1c3b4a59");
    }

    #[test]
    fn test_invalid_uuid() {
        let err = Uuid::from_json_str(r#""not-a-guid""#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_timestamp_round_trip() {
        let ts = Utc.with_ymd_and_hms(2018, 1, 1, 12, 30, 0).unwrap();
        assert_eq!(ts.to_json_string().unwrap(), r#""2018-01-01T12:30:00Z""#);
        round_trip(ts);
    }

    #[test]
    fn test_timestamp_with_offset_and_fraction() {
        let ts = DateTime::<Utc>::from_json_str(r#""2018-01-01T14:30:00.250+02:00""#).unwrap();
        let expected = Utc.with_ymd_and_hms(2018, 1, 1, 12, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(DateTime::<Utc>::from_json_str(r#""yesterday""#).is_err());
    }

    #[test]
    fn test_option_null() {
        assert_eq!(Option::<i64>::from_json_str("null").unwrap(), None);
        assert_eq!(Option::<i64>::from_json_str("5").unwrap(), Some(5));
        assert_eq!(None::<i64>.to_json_string().unwrap(), "null");
    }

    #[test]
    fn test_vec_round_trip() {
        round_trip(vec![String::from("a"), String::from("b")]);
        round_trip(Vec::<i64>::new());
        assert_eq!(vec![1i64, 2, 3].to_json_string().unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_map_round_trip() {
        let mut map = BTreeMap::new();
        map.insert("key1".to_string(), 100i64);
        map.insert("key2".to_string(), 200i64);
        assert_eq!(map.to_json_string().unwrap(), r#"{"key1":100,"key2":200}"#);
        round_trip(map);
    }

    #[test]
    fn test_byte_array_from_json_array() {
        let bytes = ByteArray::from_json_str("[1,2,3]").unwrap();
        assert_eq!(bytes.as_slice(), &[1, 2, 3]);
        assert_eq!(bytes.len(), 3);
        assert_eq!(bytes.to_json_string().unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_byte_array_full_range() {
        round_trip(ByteArray::new((0u8..=255).collect()));
        round_trip(ByteArray::default());
    }

    #[test]
    fn test_byte_array_rejects_out_of_range() {
        let err = ByteArray::from_json_str("[1,256]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(ByteArray::from_json_str("[-1]").is_err());
        assert!(ByteArray::from_json_str("[\"1\"]").is_err());
    }

    #[test]
    fn test_absent_byte_array_writes_null() {
        let absent: Option<ByteArray> = None;
        assert_eq!(absent.to_json_string().unwrap(), "null");
    }

    #[test]
    fn test_from_bytes_rejects_trailing_data() {
        assert!(i64::from_json_str("1 2").is_err());
    }

    #[test]
    fn test_wrong_token_kind() {
        assert!(bool::from_json_str("1").is_err());
        assert!(String::from_json_str("true").is_err());
        assert!(Vec::<i64>::from_json_str("{}").is_err());
    }
}
