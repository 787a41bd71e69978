//! Integration tests for naming service property DTOs.

mod common;

use servicefabric_client::core::ByteArray;
use servicefabric_client::{
    BinaryPropertyValue, ErrorKind, Int64PropertyValue, PagedPropertyInfoList, PropertyInfo,
    PropertyMetadata, PropertyValue, PropertyValueKind, StringPropertyValue,
};

use common::{assert_json_eq, marshaller};

#[test]
fn test_binary_value_with_null_data() {
    let value: PropertyValue = marshaller()
        .decode(br#"{"Kind":"Binary","Data":null}"#)
        .unwrap();

    assert_eq!(
        value,
        PropertyValue::Binary(BinaryPropertyValue { data: None })
    );
    assert_eq!(
        marshaller().encode_to_string(&value).unwrap(),
        r#"{"Kind":"Binary","Data":null}"#
    );
}

#[test]
fn test_binary_value_bytes() {
    let marshaller = marshaller();
    let value = PropertyValue::Binary(BinaryPropertyValue {
        data: Some(ByteArray::new(vec![0, 127, 255])),
    });

    let body = marshaller.encode(&value).unwrap();
    assert_eq!(body, br#"{"Kind":"Binary","Data":[0,127,255]}"#.to_vec());
    assert_eq!(marshaller.decode::<PropertyValue>(&body).unwrap(), value);
}

#[test]
fn test_byte_out_of_range_is_malformed() {
    let err = marshaller()
        .decode::<PropertyValue>(br#"{"Kind":"Binary","Data":[256]}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_put_property_request_body() {
    let info = PropertyInfo {
        name: "replicas".to_string(),
        value: Some(PropertyValue::Int64(Int64PropertyValue {
            data: "5".to_string(),
        })),
        metadata: PropertyMetadata {
            custom_type_id: Some("count".to_string()),
            ..Default::default()
        },
    };

    let body = marshaller().encode(&info).unwrap();
    assert_json_eq(
        &body,
        r#"{"Name":"replicas","Value":{"Kind":"Int64","Data":"5"},"Metadata":{"CustomTypeId":"count"}}"#,
    );
}

#[test]
fn test_property_page() {
    let page: PagedPropertyInfoList = marshaller()
        .decode(
            br#"{
                "ContinuationToken": "color",
                "IsConsistent": false,
                "Properties": [
                    {"Name": "color", "Value": {"Kind": "String", "Data": "blue"},
                     "Metadata": {"TypeId": "String", "SizeInBytes": 10}},
                    {"Name": "blob", "Metadata": {"TypeId": "Binary"}},
                    {"Name": "future", "Value": {"Kind": "String", "Data": "x"},
                     "Metadata": {"TypeId": "Decimal"}}
                ]
            }"#,
        )
        .unwrap();

    assert!(page.has_more());
    let properties = page.properties.unwrap();
    assert_eq!(properties.len(), 3);
    assert_eq!(
        properties[0].value,
        Some(PropertyValue::String(StringPropertyValue {
            data: "blue".to_string()
        }))
    );
    assert_eq!(properties[1].value, None);
    assert_eq!(properties[1].metadata.type_id, Some(PropertyValueKind::Binary));
    assert_eq!(
        properties[2].metadata.type_id,
        Some(PropertyValueKind::Unrecognized)
    );
}

#[test]
fn test_unknown_property_kind() {
    let err = marshaller()
        .decode::<PropertyValue>(br#"{"Kind":"Decimal","Data":"1.0"}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownVariant);
    assert_eq!(err.type_name(), Some("PropertyValue"));
}

#[test]
fn test_int64_value_parse() {
    let value = Int64PropertyValue {
        data: "not a number".to_string(),
    };
    assert_eq!(value.value(), None);
}
