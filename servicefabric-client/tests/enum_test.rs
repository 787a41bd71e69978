//! Integration tests for enum-string fields.

mod common;

use servicefabric_client::core::WireEnum;
use servicefabric_client::{
    BackupType, DayOfWeek, ErrorKind, HealthState, ServiceKind, ServicePartitionInfo,
    ServiceStatus,
};

use common::marshaller;

#[test]
fn test_known_and_unrecognised_values() {
    let marshaller = marshaller();
    assert_eq!(marshaller.decode::<HealthState>(br#""Warning""#).unwrap(), HealthState::Warning);
    assert_eq!(
        marshaller.decode::<BackupType>(br#""Differential""#).unwrap(),
        BackupType::Unrecognized
    );
    assert_eq!(marshaller.decode::<DayOfWeek>(br#""Saturday""#).unwrap(), DayOfWeek::Saturday);
    assert_eq!(marshaller.encode_to_string(&BackupType::Incremental).unwrap(), r#""Incremental""#);
}

#[test]
fn test_real_unknown_is_not_the_sentinel() {
    let status = marshaller().decode::<ServiceStatus>(br#""Unknown""#).unwrap();
    assert_eq!(status, ServiceStatus::Unknown);
    assert_ne!(status, ServiceStatus::UNKNOWN);
    assert_eq!(marshaller().encode_to_string(&status).unwrap(), r#""Unknown""#);
}

#[test]
fn test_sentinel_cannot_be_encoded() {
    let err = marshaller().encode(&HealthState::Unrecognized).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedEnumValue);
    assert!(err.to_string().contains("Unrecognized"));
}

#[test]
fn test_sentinel_inside_object_fails_whole_encode() {
    let info = ServicePartitionInfo {
        service_kind: ServiceKind::Stateful,
        health_state: Some(HealthState::Unrecognized),
        ..Default::default()
    };
    let err = marshaller().encode(&info).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedEnumValue);
    assert_eq!(err.type_name(), Some("ServicePartitionInfo"));
}

#[test]
fn test_enum_field_rejects_non_string() {
    let err = marshaller()
        .decode::<ServicePartitionInfo>(br#"{"ServiceKind":1}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}
