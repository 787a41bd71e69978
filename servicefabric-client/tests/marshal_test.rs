//! Integration tests for whole-body marshalling and codec configuration.

mod common;

use servicefabric_client::{
    CodecConfig, Epoch, ErrorKind, Marshaller, PagedServiceInfoList, ServiceInfo, MAX_DEPTH_LIMIT,
};

use common::{marshaller, marshaller_with_depth};

#[test]
fn test_trailing_content_is_malformed() {
    let err = marshaller()
        .decode::<Epoch>(br#"{"ConfigurationVersion":"1"} {}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(err.type_name(), Some("Epoch"));
}

#[test]
fn test_truncated_body_is_malformed() {
    let err = marshaller()
        .decode::<PagedServiceInfoList>(br#"{"Items":[{"ServiceKind":"Stateful","Name":"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_non_object_body_is_malformed() {
    let err = marshaller().decode::<ServiceInfo>(b"[]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_depth_limit() {
    let body = br#"{"ConfigurationVersion":"1","Ignored":[[[[[[1]]]]]]}"#;

    let err = marshaller_with_depth(4).decode::<Epoch>(body).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);

    let epoch = marshaller_with_depth(16).decode::<Epoch>(body).unwrap();
    assert_eq!(epoch.configuration_version, "1");
}

#[test]
fn test_deeply_nested_unknown_property() {
    let mut body = String::from(r#"{"ConfigurationVersion":"1","Unknown":"#);
    body.push_str(&"[".repeat(2_000_000));

    let err = marshaller_with_depth(MAX_DEPTH_LIMIT)
        .decode_str::<Epoch>(&body)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
}

#[test]
fn test_whitespace_around_body() {
    let epoch: Epoch = marshaller()
        .decode(b" \r\n\t{ \"DataLossVersion\" : \"9\" }\n")
        .unwrap();
    assert_eq!(epoch.data_loss_version, "9");
}

#[test]
fn test_escaped_strings() {
    let epoch: Epoch = marshaller()
        .decode_str(r#"{"ConfigurationVersion":"a\"b\\cé\n"}"#)
        .unwrap();
    assert_eq!(epoch.configuration_version, "a\"b\\c\u{e9}\n");

    let body = marshaller().encode_to_string(&epoch).unwrap();
    assert_eq!(
        body,
        r#"{"ConfigurationVersion":"a\"b\\cé\n","DataLossVersion":""}"#
    );
}

#[test]
fn test_pretty_output_decodes_back() {
    let config = CodecConfig::builder().pretty(true).build().unwrap();
    let marshaller = Marshaller::new(config);
    let epoch = Epoch {
        configuration_version: "4".to_string(),
        data_loss_version: "5".to_string(),
    };

    let body = marshaller.encode_to_string(&epoch).unwrap();
    assert!(body.contains('\n'));
    assert_eq!(marshaller.decode_str::<Epoch>(&body).unwrap(), epoch);
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = CodecConfig::builder().max_depth(0).build().unwrap_err();
    assert!(err.message().contains("max_depth"));
}

#[cfg(feature = "config-file")]
#[test]
fn test_config_from_yaml_and_toml() {
    let yaml = CodecConfig::from_yaml_str("max-depth: 32\npretty: true\n").unwrap();
    assert_eq!(yaml.max_depth(), 32);
    assert!(yaml.pretty());

    let toml = CodecConfig::from_toml_str("initial-capacity = 4096\n").unwrap();
    assert_eq!(toml.initial_capacity(), 4096);
    assert_eq!(toml.max_depth(), CodecConfig::default().max_depth());
}
