//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::sync::Once;

use servicefabric_client::core::{JsonRead, JsonReader};
use servicefabric_client::{CodecConfig, Marshaller};

static TRACING: Once = Once::new();

pub const PARTITION_ID: &str = "1daae3f5-7fd6-42e9-b1ba-8c05f873994d";

/// Installs a test subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn marshaller() -> Marshaller {
    init_tracing();
    Marshaller::default()
}

pub fn marshaller_with_depth(max_depth: usize) -> Marshaller {
    init_tracing();
    let config = CodecConfig::builder()
        .max_depth(max_depth)
        .build()
        .expect("failed to build config");
    Marshaller::new(config)
}

/// Parses both sides with serde_json so property order and whitespace do not matter.
pub fn assert_json_eq(actual: &[u8], expected: &str) {
    let actual: serde_json::Value =
        serde_json::from_slice(actual).expect("encoded body is not valid JSON");
    let expected: serde_json::Value =
        serde_json::from_str(expected).expect("expected body is not valid JSON");
    assert_eq!(actual, expected);
}

/// Returns the names of the top-level properties of an encoded object, in order.
pub fn property_order(body: &[u8]) -> Vec<String> {
    let mut reader = JsonReader::new(body);
    let mut names = Vec::new();
    reader.read_begin_object().expect("body is not an object");
    while let Some(name) = reader.next_property().expect("malformed body") {
        names.push(name);
        reader.skip_value().expect("malformed body");
    }
    names
}

pub fn backup_configuration_page() -> String {
    format!(
        r#"{{
            "ContinuationToken": "fabric:/App/Svc2",
            "Items": [
                {{"Kind": "Application", "PolicyName": "daily", "PolicyInheritedFrom": "Application",
                  "ApplicationName": "fabric:/App"}},
                {{"Kind": "Service", "PolicyName": "daily", "PolicyInheritedFrom": "Application",
                  "ServiceName": "fabric:/App/Svc1",
                  "SuspensionInfo": {{"IsSuspended": true, "SuspensionInheritedFrom": "Service"}}}},
                {{"Kind": "Partition", "PolicyName": "hourly", "PolicyInheritedFrom": "Partition",
                  "ServiceName": "fabric:/App/Svc1", "PartitionId": "{PARTITION_ID}"}}
            ]
        }}"#
    )
}
