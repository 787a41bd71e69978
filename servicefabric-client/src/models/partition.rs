//! Partition DTOs.

use servicefabric_core::{JsonObject, Polymorphic};
use uuid::Uuid;

use super::enums::{HealthState, ServiceKind, ServicePartitionKind, ServicePartitionStatus};

/// How a partition divides the service's key space, discriminated by `ServicePartitionKind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "ServicePartitionKind")]
pub enum PartitionInformation {
    /// A contiguous range of 64-bit keys.
    Int64Range(Int64RangePartitionInformation),
    /// A named partition.
    Named(NamedPartitionInformation),
    /// The single partition of an unpartitioned service.
    Singleton(SingletonPartitionInformation),
}

impl PartitionInformation {
    /// Returns the partition id.
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Self::Int64Range(info) => info.id,
            Self::Named(info) => info.id,
            Self::Singleton(info) => info.id,
        }
    }

    /// Returns the partitioning scheme of the active variant.
    pub fn kind(&self) -> ServicePartitionKind {
        match self {
            Self::Int64Range(_) => ServicePartitionKind::Int64Range,
            Self::Named(_) => ServicePartitionKind::Named,
            Self::Singleton(_) => ServicePartitionKind::Singleton,
        }
    }
}

/// A partition owning a contiguous range of `Int64` keys.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ServicePartitionKind", tag = "Int64Range")]
pub struct Int64RangePartitionInformation {
    /// Partition id.
    pub id: Option<Uuid>,
    /// Lowest key in the range, as a decimal string.
    pub low_key: Option<String>,
    /// Highest key in the range, as a decimal string.
    pub high_key: Option<String>,
}

/// A partition addressed by name.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ServicePartitionKind", tag = "Named")]
pub struct NamedPartitionInformation {
    /// Partition id.
    pub id: Option<Uuid>,
    /// Name of the partition.
    pub name: Option<String>,
}

/// The only partition of an unpartitioned service.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ServicePartitionKind", tag = "Singleton")]
pub struct SingletonPartitionInformation {
    /// Partition id.
    pub id: Option<Uuid>,
}

/// Summary of one partition of a service.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct ServicePartitionInfo {
    /// Whether the owning service is stateful or stateless.
    pub service_kind: ServiceKind,
    /// Aggregated health of the partition.
    pub health_state: Option<HealthState>,
    /// Lifecycle status of the partition.
    pub partition_status: Option<ServicePartitionStatus>,
    /// Partitioning information.
    pub partition_information: Option<PartitionInformation>,
    /// Target replica set size (stateful services).
    pub target_replica_set_size: Option<i64>,
    /// Minimum replica set size (stateful services).
    pub min_replica_set_size: Option<i64>,
    /// Instance count (stateless services).
    pub instance_count: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use servicefabric_core::codec::{JsonDecode, JsonEncode};
    use servicefabric_core::ErrorKind;

    const PARTITION_ID: &str = "1daae3f5-7fd6-42e9-b1ba-8c05f873994d";

    #[test]
    fn test_int64_range_decode() {
        let json = format!(
            r#"{{"ServicePartitionKind":"Int64Range","Id":"{PARTITION_ID}","LowKey":"-9223372036854775808","HighKey":"9223372036854775807"}}"#
        );
        let info = PartitionInformation::from_json_str(&json).unwrap();
        assert_eq!(info.kind(), ServicePartitionKind::Int64Range);
        assert_eq!(info.id(), Some(Uuid::parse_str(PARTITION_ID).unwrap()));
        let PartitionInformation::Int64Range(range) = info else {
            panic!("expected int64 range");
        };
        assert_eq!(range.high_key.as_deref(), Some("9223372036854775807"));
    }

    #[test]
    fn test_discriminator_must_come_first() {
        let json = format!(r#"{{"Id":"{PARTITION_ID}","ServicePartitionKind":"Singleton"}}"#);
        let err = PartitionInformation::from_json_str(&json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_named_encodes_discriminator_first() {
        let info = PartitionInformation::Named(NamedPartitionInformation {
            id: None,
            name: Some("east".to_string()),
        });
        assert_eq!(
            info.to_json_string().unwrap(),
            r#"{"ServicePartitionKind":"Named","Name":"east"}"#
        );
    }

    #[test]
    fn test_service_partition_info() {
        let json = format!(
            r#"{{
                "ServiceKind": "Stateful",
                "HealthState": "Ok",
                "PartitionStatus": "Ready",
                "PartitionInformation": {{"ServicePartitionKind": "Singleton", "Id": "{PARTITION_ID}"}},
                "TargetReplicaSetSize": 3,
                "MinReplicaSetSize": 2,
                "CurrentConfigurationEpoch": {{"ConfigurationVersion": "8589934592", "DataLossVersion": "1"}}
            }}"#
        );
        let info = ServicePartitionInfo::from_json_str(&json).unwrap();
        assert_eq!(info.service_kind, ServiceKind::Stateful);
        assert_eq!(info.health_state, Some(HealthState::Ok));
        assert_eq!(info.partition_status, Some(ServicePartitionStatus::Ready));
        assert_eq!(
            info.partition_information.as_ref().map(PartitionInformation::kind),
            Some(ServicePartitionKind::Singleton)
        );
        assert_eq!(info.target_replica_set_size, Some(3));
        assert_eq!(info.instance_count, None);
    }

    #[test]
    fn test_unknown_partition_status_is_sentinel() {
        let info = ServicePartitionInfo::from_json_str(
            r#"{"ServiceKind":"Stateless","PartitionStatus":"Migrating","InstanceCount":-1}"#,
        )
        .unwrap();
        assert_eq!(info.partition_status, Some(ServicePartitionStatus::Unrecognized));
        assert_eq!(info.instance_count, Some(-1));
    }
}
