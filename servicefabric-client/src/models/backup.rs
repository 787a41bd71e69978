//! Backup and restore DTOs.

use chrono::{DateTime, Utc};
use servicefabric_core::codec::PagedList;
use servicefabric_core::{JsonObject, Polymorphic};
use uuid::Uuid;

use super::enums::{
    BackupEntityKind, BackupPolicyScope, BackupScheduleFrequencyType, BackupSuspensionScope,
    BackupType, DayOfWeek,
};
use super::partition::PartitionInformation;

/// Backup configuration of an application, service or partition, discriminated by `Kind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "Kind")]
pub enum BackupConfigurationInfo {
    /// Configuration applied at application scope.
    Application(ApplicationBackupConfigurationInfo),
    /// Configuration applied at service scope.
    Service(ServiceBackupConfigurationInfo),
    /// Configuration applied at partition scope.
    Partition(PartitionBackupConfigurationInfo),
}

impl BackupConfigurationInfo {
    /// Returns the name of the backup policy in effect.
    pub fn policy_name(&self) -> Option<&str> {
        match self {
            Self::Application(info) => info.policy_name.as_deref(),
            Self::Service(info) => info.policy_name.as_deref(),
            Self::Partition(info) => info.policy_name.as_deref(),
        }
    }

    /// Returns the suspension state, if reported.
    pub fn suspension_info(&self) -> Option<&BackupSuspensionInfo> {
        match self {
            Self::Application(info) => info.suspension_info.as_ref(),
            Self::Service(info) => info.suspension_info.as_ref(),
            Self::Partition(info) => info.suspension_info.as_ref(),
        }
    }
}

/// Backup configuration of an application.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Application")]
pub struct ApplicationBackupConfigurationInfo {
    /// Name of the backup policy in effect.
    pub policy_name: Option<String>,
    /// Scope the policy was inherited from.
    pub policy_inherited_from: Option<BackupPolicyScope>,
    /// Whether backups are suspended.
    pub suspension_info: Option<BackupSuspensionInfo>,
    /// `fabric:/` URI of the application.
    pub application_name: Option<String>,
}

/// Backup configuration of a service.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Service")]
pub struct ServiceBackupConfigurationInfo {
    /// Name of the backup policy in effect.
    pub policy_name: Option<String>,
    /// Scope the policy was inherited from.
    pub policy_inherited_from: Option<BackupPolicyScope>,
    /// Whether backups are suspended.
    pub suspension_info: Option<BackupSuspensionInfo>,
    /// `fabric:/` URI of the service.
    pub service_name: Option<String>,
}

/// Backup configuration of a partition.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "Kind", tag = "Partition")]
pub struct PartitionBackupConfigurationInfo {
    /// Name of the backup policy in effect.
    pub policy_name: Option<String>,
    /// Scope the policy was inherited from.
    pub policy_inherited_from: Option<BackupPolicyScope>,
    /// Whether backups are suspended.
    pub suspension_info: Option<BackupSuspensionInfo>,
    /// `fabric:/` URI of the owning service.
    pub service_name: Option<String>,
    /// Partition id.
    pub partition_id: Option<Uuid>,
}

/// Whether periodic backup is suspended, and at which scope.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct BackupSuspensionInfo {
    /// Whether periodic backup is suspended.
    pub is_suspended: Option<bool>,
    /// Scope the suspension was inherited from.
    pub suspension_inherited_from: Option<BackupSuspensionScope>,
}

/// Entity a backup policy applies to, discriminated by `EntityKind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "EntityKind")]
pub enum BackupEntity {
    /// An application.
    Application(ApplicationBackupEntity),
    /// A service.
    Service(ServiceBackupEntity),
    /// A partition.
    Partition(PartitionBackupEntity),
}

impl BackupEntity {
    /// Returns the entity kind matching the active variant.
    pub fn entity_kind(&self) -> BackupEntityKind {
        match self {
            Self::Application(_) => BackupEntityKind::Application,
            Self::Service(_) => BackupEntityKind::Service,
            Self::Partition(_) => BackupEntityKind::Partition,
        }
    }
}

/// An application as a backup entity.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "EntityKind", tag = "Application")]
pub struct ApplicationBackupEntity {
    /// `fabric:/` URI of the application.
    pub application_name: Option<String>,
}

/// A service as a backup entity.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "EntityKind", tag = "Service")]
pub struct ServiceBackupEntity {
    /// `fabric:/` URI of the service.
    pub service_name: Option<String>,
}

/// A partition as a backup entity.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "EntityKind", tag = "Partition")]
pub struct PartitionBackupEntity {
    /// `fabric:/` URI of the owning service.
    pub service_name: Option<String>,
    /// Partition id.
    pub partition_id: Option<Uuid>,
}

/// A backup policy.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct BackupPolicyDescription {
    /// Unique policy name.
    pub name: String,
    /// Whether to restore the latest backup automatically on data loss.
    pub auto_restore_on_data_loss: bool,
    /// Incremental backups taken between two full backups.
    pub max_incremental_backups: i32,
    /// When backups are taken.
    pub schedule: Option<BackupScheduleDescription>,
    /// Where backups are stored.
    pub storage: Option<BackupStorageDescription>,
}

/// Backup schedule, discriminated by `ScheduleKind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "ScheduleKind")]
pub enum BackupScheduleDescription {
    /// Backups at a fixed interval.
    FrequencyBased(FrequencyBasedBackupScheduleDescription),
    /// Backups at fixed times of day.
    TimeBased(TimeBasedBackupScheduleDescription),
}

/// Backups taken at a fixed interval.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ScheduleKind", tag = "FrequencyBased")]
pub struct FrequencyBasedBackupScheduleDescription {
    /// ISO 8601 duration between backups, e.g. `PT1H`.
    pub interval: String,
}

/// Backups taken at fixed times on given days.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ScheduleKind", tag = "TimeBased")]
pub struct TimeBasedBackupScheduleDescription {
    /// Daily or weekly.
    pub schedule_frequency_type: BackupScheduleFrequencyType,
    /// Days a weekly schedule runs on.
    pub run_days: Option<Vec<DayOfWeek>>,
    /// Times of day; only the time component is meaningful.
    pub run_times: Vec<DateTime<Utc>>,
}

/// Backup storage location, discriminated by `StorageKind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "StorageKind")]
pub enum BackupStorageDescription {
    /// An Azure blob store container.
    AzureBlobStore(AzureBlobBackupStorageDescription),
    /// A file share.
    FileShare(FileShareBackupStorageDescription),
}

/// Azure blob storage for backups.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "StorageKind", tag = "AzureBlobStore")]
pub struct AzureBlobBackupStorageDescription {
    /// Display name of the store.
    pub friendly_name: Option<String>,
    /// Storage account connection string.
    pub connection_string: String,
    /// Blob container name.
    pub container_name: String,
}

/// File share storage for backups.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "StorageKind", tag = "FileShare")]
pub struct FileShareBackupStorageDescription {
    /// Display name of the store.
    pub friendly_name: Option<String>,
    /// UNC path of the share.
    pub path: String,
    /// Account used to access the share.
    pub primary_user_name: Option<String>,
    /// Password of the primary account.
    pub primary_password: Option<String>,
    /// Fallback account used to access the share.
    pub secondary_user_name: Option<String>,
    /// Password of the secondary account.
    pub secondary_password: Option<String>,
}

/// Replica set epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, JsonObject)]
pub struct Epoch {
    /// Current configuration number, as a decimal string.
    pub configuration_version: String,
    /// Current data loss number, as a decimal string.
    pub data_loss_version: String,
}

/// A backup point that can be restored.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
pub struct BackupInfo {
    /// Backup id.
    pub backup_id: Option<Uuid>,
    /// Id of the chain of incremental backups this one belongs to.
    pub backup_chain_id: Option<Uuid>,
    /// `fabric:/` URI of the application.
    pub application_name: Option<String>,
    /// `fabric:/` URI of the service.
    pub service_name: Option<String>,
    /// Partition the backup was taken from.
    pub partition_information: Option<PartitionInformation>,
    /// Path of the backup relative to the storage root.
    pub backup_location: Option<String>,
    /// Full or incremental.
    pub backup_type: Option<BackupType>,
    /// Epoch of the last record in the backup.
    pub epoch_of_last_backup_record: Option<Epoch>,
    /// LSN of the last record in the backup, as a decimal string.
    pub lsn_of_last_backup_record: Option<String>,
    /// When the backup was taken.
    pub creation_time_utc: Option<DateTime<Utc>>,
    /// Service manifest version at the time of backup.
    pub service_manifest_version: Option<String>,
}

/// One page of backup configurations.
pub type PagedBackupConfigurationInfoList = PagedList<BackupConfigurationInfo>;

/// One page of backup points.
pub type PagedBackupInfoList = PagedList<BackupInfo>;

/// One page of entities a policy applies to.
pub type PagedBackupEntityList = PagedList<BackupEntity>;

#[cfg(test)]
mod tests {
    use super::*;
    use servicefabric_core::codec::{FamilyMember, JsonDecode, JsonEncode, Polymorphic};
    use servicefabric_core::ErrorKind;

    #[test]
    fn test_variant_tables() {
        assert_eq!(
            BackupConfigurationInfo::variant_table().tags().collect::<Vec<_>>(),
            vec!["Application", "Service", "Partition"]
        );
        assert_eq!(BackupEntity::variant_table().discriminator(), "EntityKind");
        assert_eq!(BackupStorageDescription::variant_table().len(), 2);
        assert_eq!(FileShareBackupStorageDescription::TAG, "FileShare");
    }

    #[test]
    fn test_decode_service_configuration() {
        let info = BackupConfigurationInfo::from_json_str(
            r#"{"Kind":"Service","PolicyName":"daily","PolicyInheritedFrom":"Application","ServiceName":"fabric:/App/Svc","SuspensionInfo":{"IsSuspended":false,"SuspensionInheritedFrom":"Invalid"}}"#,
        )
        .unwrap();
        let BackupConfigurationInfo::Service(service) = &info else {
            panic!("expected service variant, got {info:?}");
        };
        assert_eq!(service.service_name.as_deref(), Some("fabric:/App/Svc"));
        assert_eq!(service.policy_inherited_from, Some(BackupPolicyScope::Application));
        assert_eq!(info.policy_name(), Some("daily"));
        assert_eq!(
            info.suspension_info().and_then(|s| s.suspension_inherited_from),
            Some(BackupSuspensionScope::Invalid)
        );
    }

    #[test]
    fn test_entity_kind_matches_variant() {
        let entity =
            BackupEntity::from_json_str(r#"{"EntityKind":"Application","ApplicationName":"fabric:/A"}"#)
                .unwrap();
        assert_eq!(entity.entity_kind(), BackupEntityKind::Application);
        assert_eq!(entity.tag(), "Application");
    }

    #[test]
    fn test_kind_is_written_first() {
        let info = BackupConfigurationInfo::Partition(PartitionBackupConfigurationInfo {
            policy_name: Some("p".to_string()),
            partition_id: Some(Uuid::nil()),
            ..Default::default()
        });
        assert_eq!(
            info.to_json_string().unwrap(),
            r#"{"Kind":"Partition","PolicyName":"p","PartitionId":"00000000-0000-0000-0000-000000000000"}"#
        );
    }

    #[test]
    fn test_member_rejects_foreign_entity_kind() {
        let err = ServiceBackupEntity::from_json_str(
            r#"{"EntityKind":"Partition","ServiceName":"fabric:/A/B"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownVariant);
    }

    #[test]
    fn test_member_decodes_standalone() {
        let entity = ServiceBackupEntity::from_json_str(
            r#"{"ServiceName":"fabric:/A/B","EntityKind":"Service"}"#,
        )
        .unwrap();
        assert_eq!(entity.service_name.as_deref(), Some("fabric:/A/B"));
        assert_eq!(
            entity.to_json_string().unwrap(),
            r#"{"EntityKind":"Service","ServiceName":"fabric:/A/B"}"#
        );
    }

    #[test]
    fn test_backup_policy_with_nested_families() {
        let json = r#"{
            "Name": "hourly",
            "AutoRestoreOnDataLoss": true,
            "MaxIncrementalBackups": 5,
            "Schedule": {"ScheduleKind": "TimeBased", "ScheduleFrequencyType": "Weekly",
                         "RunDays": ["Monday", "Thursday"], "RunTimes": ["0001-01-01T09:00:00Z"]},
            "Storage": {"StorageKind": "FileShare", "Path": "\\\\share\\backups", "FriendlyName": "nas"}
        }"#;
        let policy = BackupPolicyDescription::from_json_str(json).unwrap();
        assert_eq!(policy.name, "hourly");
        assert!(policy.auto_restore_on_data_loss);
        assert_eq!(policy.max_incremental_backups, 5);

        let Some(BackupScheduleDescription::TimeBased(schedule)) = &policy.schedule else {
            panic!("expected time based schedule");
        };
        assert_eq!(schedule.schedule_frequency_type, BackupScheduleFrequencyType::Weekly);
        assert_eq!(
            schedule.run_days,
            Some(vec![DayOfWeek::Monday, DayOfWeek::Thursday])
        );
        assert_eq!(schedule.run_times.len(), 1);

        let Some(BackupStorageDescription::FileShare(storage)) = &policy.storage else {
            panic!("expected file share storage");
        };
        assert_eq!(storage.path, r"\\share\backups");
        assert_eq!(storage.friendly_name.as_deref(), Some("nas"));

        let again = BackupPolicyDescription::from_bytes(&policy.to_bytes().unwrap()).unwrap();
        assert_eq!(again, policy);
    }

    #[test]
    fn test_schedule_kind_must_lead() {
        let err = BackupScheduleDescription::from_json_str(
            r#"{"Interval":"PT1H","ScheduleKind":"FrequencyBased"}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SchemaViolation);
    }

    #[test]
    fn test_epoch_required_fields_default_when_absent() {
        let epoch = Epoch::from_json_str(r#"{"DataLossVersion":"3"}"#).unwrap();
        assert_eq!(epoch.configuration_version, "");
        assert_eq!(epoch.data_loss_version, "3");
    }
}
