//! Service Fabric REST DTOs.

mod backup;
mod enums;
mod partition;
mod property;
mod service;

pub use backup::{
    ApplicationBackupConfigurationInfo, ApplicationBackupEntity, AzureBlobBackupStorageDescription,
    BackupConfigurationInfo, BackupEntity, BackupInfo, BackupPolicyDescription,
    BackupScheduleDescription, BackupStorageDescription, BackupSuspensionInfo, Epoch,
    FileShareBackupStorageDescription, FrequencyBasedBackupScheduleDescription,
    PagedBackupConfigurationInfoList, PagedBackupEntityList, PagedBackupInfoList,
    PartitionBackupConfigurationInfo, PartitionBackupEntity, ServiceBackupConfigurationInfo,
    ServiceBackupEntity, TimeBasedBackupScheduleDescription,
};
pub use enums::{
    BackupEntityKind, BackupPolicyScope, BackupScheduleFrequencyType, BackupSuspensionScope,
    BackupType, DayOfWeek, HealthState, PropertyValueKind, ServiceKind, ServicePartitionKind,
    ServicePartitionStatus, ServiceStatus,
};
pub use partition::{
    Int64RangePartitionInformation, NamedPartitionInformation, PartitionInformation,
    ServicePartitionInfo, SingletonPartitionInformation,
};
pub use property::{
    BinaryPropertyValue, DoublePropertyValue, GuidPropertyValue, Int64PropertyValue,
    PagedPropertyInfoList, PropertyInfo, PropertyMetadata, PropertyValue, StringPropertyValue,
};
pub use service::{PagedServiceInfoList, ServiceInfo, StatefulServiceInfo, StatelessServiceInfo};
