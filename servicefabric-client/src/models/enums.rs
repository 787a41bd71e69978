//! String-carried enums of the Service Fabric REST schema.
//!
//! Every enum has an `Unrecognized` sentinel with no wire string. Values the server
//! adds later decode to it; encoding it fails. Members are named after their wire
//! strings.

#![allow(missing_docs)]

use servicefabric_core::WireEnum;

/// The kind of entity a backup policy is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum BackupEntityKind {
    /// Not a valid wire value; returned for strings this client does not know.
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Partition,
    Service,
    Application,
}

/// Scope from which a backup policy was inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum BackupPolicyScope {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Partition,
    Service,
    Application,
}

/// Scope from which a backup suspension was inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum BackupSuspensionScope {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Partition,
    Service,
    Application,
}

/// Whether a backup is full or incremental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum BackupType {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Full,
    Incremental,
}

/// How often a time-based backup schedule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum BackupScheduleFrequencyType {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Daily,
    Weekly,
}

/// Day of the week, as used by weekly backup schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum DayOfWeek {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// Aggregated health of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum HealthState {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Ok,
    Warning,
    Error,
    /// The wire value `"Unknown"`: the cluster could not evaluate health.
    Unknown,
}

/// Stateful or stateless service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum ServiceKind {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Stateless,
    Stateful,
}

/// Lifecycle status of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum ServiceStatus {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Unknown,
    Active,
    Upgrading,
    Deleting,
    Creating,
    Failed,
}

/// Status of a service partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum ServicePartitionStatus {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Ready,
    NotReady,
    InQuorumLoss,
    Reconfiguring,
    Deleting,
}

/// Partitioning scheme of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum ServicePartitionKind {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Singleton,
    Int64Range,
    Named,
}

/// Type of a naming-service property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, WireEnum)]
pub enum PropertyValueKind {
    #[default]
    #[fabric(unknown)]
    Unrecognized,
    Invalid,
    Binary,
    Int64,
    Double,
    String,
    Guid,
}
