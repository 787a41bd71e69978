//! Typed request and response bodies for the [Service Fabric](https://learn.microsoft.com/azure/service-fabric/)
//! cluster management REST API.
//!
//! This crate defines the DTOs the REST surface exchanges, on top of the codec in
//! [`servicefabric_core`], and a [`Marshaller`] that turns complete HTTP bodies into
//! those DTOs and back. It performs no I/O: an HTTP layer hands it bytes.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use servicefabric_client::{BackupConfigurationInfo, CodecConfig, Marshaller};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let marshaller = Marshaller::new(CodecConfig::builder().max_depth(64).build()?);
//!
//!     let body = br#"{"Kind":"Service","PolicyName":"daily","ServiceName":"fabric:/App/Svc"}"#;
//!     let info: BackupConfigurationInfo = marshaller.decode(body)?;
//!     assert_eq!(info.policy_name(), Some("daily"));
//!
//!     let echoed = marshaller.encode_to_string(&info)?;
//!     assert!(echoed.starts_with(r#"{"Kind":"Service""#));
//!     Ok(())
//! }
//! ```
//!
//! # Families
//!
//! Polymorphic DTOs are Rust enums whose variants wrap one flat object each. The
//! discriminator property must be the first property of the object:
//!
//! | Family | Discriminator | Variants |
//! |--------|---------------|----------|
//! | [`BackupConfigurationInfo`] | `Kind` | Application, Service, Partition |
//! | [`BackupEntity`] | `EntityKind` | Application, Service, Partition |
//! | [`BackupScheduleDescription`] | `ScheduleKind` | FrequencyBased, TimeBased |
//! | [`BackupStorageDescription`] | `StorageKind` | AzureBlobStore, FileShare |
//! | [`PartitionInformation`] | `ServicePartitionKind` | Int64Range, Named, Singleton |
//! | [`PropertyValue`] | `Kind` | Binary, Int64, Double, String, Guid |
//! | [`ServiceInfo`] | `ServiceKind` | Stateful, Stateless |
//!
//! # Configuration
//!
//! [`CodecConfig`] is built in code, read from `SF_CODEC_*` environment variables
//! with [`CodecConfig::from_env`], or loaded from YAML/TOML with the `config-file`
//! feature.
//!
//! # Feature Flags
//!
//! | Flag | Purpose |
//! |------|---------|
//! | `config-file` | Load [`CodecConfig`] from YAML or TOML files |

#![warn(missing_docs)]

pub mod config;
pub mod config_file;
mod marshal;
pub mod models;

pub use config::{CodecConfig, CodecConfigBuilder, ConfigError, MAX_DEPTH_LIMIT};
pub use marshal::Marshaller;
pub use models::*;
pub use servicefabric_core as core;
pub use servicefabric_core::{ErrorKind, FabricError, Result};
