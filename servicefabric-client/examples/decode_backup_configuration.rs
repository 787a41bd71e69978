//! Decodes a page of backup configurations and echoes each entry back.
//!
//! Run with: `RUST_LOG=servicefabric_core=trace cargo run --example decode_backup_configuration`

use servicefabric_client::core::Polymorphic;
use servicefabric_client::{
    BackupConfigurationInfo, CodecConfig, Marshaller, PagedBackupConfigurationInfoList,
};
use tracing_subscriber::EnvFilter;

const BODY: &str = r#"{
    "ContinuationToken": "",
    "Items": [
        {"Kind": "Application", "PolicyName": "daily", "PolicyInheritedFrom": "Application",
         "ApplicationName": "fabric:/CalcApp"},
        {"Kind": "Service", "PolicyName": "daily", "PolicyInheritedFrom": "Application",
         "ServiceName": "fabric:/CalcApp/CalcService", "Undocumented": {"Added": "later"}},
        {"Kind": "Partition", "PolicyName": "hourly", "PolicyInheritedFrom": "Partition",
         "ServiceName": "fabric:/CalcApp/CalcService",
         "PartitionId": "1daae3f5-7fd6-42e9-b1ba-8c05f873994d",
         "SuspensionInfo": {"IsSuspended": true, "SuspensionInheritedFrom": "Partition"}}
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let marshaller = Marshaller::new(CodecConfig::from_env()?);
    let page: PagedBackupConfigurationInfoList = marshaller.decode_str(BODY)?;

    println!("=== {} backup configuration(s) ===\n", page.len());
    for info in &page.items {
        let scope = match info {
            BackupConfigurationInfo::Application(app) => app.application_name.as_deref(),
            BackupConfigurationInfo::Service(svc) => svc.service_name.as_deref(),
            BackupConfigurationInfo::Partition(partition) => partition.service_name.as_deref(),
        };
        let suspended = info
            .suspension_info()
            .and_then(|s| s.is_suspended)
            .unwrap_or(false);
        println!(
            "{:<12} {:<32} policy={:<8} suspended={}",
            info.tag(),
            scope.unwrap_or("-"),
            info.policy_name().unwrap_or("-"),
            suspended
        );
    }

    println!("\nRe-encoded:\n{}", marshaller.encode_to_string(&page)?);
    println!("More pages: {}", page.has_more());
    Ok(())
}
