//! Service DTOs.

use servicefabric_core::codec::PagedList;
use servicefabric_core::{JsonObject, Polymorphic};

use super::enums::{HealthState, ServiceKind, ServiceStatus};

/// A service, discriminated by `ServiceKind`.
#[derive(Debug, Clone, PartialEq, Polymorphic)]
#[fabric(discriminator = "ServiceKind")]
pub enum ServiceInfo {
    /// A service with persisted or in-memory replicated state.
    Stateful(StatefulServiceInfo),
    /// A service without replicated state.
    Stateless(StatelessServiceInfo),
}

impl ServiceInfo {
    /// Returns the service kind matching the active variant.
    pub fn service_kind(&self) -> ServiceKind {
        match self {
            Self::Stateful(_) => ServiceKind::Stateful,
            Self::Stateless(_) => ServiceKind::Stateless,
        }
    }

    /// Returns the `fabric:/` URI of the service.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Stateful(info) => info.name.as_deref(),
            Self::Stateless(info) => info.name.as_deref(),
        }
    }
}

/// A stateful service.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ServiceKind", tag = "Stateful")]
pub struct StatefulServiceInfo {
    /// Identity of the service, the name without the `fabric:` scheme.
    pub id: Option<String>,
    /// `fabric:/` URI of the service.
    pub name: Option<String>,
    /// Service type registered in the application manifest.
    pub type_name: Option<String>,
    /// Version of the service manifest.
    pub manifest_version: Option<String>,
    /// Aggregated health of the service.
    pub health_state: Option<HealthState>,
    /// Lifecycle status of the service.
    pub service_status: Option<ServiceStatus>,
    /// Whether the service is a service group.
    pub is_service_group: Option<bool>,
    /// Whether the service keeps its state on local disk.
    pub has_persisted_state: Option<bool>,
}

/// A stateless service.
#[derive(Debug, Clone, Default, PartialEq, JsonObject)]
#[fabric(discriminator = "ServiceKind", tag = "Stateless")]
pub struct StatelessServiceInfo {
    /// Identity of the service, the name without the `fabric:` scheme.
    pub id: Option<String>,
    /// `fabric:/` URI of the service.
    pub name: Option<String>,
    /// Service type registered in the application manifest.
    pub type_name: Option<String>,
    /// Version of the service manifest.
    pub manifest_version: Option<String>,
    /// Aggregated health of the service.
    pub health_state: Option<HealthState>,
    /// Lifecycle status of the service.
    pub service_status: Option<ServiceStatus>,
    /// Whether the service is a service group.
    pub is_service_group: Option<bool>,
}

/// One page of services.
pub type PagedServiceInfoList = PagedList<ServiceInfo>;

#[cfg(test)]
mod tests {
    use super::*;
    use servicefabric_core::codec::{JsonDecode, JsonEncode};

    #[test]
    fn test_page_of_mixed_services() {
        let json = r#"{
            "ContinuationToken": "fabric:/app/svc2",
            "Items": [
                {"ServiceKind": "Stateful", "Id": "app~svc1", "Name": "fabric:/app/svc1",
                 "TypeName": "Svc1Type", "ManifestVersion": "1.0.0", "HealthState": "Ok",
                 "ServiceStatus": "Active", "IsServiceGroup": false, "HasPersistedState": true},
                {"ServiceKind": "Stateless", "Id": "app~svc2", "Name": "fabric:/app/svc2",
                 "HealthState": "Warning", "ServiceStatus": "Upgrading"}
            ]
        }"#;
        let page = PagedServiceInfoList::from_json_str(json).unwrap();
        assert!(page.has_more());
        assert_eq!(page.len(), 2);
        assert_eq!(page.items[0].service_kind(), ServiceKind::Stateful);
        assert_eq!(page.items[1].name(), Some("fabric:/app/svc2"));
        let ServiceInfo::Stateful(stateful) = &page.items[0] else {
            panic!("expected stateful service");
        };
        assert_eq!(stateful.has_persisted_state, Some(true));
    }

    #[test]
    fn test_unknown_status_is_the_real_unknown() {
        let service = ServiceInfo::from_json_str(
            r#"{"ServiceKind":"Stateless","ServiceStatus":"Unknown","HealthState":"Unknown"}"#,
        )
        .unwrap();
        let ServiceInfo::Stateless(stateless) = service else {
            panic!("expected stateless service");
        };
        assert_eq!(stateless.service_status, Some(ServiceStatus::Unknown));
        assert_eq!(stateless.health_state, Some(HealthState::Unknown));
    }

    #[test]
    fn test_encode_stateless() {
        let service = ServiceInfo::Stateless(StatelessServiceInfo {
            name: Some("fabric:/app/web".to_string()),
            health_state: Some(HealthState::Ok),
            ..Default::default()
        });
        assert_eq!(
            service.to_json_string().unwrap(),
            r#"{"ServiceKind":"Stateless","Name":"fabric:/app/web","HealthState":"Ok"}"#
        );
    }
}
