//! Tenant identity triple.

use std::fmt;

use serde::Serialize;

/// Identity of one hosted gear.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GearIdentity {
    uuid: String,
    container_name: String,
    namespace: String,
}

impl GearIdentity {
    pub fn new(
        uuid: impl Into<String>,
        container_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            container_name: container_name.into(),
            namespace: namespace.into(),
        }
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn container_name(&self) -> &str {
        &self.container_name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Directory token: `<uuid>_<namespace>_<container_name>`.
    pub fn token(&self) -> String {
        format!("{}_{}_{}", self.uuid, self.namespace, self.container_name)
    }

    /// Hostname the platform assigns this gear under `cloud_domain`.
    pub fn canonical_hostname(&self, cloud_domain: &str) -> String {
        format!("{}-{}.{}", self.container_name, self.namespace, cloud_domain)
    }
}

impl fmt::Display for GearIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.uuid, self.container_name, self.namespace)
    }
}
