//! Workspace provisioning outputs
//!
//! The read-only result bundle exposed to callers once every dependent
//! resource has a resolved identifier. Serialized key names are a stable
//! contract consumed by downstream tooling.

use serde::{Deserialize, Serialize};

/// Resolved identifiers for one provisioned workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceOutputs {
    /// Browser URL of the workspace (https scheme included)
    pub workspace_url: String,
    /// Provider-assigned numeric workspace id
    pub workspace_id: String,
    pub workspace_name: String,
    pub resource_group_name: String,
    pub managed_resource_group_name: String,
    pub network_config: NetworkConfig,
}

/// Network identifiers of the workspace's spoke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub vnet_id: String,
    pub private_subnet_id: String,
    pub public_subnet_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_under_the_stable_keys() {
        let outputs = WorkspaceOutputs {
            workspace_url: "https://adb-1.2.azuredatabricks.net".to_string(),
            workspace_id: "1700000000000001".to_string(),
            workspace_name: "dbw-data-science-dev".to_string(),
            resource_group_name: "rg-dbw-data-science-dev".to_string(),
            managed_resource_group_name: "rg-dbw-managed-data-science-dev".to_string(),
            network_config: NetworkConfig {
                vnet_id: "/vnet".to_string(),
                private_subnet_id: "/vnet/subnets/databricks-private".to_string(),
                public_subnet_id: "/vnet/subnets/databricks-public".to_string(),
            },
        };

        let value = serde_json::to_value(&outputs).unwrap();
        for key in [
            "workspaceUrl",
            "workspaceId",
            "workspaceName",
            "resourceGroupName",
            "managedResourceGroupName",
            "networkConfig",
        ] {
            assert!(value.get(key).is_some(), "missing output key {}", key);
        }
        for key in ["vnetId", "privateSubnetId", "publicSubnetId"] {
            assert!(value["networkConfig"].get(key).is_some(), "missing network key {}", key);
        }
    }
}
