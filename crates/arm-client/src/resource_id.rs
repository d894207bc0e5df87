//! ARM resource id construction
//!
//! Azure addresses every resource by a hierarchical id path; the same path
//! is both the REST route and the cross-resource reference format. These
//! helpers are shared by the real client and the mock so both produce
//! identical ids.

/// Resource group id: `/subscriptions/{sub}/resourceGroups/{name}`
pub fn resource_group(subscription_id: &str, name: &str) -> String {
    format!("/subscriptions/{}/resourceGroups/{}", subscription_id, name)
}

/// Virtual network id under `Microsoft.Network`
pub fn virtual_network(subscription_id: &str, resource_group: &str, name: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}",
        subscription_id, resource_group, name
    )
}

/// Subnet id (child of a virtual network)
pub fn subnet(
    subscription_id: &str,
    resource_group: &str,
    virtual_network_name: &str,
    name: &str,
) -> String {
    format!(
        "{}/subnets/{}",
        virtual_network(subscription_id, resource_group, virtual_network_name),
        name
    )
}

/// Network security group id under `Microsoft.Network`
pub fn network_security_group(subscription_id: &str, resource_group: &str, name: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Network/networkSecurityGroups/{}",
        subscription_id, resource_group, name
    )
}

/// Virtual network peering id (child of a virtual network)
pub fn peering(
    subscription_id: &str,
    resource_group: &str,
    virtual_network_name: &str,
    name: &str,
) -> String {
    format!(
        "{}/virtualNetworkPeerings/{}",
        virtual_network(subscription_id, resource_group, virtual_network_name),
        name
    )
}

/// Databricks workspace id under `Microsoft.Databricks`
pub fn workspace(subscription_id: &str, resource_group: &str, name: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Databricks/workspaces/{}",
        subscription_id, resource_group, name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnet_id_nests_under_virtual_network() {
        let id = subnet("sub-123", "rg-dbw-data-science-dev", "vnet-dbw-data-science-dev", "databricks-private");
        assert_eq!(
            id,
            "/subscriptions/sub-123/resourceGroups/rg-dbw-data-science-dev\
             /providers/Microsoft.Network/virtualNetworks/vnet-dbw-data-science-dev\
             /subnets/databricks-private"
        );
    }

    #[test]
    fn workspace_id_uses_databricks_provider() {
        let id = workspace("sub-123", "rg", "dbw-team-dev");
        assert!(id.contains("/providers/Microsoft.Databricks/workspaces/dbw-team-dev"));
    }
}
