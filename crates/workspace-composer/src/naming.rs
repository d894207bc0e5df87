//! Resource naming conventions
//!
//! Names are a pure function of (team, environment). The conventions are
//! load-bearing: downstream tooling resolves these resources by name, and
//! the orchestrator deduplicates by name, which is what makes repeated
//! composition with identical inputs idempotent.

/// Fixed name of the private (container/backend) subnet
pub const PRIVATE_SUBNET_NAME: &str = "databricks-private";

/// Fixed name of the public (host) subnet
pub const PUBLIC_SUBNET_NAME: &str = "databricks-public";

/// Service both subnets are delegated to
pub const WORKSPACE_DELEGATION_SERVICE: &str = "Microsoft.Databricks/workspaces";

/// All derived resource names for one workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    pub resource_group: String,
    pub virtual_network: String,
    pub private_nsg: String,
    pub public_nsg: String,
    pub workspace: String,
    pub managed_resource_group: String,
    pub hub_peering: String,
}

impl ResourceNames {
    /// Derive every resource name from the team and environment
    pub fn derive(team_name: &str, environment: &str) -> Self {
        Self {
            resource_group: format!("rg-dbw-{}-{}", team_name, environment),
            virtual_network: format!("vnet-dbw-{}-{}", team_name, environment),
            private_nsg: format!("nsg-dbw-private-{}-{}", team_name, environment),
            public_nsg: format!("nsg-dbw-public-{}-{}", team_name, environment),
            workspace: format!("dbw-{}-{}", team_name, environment),
            managed_resource_group: format!("rg-dbw-managed-{}-{}", team_name, environment),
            hub_peering: format!("peer-dbw-{}-{}-hub", team_name, environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_the_fixed_conventions() {
        let names = ResourceNames::derive("data-science", "dev");

        assert_eq!(names.resource_group, "rg-dbw-data-science-dev");
        assert_eq!(names.virtual_network, "vnet-dbw-data-science-dev");
        assert_eq!(names.private_nsg, "nsg-dbw-private-data-science-dev");
        assert_eq!(names.public_nsg, "nsg-dbw-public-data-science-dev");
        assert_eq!(names.workspace, "dbw-data-science-dev");
        assert_eq!(names.managed_resource_group, "rg-dbw-managed-data-science-dev");
    }

    #[test]
    fn names_depend_only_on_team_and_environment() {
        assert_eq!(
            ResourceNames::derive("ml-platform", "prod"),
            ResourceNames::derive("ml-platform", "prod")
        );
        assert_ne!(
            ResourceNames::derive("ml-platform", "prod"),
            ResourceNames::derive("ml-platform", "dev")
        );
    }
}
