//! Workspace plan composition
//!
//! `WorkspacePlan::compose` turns a validated request into the full set of
//! declarations to apply: names, merged tags, the network layout, the
//! optional hub peering, and the workspace parameters. Composition is pure;
//! nothing touches the provider until the plan is applied.

use crate::error::ComposeError;
use crate::naming::ResourceNames;
use crate::network::NetworkPlan;
use crate::request::WorkspaceRequest;
use crate::tags::compliance_tags;
use arm_client::{PublicNetworkAccess, RequiredNsgRules, Tags, resource_id};

/// Everything needed to provision one workspace, derived from the request
#[derive(Debug, Clone)]
pub struct WorkspacePlan {
    pub names: ResourceNames,
    pub location: String,
    pub subscription_id: String,
    pub tags: Tags,
    pub network: NetworkPlan,
    /// Present iff the caller supplied a hub network id
    pub peering: Option<PeeringPlan>,
    pub workspace: WorkspaceParams,
}

/// One-way peering from the spoke to the supplied hub network
///
/// The spoke never routes through a hub-provided gateway, so gateway
/// transit and remote-gateway use stay disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeeringPlan {
    pub hub_vnet_id: String,
    pub allow_virtual_network_access: bool,
    pub allow_forwarded_traffic: bool,
    pub allow_gateway_transit: bool,
    pub use_remote_gateways: bool,
}

/// Workspace resource parameters derived from the request toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceParams {
    pub sku_name: String,
    /// Computed, never created directly: the provider creates and owns this
    /// resource group as a side effect of workspace creation
    pub managed_resource_group_id: String,
    pub public_network_access: PublicNetworkAccess,
    pub required_nsg_rules: RequiredNsgRules,
    pub enable_no_public_ip: bool,
}

impl WorkspacePlan {
    /// Compose the plan for a request
    ///
    /// Fails with `InvalidArgument` on empty required fields or an unusable
    /// spoke CIDR; never declares anything against the provider.
    pub fn compose(request: &WorkspaceRequest) -> Result<Self, ComposeError> {
        request.validate()?;

        let names = ResourceNames::derive(&request.team_name, &request.environment);
        let network = NetworkPlan::from_cidr(&request.spoke_cidr)?;
        let tags = compliance_tags(request);

        let peering = request.hub_vnet_id.as_ref().map(|hub| PeeringPlan {
            hub_vnet_id: hub.clone(),
            allow_virtual_network_access: true,
            allow_forwarded_traffic: true,
            allow_gateway_transit: false,
            use_remote_gateways: false,
        });

        let workspace = WorkspaceParams {
            sku_name: request.sku_tier.clone(),
            managed_resource_group_id: resource_id::resource_group(
                &request.subscription_id,
                &names.managed_resource_group,
            ),
            public_network_access: if request.enable_public_access {
                PublicNetworkAccess::Enabled
            } else {
                PublicNetworkAccess::Disabled
            },
            required_nsg_rules: if request.enable_public_access {
                RequiredNsgRules::AllRules
            } else {
                RequiredNsgRules::NoRules
            },
            enable_no_public_ip: !request.enable_public_access,
        };

        Ok(Self {
            names,
            location: request.location.clone(),
            subscription_id: request.subscription_id.clone(),
            tags,
            network,
            peering,
            workspace,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> WorkspaceRequest {
        WorkspaceRequest::new("data-science", "westeurope", "sub-123", "10.1.0.0/16")
    }

    #[test]
    fn composes_the_worked_example() {
        let plan = WorkspacePlan::compose(&request()).unwrap();

        assert_eq!(plan.network.private_subnet_cidr, "10.1.0.0/24");
        assert_eq!(plan.network.public_subnet_cidr, "10.1.1.0/24");
        assert_eq!(plan.names.workspace, "dbw-data-science-dev");
        assert_eq!(
            plan.workspace.managed_resource_group_id,
            "/subscriptions/sub-123/resourceGroups/rg-dbw-managed-data-science-dev"
        );
    }

    #[test]
    fn private_access_is_the_default_posture() {
        let plan = WorkspacePlan::compose(&request()).unwrap();

        assert_eq!(
            plan.workspace.public_network_access,
            PublicNetworkAccess::Disabled
        );
        assert_eq!(plan.workspace.required_nsg_rules, RequiredNsgRules::NoRules);
        assert!(plan.workspace.enable_no_public_ip);
    }

    #[test]
    fn public_access_inverts_all_three_toggles() {
        let mut request = request();
        request.enable_public_access = true;
        let plan = WorkspacePlan::compose(&request).unwrap();

        assert_eq!(
            plan.workspace.public_network_access,
            PublicNetworkAccess::Enabled
        );
        assert_eq!(plan.workspace.required_nsg_rules, RequiredNsgRules::AllRules);
        assert!(!plan.workspace.enable_no_public_ip);
    }

    #[test]
    fn peering_only_when_hub_supplied() {
        assert!(WorkspacePlan::compose(&request()).unwrap().peering.is_none());

        let mut request = request();
        request.hub_vnet_id = Some("/subscriptions/hub/resourceGroups/net/providers/Microsoft.Network/virtualNetworks/vnet-hub".to_string());
        let peering = WorkspacePlan::compose(&request)
            .unwrap()
            .peering
            .expect("peering plan");

        assert!(peering.allow_virtual_network_access);
        assert!(peering.allow_forwarded_traffic);
        assert!(!peering.allow_gateway_transit);
        assert!(!peering.use_remote_gateways);
    }

    #[test]
    fn plan_is_deterministic_for_identical_inputs() {
        let a = WorkspacePlan::compose(&request()).unwrap();
        let b = WorkspacePlan::compose(&request()).unwrap();

        assert_eq!(a.names, b.names);
        assert_eq!(a.tags, b.tags);
        assert_eq!(a.network, b.network);
    }

    #[test]
    fn invalid_cidr_fails_before_composition() {
        let mut request = request();
        request.spoke_cidr = "10.1.0.0".to_string();
        assert!(matches!(
            WorkspacePlan::compose(&request),
            Err(ComposeError::InvalidArgument(_))
        ));
    }
}
