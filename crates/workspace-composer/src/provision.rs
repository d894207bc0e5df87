//! Plan application against the provider
//!
//! Walks the composed plan in dependency order: resource group, then the
//! two NSGs (independent, created concurrently), then the virtual network,
//! then the subnets, the optional hub peering, and finally the workspace.
//! ARM PUTs are create-or-update, so re-running a provision with identical
//! inputs converges on the same managed resources.

use crate::error::ComposeError;
use crate::naming::{PRIVATE_SUBNET_NAME, PUBLIC_SUBNET_NAME, WORKSPACE_DELEGATION_SERVICE};
use crate::outputs::{NetworkConfig, WorkspaceOutputs};
use crate::plan::WorkspacePlan;
use crate::request::WorkspaceRequest;
use arm_client::{
    ArmClientTrait, ArmError, CustomParameter, PeeringProperties, ProvisioningState, SubResource,
    Workspace, WorkspaceCreateProperties, WorkspaceCustomParameters,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

const PROVISIONING_POLL_INTERVAL: Duration = Duration::from_secs(10);
// Workspace creation normally completes in a few minutes; give up after 15
const PROVISIONING_POLL_LIMIT: u32 = 90;

/// Applies workspace plans against an ARM client
pub struct Provisioner {
    client: Arc<dyn ArmClientTrait>,
}

impl std::fmt::Debug for Provisioner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Provisioner")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}

impl Provisioner {
    /// Create a provisioner over any ARM client implementation
    pub fn new(client: Arc<dyn ArmClientTrait>) -> Self {
        Self { client }
    }

    /// Provision one workspace end to end and return its resolved outputs
    ///
    /// Validation failures surface as `InvalidArgument` before anything is
    /// declared; provider rejections surface as `ProvisionFailed` and are
    /// not retried here.
    pub async fn provision(
        &self,
        request: &WorkspaceRequest,
    ) -> Result<WorkspaceOutputs, ComposeError> {
        let plan = WorkspacePlan::compose(request)?;
        let subscription = plan.subscription_id.as_str();
        info!(
            "Provisioning workspace {} in {} ({})",
            plan.names.workspace, plan.location, plan.network.spoke_cidr
        );

        let group = self
            .client
            .create_or_update_resource_group(
                subscription,
                &plan.names.resource_group,
                &plan.location,
                &plan.tags,
            )
            .await?;
        debug!("Resource group {} ready", group.name);

        // The two NSGs have no dependency on each other
        let (private_nsg, public_nsg) = tokio::try_join!(
            self.client.create_or_update_network_security_group(
                subscription,
                &group.name,
                &plan.names.private_nsg,
                &plan.location,
                &plan.tags,
            ),
            self.client.create_or_update_network_security_group(
                subscription,
                &group.name,
                &plan.names.public_nsg,
                &plan.location,
                &plan.tags,
            ),
        )?;

        let vnet = self
            .client
            .create_or_update_virtual_network(
                subscription,
                &group.name,
                &plan.names.virtual_network,
                &plan.location,
                &[plan.network.spoke_cidr.clone()],
                &plan.tags,
            )
            .await?;
        info!(
            "Virtual network {} scoped to {}",
            vnet.name, plan.network.spoke_cidr
        );

        // Private first, then public: not functionally required, but keeps
        // creation order deterministic
        let private_subnet = self
            .client
            .create_or_update_subnet(
                subscription,
                &group.name,
                &vnet.name,
                PRIVATE_SUBNET_NAME,
                &plan.network.private_subnet_cidr,
                &private_nsg.id,
                WORKSPACE_DELEGATION_SERVICE,
            )
            .await?;
        let public_subnet = self
            .client
            .create_or_update_subnet(
                subscription,
                &group.name,
                &vnet.name,
                PUBLIC_SUBNET_NAME,
                &plan.network.public_subnet_cidr,
                &public_nsg.id,
                WORKSPACE_DELEGATION_SERVICE,
            )
            .await?;

        if let Some(peering) = &plan.peering {
            self.client
                .create_or_update_peering(
                    subscription,
                    &group.name,
                    &vnet.name,
                    &plan.names.hub_peering,
                    PeeringProperties {
                        remote_virtual_network: SubResource::new(peering.hub_vnet_id.as_str()),
                        allow_virtual_network_access: peering.allow_virtual_network_access,
                        allow_forwarded_traffic: peering.allow_forwarded_traffic,
                        allow_gateway_transit: peering.allow_gateway_transit,
                        use_remote_gateways: peering.use_remote_gateways,
                        peering_state: None,
                        provisioning_state: None,
                    },
                )
                .await?;
            info!("Peered {} to hub {}", vnet.name, peering.hub_vnet_id);
        } else {
            debug!("No hub network supplied, skipping peering");
        }

        let workspace = self
            .client
            .create_or_update_workspace(
                subscription,
                &group.name,
                &plan.names.workspace,
                &plan.location,
                &plan.workspace.sku_name,
                &plan.tags,
                WorkspaceCreateProperties {
                    managed_resource_group_id: plan.workspace.managed_resource_group_id.clone(),
                    parameters: WorkspaceCustomParameters {
                        custom_virtual_network_id: Some(CustomParameter::new(vnet.id.clone())),
                        custom_private_subnet_name: Some(CustomParameter::new(
                            PRIVATE_SUBNET_NAME.to_string(),
                        )),
                        custom_public_subnet_name: Some(CustomParameter::new(
                            PUBLIC_SUBNET_NAME.to_string(),
                        )),
                        enable_no_public_ip: Some(CustomParameter::new(
                            plan.workspace.enable_no_public_ip,
                        )),
                    },
                    public_network_access: plan.workspace.public_network_access,
                    required_nsg_rules: plan.workspace.required_nsg_rules,
                },
            )
            .await?;

        let workspace = self
            .wait_until_provisioned(subscription, &group.name, workspace)
            .await?;

        let workspace_url = workspace.properties.workspace_url.ok_or_else(|| {
            ComposeError::ProvisionFailed(ArmError::Api(format!(
                "workspace {} resolved without a workspace URL",
                workspace.name
            )))
        })?;
        let workspace_id = workspace.properties.workspace_id.ok_or_else(|| {
            ComposeError::ProvisionFailed(ArmError::Api(format!(
                "workspace {} resolved without a workspace id",
                workspace.name
            )))
        })?;
        info!(
            "Workspace {} provisioned (ID: {})",
            workspace.name, workspace_id
        );

        Ok(WorkspaceOutputs {
            workspace_url: format!("https://{}", workspace_url),
            workspace_id,
            workspace_name: workspace.name,
            resource_group_name: group.name,
            managed_resource_group_name: plan.names.managed_resource_group,
            network_config: NetworkConfig {
                vnet_id: vnet.id,
                private_subnet_id: private_subnet.id,
                public_subnet_id: public_subnet.id,
            },
        })
    }

    /// Poll the workspace until ARM reports a terminal provisioning state
    ///
    /// Failure states are not retried; they surface to the caller's own
    /// retry policy.
    async fn wait_until_provisioned(
        &self,
        subscription_id: &str,
        resource_group: &str,
        mut workspace: Workspace,
    ) -> Result<Workspace, ComposeError> {
        let mut polls = 0;
        loop {
            let state = workspace.properties.provisioning_state;
            match state {
                Some(ProvisioningState::Succeeded) => return Ok(workspace),
                Some(ProvisioningState::Failed) | Some(ProvisioningState::Canceled) => {
                    return Err(ComposeError::ProvisionFailed(ArmError::Api(format!(
                        "workspace {} entered provisioning state {:?}",
                        workspace.name, state
                    ))));
                }
                _ => {
                    if polls >= PROVISIONING_POLL_LIMIT {
                        warn!(
                            "Workspace {} still in state {:?} after {} polls",
                            workspace.name, state, polls
                        );
                        return Err(ComposeError::ProvisionFailed(ArmError::Api(format!(
                            "workspace {} did not reach a terminal provisioning state in time",
                            workspace.name
                        ))));
                    }
                    polls += 1;
                    debug!(
                        "Workspace {} provisioning ({:?}), waiting",
                        workspace.name, state
                    );
                    tokio::time::sleep(PROVISIONING_POLL_INTERVAL).await;
                    workspace = self
                        .client
                        .get_workspace(subscription_id, resource_group, &workspace.name)
                        .await?;
                }
            }
        }
    }
}
