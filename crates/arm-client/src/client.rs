//! ARM API client
//!
//! Implements the Azure Resource Manager REST client for the resource
//! types LakeOps provisions. Resource routes follow the ARM id hierarchy:
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}/{type}/{name}

use crate::common::HttpClient;
use crate::error::ArmError;
use crate::models::*;
use crate::arm_trait::ArmClientTrait;
use crate::resource_id;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Default ARM endpoint for the Azure public cloud
pub const DEFAULT_BASE_URL: &str = "https://management.azure.com";

const API_VERSION_RESOURCE_GROUPS: &str = "2022-09-01";
const API_VERSION_NETWORK: &str = "2023-09-01";
const API_VERSION_DATABRICKS: &str = "2024-05-01";
const API_VERSION_TENANTS: &str = "2022-12-01";

/// ARM API client
#[derive(Debug)]
pub struct ArmClient {
    http: HttpClient,
}

impl ArmClient {
    /// Create a new ARM client
    ///
    /// # Arguments
    /// * `base_url` - ARM endpoint (e.g., "https://management.azure.com")
    /// * `token` - Bearer access token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, ArmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ArmError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Validate the access token by making a lightweight authenticated request.
    ///
    /// Lists tenants visible to the token; any valid ARM token can do this,
    /// so a 401/403 here means the token itself is bad, not RBAC.
    pub async fn validate_token(&self) -> Result<(), ArmError> {
        debug!("Validating ARM token and connectivity");
        let _: serde_json::Value = self.http.get("/tenants", API_VERSION_TENANTS).await?;
        debug!("Token validated successfully");
        Ok(())
    }
}

#[async_trait::async_trait]
impl ArmClientTrait for ArmClient {
    fn base_url(&self) -> &str {
        ArmClient::base_url(self)
    }

    async fn validate_token(&self) -> Result<(), ArmError> {
        ArmClient::validate_token(self).await
    }

    async fn create_or_update_resource_group(
        &self,
        subscription_id: &str,
        name: &str,
        location: &str,
        tags: &Tags,
    ) -> Result<ResourceGroup, ArmError> {
        let id = resource_id::resource_group(subscription_id, name);
        debug!("Declaring resource group {}", name);
        let body = json!({
            "location": location,
            "tags": tags,
        });
        self.http.put(&id, API_VERSION_RESOURCE_GROUPS, &body).await
    }

    async fn get_resource_group(
        &self,
        subscription_id: &str,
        name: &str,
    ) -> Result<ResourceGroup, ArmError> {
        let id = resource_id::resource_group(subscription_id, name);
        self.http.get(&id, API_VERSION_RESOURCE_GROUPS).await
    }

    async fn create_or_update_network_security_group(
        &self,
        subscription_id: &str,
        resource_group: &str,
        name: &str,
        location: &str,
        tags: &Tags,
    ) -> Result<NetworkSecurityGroup, ArmError> {
        let id = resource_id::network_security_group(subscription_id, resource_group, name);
        debug!("Declaring network security group {}", name);
        // Empty rule set: workspace-required rules are injected by the
        // Databricks resource provider, platform defaults cover the rest.
        let body = json!({
            "location": location,
            "tags": tags,
            "properties": { "securityRules": [] },
        });
        self.http.put(&id, API_VERSION_NETWORK, &body).await
    }

    async fn create_or_update_virtual_network(
        &self,
        subscription_id: &str,
        resource_group: &str,
        name: &str,
        location: &str,
        address_prefixes: &[String],
        tags: &Tags,
    ) -> Result<VirtualNetwork, ArmError> {
        let id = resource_id::virtual_network(subscription_id, resource_group, name);
        debug!("Declaring virtual network {}", name);
        let body = json!({
            "location": location,
            "tags": tags,
            "properties": {
                "addressSpace": { "addressPrefixes": address_prefixes },
            },
        });
        self.http.put(&id, API_VERSION_NETWORK, &body).await
    }

    async fn get_virtual_network(
        &self,
        subscription_id: &str,
        resource_group: &str,
        name: &str,
    ) -> Result<VirtualNetwork, ArmError> {
        let id = resource_id::virtual_network(subscription_id, resource_group, name);
        self.http.get(&id, API_VERSION_NETWORK).await
    }

    async fn create_or_update_subnet(
        &self,
        subscription_id: &str,
        resource_group: &str,
        virtual_network: &str,
        name: &str,
        address_prefix: &str,
        network_security_group_id: &str,
        delegation_service: &str,
    ) -> Result<Subnet, ArmError> {
        let id = resource_id::subnet(subscription_id, resource_group, virtual_network, name);
        debug!("Declaring subnet {} ({})", name, address_prefix);
        let body = json!({
            "properties": {
                "addressPrefix": address_prefix,
                "networkSecurityGroup": { "id": network_security_group_id },
                "delegations": [Delegation::to_service(delegation_service)],
            },
        });
        self.http.put(&id, API_VERSION_NETWORK, &body).await
    }

    async fn get_subnet(
        &self,
        subscription_id: &str,
        resource_group: &str,
        virtual_network: &str,
        name: &str,
    ) -> Result<Subnet, ArmError> {
        let id = resource_id::subnet(subscription_id, resource_group, virtual_network, name);
        self.http.get(&id, API_VERSION_NETWORK).await
    }

    async fn create_or_update_peering(
        &self,
        subscription_id: &str,
        resource_group: &str,
        virtual_network: &str,
        name: &str,
        properties: PeeringProperties,
    ) -> Result<VirtualNetworkPeering, ArmError> {
        let id = resource_id::peering(subscription_id, resource_group, virtual_network, name);
        debug!(
            "Declaring peering {} -> {}",
            name, properties.remote_virtual_network.id
        );
        let body = json!({ "properties": properties });
        self.http.put(&id, API_VERSION_NETWORK, &body).await
    }

    async fn create_or_update_workspace(
        &self,
        subscription_id: &str,
        resource_group: &str,
        name: &str,
        location: &str,
        sku_name: &str,
        tags: &Tags,
        properties: WorkspaceCreateProperties,
    ) -> Result<Workspace, ArmError> {
        let id = resource_id::workspace(subscription_id, resource_group, name);
        debug!("Declaring Databricks workspace {}", name);
        let body = json!({
            "location": location,
            "sku": { "name": sku_name },
            "tags": tags,
            "properties": properties,
        });
        self.http.put(&id, API_VERSION_DATABRICKS, &body).await
    }

    async fn get_workspace(
        &self,
        subscription_id: &str,
        resource_group: &str,
        name: &str,
    ) -> Result<Workspace, ArmError> {
        let id = resource_id::workspace(subscription_id, resource_group, name);
        self.http.get(&id, API_VERSION_DATABRICKS).await
    }
}
