//! Mock ArmClient for unit testing
//!
//! This module provides a mock implementation of ArmClientTrait that can be
//! used in unit tests without requiring Azure credentials or network access.
//!
//! The mock is organized into domain-specific modules:
//! - `resources.rs` - Resource group operations
//! - `network.rs` - Network operations (VNets, subnets, NSGs, peerings)
//! - `workspace.rs` - Databricks workspace operations

mod network;
mod resources;
mod workspace;

use crate::error::ArmError;
use crate::models::*;
use crate::arm_trait::ArmClientTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ArmClient for testing
///
/// Stores resources in memory, keyed by their ARM id, and can be configured
/// to reject workspace creation for failure-path tests. PUT semantics match
/// ARM: declaring the same id twice overwrites the same entry.
#[derive(Debug, Clone)]
pub struct MockArmClient {
    pub(crate) base_url: String,
    // In-memory storage for resources, keyed by ARM resource id
    pub(crate) resource_groups: Arc<Mutex<HashMap<String, ResourceGroup>>>,
    pub(crate) virtual_networks: Arc<Mutex<HashMap<String, VirtualNetwork>>>,
    pub(crate) subnets: Arc<Mutex<HashMap<String, Subnet>>>,
    pub(crate) network_security_groups: Arc<Mutex<HashMap<String, NetworkSecurityGroup>>>,
    pub(crate) peerings: Arc<Mutex<HashMap<String, VirtualNetworkPeering>>>,
    pub(crate) workspaces: Arc<Mutex<HashMap<String, Workspace>>>,
    // Injected error returned by workspace creation (simulates provider rejection)
    pub(crate) workspace_create_error: Arc<Mutex<Option<String>>>,
    // Counter for generating provider-assigned workspace ids
    pub(crate) next_id: Arc<Mutex<u64>>,
}

impl MockArmClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            resource_groups: Arc::new(Mutex::new(HashMap::new())),
            virtual_networks: Arc::new(Mutex::new(HashMap::new())),
            subnets: Arc::new(Mutex::new(HashMap::new())),
            network_security_groups: Arc::new(Mutex::new(HashMap::new())),
            peerings: Arc::new(Mutex::new(HashMap::new())),
            workspaces: Arc::new(Mutex::new(HashMap::new())),
            workspace_create_error: Arc::new(Mutex::new(None)),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Add a workspace to the mock store (for test setup)
    pub fn add_workspace(&self, workspace: Workspace) {
        self.workspaces
            .lock()
            .unwrap()
            .insert(workspace.id.clone(), workspace);
    }

    /// Make every subsequent workspace creation fail with the given message
    ///
    /// Simulates provider-side rejection (invalid SKU, quota, naming collision).
    pub fn fail_workspace_creation(&self, message: impl Into<String>) {
        *self.workspace_create_error.lock().unwrap() = Some(message.into());
    }

    /// Snapshot of every peering currently declared (for test assertions)
    pub fn declared_peerings(&self) -> Vec<VirtualNetworkPeering> {
        self.peerings.lock().unwrap().values().cloned().collect()
    }

    /// Generate the next provider-assigned numeric id
    pub(crate) fn next_id(&self) -> u64 {
        let mut id = self.next_id.lock().unwrap();
        let current = *id;
        *id += 1;
        current
    }
}

#[async_trait::async_trait]
impl ArmClientTrait for MockArmClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn validate_token(&self) -> Result<(), ArmError> {
        Ok(())
    }

    // Resource group operations - delegated to resources module
    async fn create_or_update_resource_group(&self, subscription_id: &str, name: &str, location: &str, tags: &Tags) -> Result<ResourceGroup, ArmError> {
        resources::create_or_update_resource_group(self, subscription_id, name, location, tags).await
    }

    async fn get_resource_group(&self, subscription_id: &str, name: &str) -> Result<ResourceGroup, ArmError> {
        resources::get_resource_group(self, subscription_id, name).await
    }

    // Network operations - delegated to network module
    async fn create_or_update_network_security_group(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, tags: &Tags) -> Result<NetworkSecurityGroup, ArmError> {
        network::create_or_update_network_security_group(self, subscription_id, resource_group, name, location, tags).await
    }

    async fn create_or_update_virtual_network(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, address_prefixes: &[String], tags: &Tags) -> Result<VirtualNetwork, ArmError> {
        network::create_or_update_virtual_network(self, subscription_id, resource_group, name, location, address_prefixes, tags).await
    }

    async fn get_virtual_network(&self, subscription_id: &str, resource_group: &str, name: &str) -> Result<VirtualNetwork, ArmError> {
        network::get_virtual_network(self, subscription_id, resource_group, name).await
    }

    async fn create_or_update_subnet(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str, address_prefix: &str, network_security_group_id: &str, delegation_service: &str) -> Result<Subnet, ArmError> {
        network::create_or_update_subnet(self, subscription_id, resource_group, virtual_network, name, address_prefix, network_security_group_id, delegation_service).await
    }

    async fn get_subnet(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str) -> Result<Subnet, ArmError> {
        network::get_subnet(self, subscription_id, resource_group, virtual_network, name).await
    }

    async fn create_or_update_peering(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str, properties: PeeringProperties) -> Result<VirtualNetworkPeering, ArmError> {
        network::create_or_update_peering(self, subscription_id, resource_group, virtual_network, name, properties).await
    }

    // Workspace operations - delegated to workspace module
    async fn create_or_update_workspace(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, sku_name: &str, tags: &Tags, properties: WorkspaceCreateProperties) -> Result<Workspace, ArmError> {
        workspace::create_or_update_workspace(self, subscription_id, resource_group, name, location, sku_name, tags, properties).await
    }

    async fn get_workspace(&self, subscription_id: &str, resource_group: &str, name: &str) -> Result<Workspace, ArmError> {
        workspace::get_workspace(self, subscription_id, resource_group, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_properties() -> WorkspaceCreateProperties {
        WorkspaceCreateProperties {
            managed_resource_group_id: "/subscriptions/sub-123/resourceGroups/rg-managed".to_string(),
            parameters: WorkspaceCustomParameters::default(),
            public_network_access: PublicNetworkAccess::Disabled,
            required_nsg_rules: RequiredNsgRules::NoRules,
        }
    }

    #[tokio::test]
    async fn put_twice_preserves_provider_assigned_identity() {
        let mock = MockArmClient::new("https://mock.arm.local");
        let tags = Tags::new();

        let first = mock
            .create_or_update_workspace("sub-123", "rg", "dbw-team-dev", "westeurope", "premium", &tags, create_properties())
            .await
            .unwrap();
        let second = mock
            .create_or_update_workspace("sub-123", "rg", "dbw-team-dev", "westeurope", "premium", &tags, create_properties())
            .await
            .unwrap();

        assert_eq!(first.properties.workspace_id, second.properties.workspace_id);
        assert_eq!(mock.workspaces.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn seeded_workspace_is_returned_by_get() {
        let mock = MockArmClient::new("https://mock.arm.local");
        let seeded = mock
            .create_or_update_workspace("sub-123", "rg", "dbw-team-dev", "westeurope", "premium", &Tags::new(), create_properties())
            .await
            .unwrap();
        let fresh = MockArmClient::new("https://mock.arm.local");
        fresh.add_workspace(seeded.clone());

        let fetched = fresh.get_workspace("sub-123", "rg", "dbw-team-dev").await.unwrap();
        assert_eq!(fetched.id, seeded.id);
    }

    #[tokio::test]
    async fn injected_failure_rejects_creation() {
        let mock = MockArmClient::new("https://mock.arm.local");
        mock.fail_workspace_creation("QuotaExceeded");

        let result = mock
            .create_or_update_workspace("sub-123", "rg", "dbw-team-dev", "westeurope", "premium", &Tags::new(), create_properties())
            .await;

        assert!(matches!(result, Err(ArmError::Api(_))));
    }
}
