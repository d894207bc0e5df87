//! ArmClient trait for mocking
//!
//! This trait abstracts the ArmClient to enable mocking in unit tests.
//! The concrete ArmClient implements this trait, and tests can use mock implementations.

use crate::error::ArmError;
use crate::models::*;

/// Trait for ARM API client operations
///
/// Every write is a PUT (create-or-update), so declaring the same resource
/// name twice addresses the same managed resource. All async methods must
/// be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait ArmClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// Validate the access token
    async fn validate_token(&self) -> Result<(), ArmError>;

    // Resource group operations
    async fn create_or_update_resource_group(&self, subscription_id: &str, name: &str, location: &str, tags: &Tags) -> Result<ResourceGroup, ArmError>;
    async fn get_resource_group(&self, subscription_id: &str, name: &str) -> Result<ResourceGroup, ArmError>;

    // Network operations
    async fn create_or_update_network_security_group(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, tags: &Tags) -> Result<NetworkSecurityGroup, ArmError>;
    async fn create_or_update_virtual_network(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, address_prefixes: &[String], tags: &Tags) -> Result<VirtualNetwork, ArmError>;
    async fn get_virtual_network(&self, subscription_id: &str, resource_group: &str, name: &str) -> Result<VirtualNetwork, ArmError>;
    async fn create_or_update_subnet(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str, address_prefix: &str, network_security_group_id: &str, delegation_service: &str) -> Result<Subnet, ArmError>;
    async fn get_subnet(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str) -> Result<Subnet, ArmError>;
    async fn create_or_update_peering(&self, subscription_id: &str, resource_group: &str, virtual_network: &str, name: &str, properties: PeeringProperties) -> Result<VirtualNetworkPeering, ArmError>;

    // Workspace operations
    async fn create_or_update_workspace(&self, subscription_id: &str, resource_group: &str, name: &str, location: &str, sku_name: &str, tags: &Tags, properties: WorkspaceCreateProperties) -> Result<Workspace, ArmError>;
    async fn get_workspace(&self, subscription_id: &str, resource_group: &str, name: &str) -> Result<Workspace, ArmError>;
}
