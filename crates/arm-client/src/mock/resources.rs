//! Resource group operations for MockArmClient

use super::MockArmClient;
use crate::error::ArmError;
use crate::models::*;
use crate::resource_id;

pub async fn create_or_update_resource_group(
    client: &MockArmClient,
    subscription_id: &str,
    name: &str,
    location: &str,
    tags: &Tags,
) -> Result<ResourceGroup, ArmError> {
    let id = resource_id::resource_group(subscription_id, name);
    let group = ResourceGroup {
        id: id.clone(),
        name: name.to_string(),
        location: location.to_string(),
        tags: Some(tags.clone()),
        properties: ResourceGroupProperties {
            provisioning_state: Some(ProvisioningState::Succeeded),
        },
    };
    client
        .resource_groups
        .lock()
        .unwrap()
        .insert(id, group.clone());
    Ok(group)
}

pub async fn get_resource_group(
    client: &MockArmClient,
    subscription_id: &str,
    name: &str,
) -> Result<ResourceGroup, ArmError> {
    let id = resource_id::resource_group(subscription_id, name);
    client
        .resource_groups
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| ArmError::NotFound(format!("Resource group {} not found", name)))
}
