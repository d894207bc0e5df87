//! Databricks workspace operations for MockArmClient

use super::MockArmClient;
use crate::error::ArmError;
use crate::models::*;
use crate::resource_id;

pub async fn create_or_update_workspace(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    name: &str,
    location: &str,
    sku_name: &str,
    tags: &Tags,
    properties: WorkspaceCreateProperties,
) -> Result<Workspace, ArmError> {
    if let Some(message) = client.workspace_create_error.lock().unwrap().clone() {
        return Err(ArmError::Api(message));
    }

    let id = resource_id::workspace(subscription_id, resource_group, name);

    // PUT on an existing id reuses the provider-assigned identity
    let existing_numeric_id = client
        .workspaces
        .lock()
        .unwrap()
        .get(&id)
        .and_then(|w| w.properties.workspace_id.clone());
    let numeric_id = match existing_numeric_id {
        Some(numeric_id) => numeric_id,
        None => format!("{}", 1_700_000_000_000_000 + client.next_id()),
    };

    let workspace = Workspace {
        id: id.clone(),
        name: name.to_string(),
        location: location.to_string(),
        sku: Sku {
            name: sku_name.to_string(),
        },
        tags: Some(tags.clone()),
        properties: WorkspaceProperties {
            managed_resource_group_id: properties.managed_resource_group_id,
            parameters: Some(properties.parameters),
            public_network_access: Some(properties.public_network_access),
            required_nsg_rules: Some(properties.required_nsg_rules),
            // The mock resolves immediately; the real provider goes through
            // Accepted/Running first
            provisioning_state: Some(ProvisioningState::Succeeded),
            workspace_url: Some(format!("adb-{}.3.azuredatabricks.net", numeric_id)),
            workspace_id: Some(numeric_id),
            created_date_time: Some(chrono::Utc::now()),
        },
    };
    client
        .workspaces
        .lock()
        .unwrap()
        .insert(id, workspace.clone());
    Ok(workspace)
}

pub async fn get_workspace(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    name: &str,
) -> Result<Workspace, ArmError> {
    let id = resource_id::workspace(subscription_id, resource_group, name);
    client
        .workspaces
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| ArmError::NotFound(format!("Workspace {} not found", name)))
}
