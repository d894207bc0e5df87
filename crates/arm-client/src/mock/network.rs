//! Network operations for MockArmClient
//!
//! Handles virtual networks, subnets, network security groups, and peerings

use super::MockArmClient;
use crate::error::ArmError;
use crate::models::*;
use crate::resource_id;

pub async fn create_or_update_network_security_group(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    name: &str,
    location: &str,
    tags: &Tags,
) -> Result<NetworkSecurityGroup, ArmError> {
    let id = resource_id::network_security_group(subscription_id, resource_group, name);
    let nsg = NetworkSecurityGroup {
        id: id.clone(),
        name: name.to_string(),
        location: location.to_string(),
        tags: Some(tags.clone()),
        properties: NetworkSecurityGroupProperties {
            security_rules: vec![],
            provisioning_state: Some(ProvisioningState::Succeeded),
        },
    };
    client
        .network_security_groups
        .lock()
        .unwrap()
        .insert(id, nsg.clone());
    Ok(nsg)
}

pub async fn create_or_update_virtual_network(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    name: &str,
    location: &str,
    address_prefixes: &[String],
    tags: &Tags,
) -> Result<VirtualNetwork, ArmError> {
    let id = resource_id::virtual_network(subscription_id, resource_group, name);
    let vnet = VirtualNetwork {
        id: id.clone(),
        name: name.to_string(),
        location: location.to_string(),
        tags: Some(tags.clone()),
        properties: VirtualNetworkProperties {
            address_space: AddressSpace {
                address_prefixes: address_prefixes.to_vec(),
            },
            subnets: vec![],
            provisioning_state: Some(ProvisioningState::Succeeded),
        },
    };
    client
        .virtual_networks
        .lock()
        .unwrap()
        .insert(id, vnet.clone());
    Ok(vnet)
}

pub async fn get_virtual_network(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    name: &str,
) -> Result<VirtualNetwork, ArmError> {
    let id = resource_id::virtual_network(subscription_id, resource_group, name);
    client
        .virtual_networks
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| ArmError::NotFound(format!("Virtual network {} not found", name)))
}

pub async fn create_or_update_subnet(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    virtual_network: &str,
    name: &str,
    address_prefix: &str,
    network_security_group_id: &str,
    delegation_service: &str,
) -> Result<Subnet, ArmError> {
    // Subnets are children of a vnet; creating one against a missing vnet is
    // an error in ARM as well
    get_virtual_network(client, subscription_id, resource_group, virtual_network).await?;

    let id = resource_id::subnet(subscription_id, resource_group, virtual_network, name);
    let subnet = Subnet {
        id: id.clone(),
        name: name.to_string(),
        properties: SubnetProperties {
            address_prefix: address_prefix.to_string(),
            network_security_group: Some(SubResource::new(network_security_group_id)),
            delegations: vec![Delegation::to_service(delegation_service)],
            provisioning_state: Some(ProvisioningState::Succeeded),
        },
    };
    client.subnets.lock().unwrap().insert(id, subnet.clone());
    Ok(subnet)
}

pub async fn get_subnet(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    virtual_network: &str,
    name: &str,
) -> Result<Subnet, ArmError> {
    let id = resource_id::subnet(subscription_id, resource_group, virtual_network, name);
    client
        .subnets
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| ArmError::NotFound(format!("Subnet {} not found", name)))
}

pub async fn create_or_update_peering(
    client: &MockArmClient,
    subscription_id: &str,
    resource_group: &str,
    virtual_network: &str,
    name: &str,
    mut properties: PeeringProperties,
) -> Result<VirtualNetworkPeering, ArmError> {
    get_virtual_network(client, subscription_id, resource_group, virtual_network).await?;

    let id = resource_id::peering(subscription_id, resource_group, virtual_network, name);
    properties.peering_state = Some("Connected".to_string());
    properties.provisioning_state = Some(ProvisioningState::Succeeded);
    let peering = VirtualNetworkPeering {
        id: id.clone(),
        name: name.to_string(),
        properties,
    };
    client.peerings.lock().unwrap().insert(id, peering.clone());
    Ok(peering)
}
