//! Integration tests for the ARM client
//!
//! These tests require a live ARM endpoint and a valid access token.
//! Set ARM_BASE_URL and ARM_ACCESS_TOKEN environment variables to run.

use arm_client::{ArmClient, ArmClientTrait};

fn client_from_env() -> ArmClient {
    let url = std::env::var("ARM_BASE_URL")
        .unwrap_or_else(|_| "https://management.azure.com".to_string());
    let token = std::env::var("ARM_ACCESS_TOKEN")
        .expect("ARM_ACCESS_TOKEN environment variable must be set");

    ArmClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires live Azure credentials
async fn test_token_validation() {
    let client = client_from_env();

    let result = client.validate_token().await;
    assert!(result.is_ok(), "Failed to validate token: {:?}", result);
}

#[tokio::test]
#[ignore]
async fn test_get_missing_resource_group_is_not_found() {
    let client = client_from_env();
    let subscription = std::env::var("ARM_SUBSCRIPTION_ID")
        .expect("ARM_SUBSCRIPTION_ID environment variable must be set");

    let result = client
        .get_resource_group(&subscription, "rg-lakeops-does-not-exist")
        .await;

    assert!(matches!(result, Err(arm_client::ArmError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_get_virtual_network() {
    let client = client_from_env();
    let subscription = std::env::var("ARM_SUBSCRIPTION_ID")
        .expect("ARM_SUBSCRIPTION_ID environment variable must be set");
    let resource_group = std::env::var("ARM_TEST_RESOURCE_GROUP")
        .expect("ARM_TEST_RESOURCE_GROUP environment variable must be set");
    let vnet = std::env::var("ARM_TEST_VNET")
        .expect("ARM_TEST_VNET environment variable must be set");

    let vnet = client
        .get_virtual_network(&subscription, &resource_group, &vnet)
        .await
        .expect("Failed to get virtual network");

    println!(
        "VNet {} has address space {:?}",
        vnet.name, vnet.properties.address_space.address_prefixes
    );
}
