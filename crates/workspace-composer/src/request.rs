//! Workspace provisioning request
//!
//! The caller-facing input contract. Optional fields carry documented
//! defaults applied at deserialization time; `validate` rejects empty
//! required fields before anything is declared against the provider.

use crate::error::ComposeError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// WorkspaceRequest describes one isolated analytics workspace to provision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceRequest {
    /// Owning team; injected into every resource name and the `team` tag
    pub team_name: String,

    /// Azure region (e.g., "westeurope")
    pub location: String,

    /// Subscription the workspace lands in
    pub subscription_id: String,

    /// Address space of the dedicated spoke network (e.g., "10.1.0.0/16");
    /// the prefix must be /16 or shorter so both /24 subnets fit inside it
    pub spoke_cidr: String,

    /// Hub network to peer with; peering is skipped entirely when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hub_vnet_id: Option<String>,

    /// Pricing/feature tier
    #[serde(default = "default_sku_tier")]
    pub sku_tier: String,

    /// Toggles public network access, the required NSG rule mode, and the
    /// "no public IP" parameter together
    #[serde(default)]
    pub enable_public_access: bool,

    /// Injected into all resource names and the `environment` tag
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Injected into the `cost-center` tag
    #[serde(default = "default_cost_center")]
    pub cost_center: String,

    /// Injected into the `data-classification` tag when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_classification: Option<String>,

    /// Free-form caller tags; compliance tags override colliding keys
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

fn default_sku_tier() -> String {
    "premium".to_string()
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_cost_center() -> String {
    "unassigned".to_string()
}

impl WorkspaceRequest {
    /// Create a request with the required fields and defaults for the rest
    pub fn new(
        team_name: impl Into<String>,
        location: impl Into<String>,
        subscription_id: impl Into<String>,
        spoke_cidr: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            location: location.into(),
            subscription_id: subscription_id.into(),
            spoke_cidr: spoke_cidr.into(),
            hub_vnet_id: None,
            sku_tier: default_sku_tier(),
            enable_public_access: false,
            environment: default_environment(),
            cost_center: default_cost_center(),
            data_classification: None,
            tags: BTreeMap::new(),
        }
    }

    /// Reject requests with empty required fields
    pub fn validate(&self) -> Result<(), ComposeError> {
        for (field, value) in [
            ("teamName", &self.team_name),
            ("location", &self.location),
            ("subscriptionId", &self.subscription_id),
            ("spokeCidr", &self.spoke_cidr),
        ] {
            if value.trim().is_empty() {
                return Err(ComposeError::InvalidArgument(format!(
                    "{} is required and must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_documented_defaults() {
        let request = WorkspaceRequest::new("data-science", "westeurope", "sub-123", "10.1.0.0/16");
        assert_eq!(request.sku_tier, "premium");
        assert!(!request.enable_public_access);
        assert_eq!(request.environment, "dev");
        assert_eq!(request.cost_center, "unassigned");
        assert!(request.hub_vnet_id.is_none());
        assert!(request.tags.is_empty());
    }

    #[test]
    fn deserialization_applies_defaults_for_omitted_fields() {
        let request: WorkspaceRequest = serde_json::from_str(
            r#"{
                "teamName": "data-science",
                "location": "westeurope",
                "subscriptionId": "sub-123",
                "spokeCidr": "10.1.0.0/16"
            }"#,
        )
        .unwrap();

        assert_eq!(request.sku_tier, "premium");
        assert_eq!(request.environment, "dev");
        assert_eq!(request.cost_center, "unassigned");
        assert!(!request.enable_public_access);
    }

    #[test]
    fn validate_rejects_empty_required_fields() {
        let mut request =
            WorkspaceRequest::new("data-science", "westeurope", "sub-123", "10.1.0.0/16");
        assert!(request.validate().is_ok());

        request.team_name = "  ".to_string();
        let err = request.validate().unwrap_err();
        assert!(matches!(err, ComposeError::InvalidArgument(_)));
        assert!(err.to_string().contains("teamName"));
    }
}
