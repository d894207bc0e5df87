//! LakeOps Provisioner
//!
//! Applies one workspace request against Azure Resource Manager:
//! reads a YAML `WorkspaceRequest`, provisions the spoke network, the
//! optional hub peering, and the Databricks workspace, then prints the
//! resolved outputs as JSON.

use anyhow::Context;
use arm_client::{ArmClient, DEFAULT_BASE_URL};
use std::env;
use std::sync::Arc;
use tracing::info;
use workspace_composer::{Provisioner, WorkspaceRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting LakeOps provisioner");

    // Load configuration from environment variables
    let token = env::var("ARM_ACCESS_TOKEN")
        .context("ARM_ACCESS_TOKEN environment variable is required")?;
    let base_url = env::var("ARM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let request_path = env::args()
        .nth(1)
        .context("usage: provisioner <request.yaml>")?;
    let raw = std::fs::read_to_string(&request_path)
        .with_context(|| format!("failed to read request file {}", request_path))?;
    let request: WorkspaceRequest =
        serde_yaml::from_str(&raw).context("failed to parse workspace request")?;

    info!("Configuration:");
    info!("  ARM endpoint: {}", base_url);
    info!("  Request: {}", request_path);
    info!(
        "  Workspace: team={} environment={}",
        request.team_name, request.environment
    );

    let client = ArmClient::new(base_url, token)?;
    client
        .validate_token()
        .await
        .context("ARM token validation failed")?;

    let provisioner = Provisioner::new(Arc::new(client));
    let outputs = provisioner.provision(&request).await?;

    println!("{}", serde_json::to_string_pretty(&outputs)?);

    Ok(())
}
