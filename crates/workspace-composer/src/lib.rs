//! Databricks Workspace Composer
//!
//! Composes and provisions isolated analytics workspaces: a dedicated spoke
//! virtual network, two delegated subnets with network security groups,
//! optional one-way peering to a shared hub network, compliance tags, and
//! the Databricks workspace itself, wired together with VNet injection.
//!
//! Composition is split from application: [`WorkspacePlan::compose`] is a
//! pure function of the request, and [`Provisioner::provision`] applies the
//! plan against any [`arm_client::ArmClientTrait`] implementation.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use arm_client::ArmClient;
//! use workspace_composer::{Provisioner, WorkspaceRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ArmClient::new(
//!     "https://management.azure.com".to_string(),
//!     "your-access-token".to_string(),
//! )?;
//!
//! let request = WorkspaceRequest::new("data-science", "westeurope", "sub-123", "10.1.0.0/16");
//! let outputs = Provisioner::new(Arc::new(client)).provision(&request).await?;
//! println!("workspace ready at {}", outputs.workspace_url);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod naming;
pub mod network;
pub mod outputs;
pub mod plan;
pub mod provision;
pub mod request;
pub mod tags;

pub use error::ComposeError;
pub use naming::ResourceNames;
pub use network::{NetworkPlan, SpokeCidr};
pub use outputs::{NetworkConfig, WorkspaceOutputs};
pub use plan::{PeeringPlan, WorkspaceParams, WorkspacePlan};
pub use provision::Provisioner;
pub use request::WorkspaceRequest;
pub use tags::{compliance_tags, merge_tags};
