//! Azure Resource Manager REST API Client
//!
//! A Rust client library for the subset of the ARM REST API that LakeOps
//! provisions: resource groups, virtual networks, subnets, network security
//! groups, VNet peerings, and Azure Databricks workspaces.
//!
//! # Example
//!
//! ```no_run
//! use arm_client::{ArmClient, ArmClientTrait, Tags};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = ArmClient::new(
//!     "https://management.azure.com".to_string(),
//!     "your-access-token".to_string(),
//! )?;
//!
//! // Declare a resource group (PUT is create-or-update)
//! let tags = Tags::new();
//! let rg = client
//!     .create_or_update_resource_group("sub-123", "rg-dbw-data-science-dev", "westeurope", &tags)
//!     .await?;
//! println!("resource group id: {}", rg.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Create-or-update semantics**: every write is an ARM PUT, so the same
//!   declared name always addresses the same managed resource
//! - **Trait-based**: `ArmClientTrait` lets callers swap in `MockArmClient`
//!   (behind the `test-util` feature) for tests
//! - **Request correlation**: every call carries an
//!   `x-ms-correlation-request-id` for the Azure activity log

pub mod client;
pub mod common;
pub mod error;
pub mod models;
pub mod resource_id;
#[path = "trait.rs"]
pub mod arm_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{ArmClient, DEFAULT_BASE_URL};
pub use common::HttpClient;
pub use error::ArmError;
pub use models::*;
pub use arm_trait::ArmClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockArmClient;
