//! Composition and provisioning errors

use arm_client::ArmError;
use thiserror::Error;

/// Errors that can occur while composing or provisioning a workspace
///
/// Validation failures are detected before any resource is declared;
/// provider rejections surface during application. This layer does not
/// retry either kind.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Malformed or missing required input (CIDR parse failure, empty field)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The provider rejected a declared resource (naming collision, quota,
    /// invalid SKU, invalid address range)
    #[error("Provisioning failed: {0}")]
    ProvisionFailed(#[from] ArmError),
}
